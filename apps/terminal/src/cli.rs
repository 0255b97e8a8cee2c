//! Command line flags for the `hearth` binary.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "hearth", version)]
#[command(about = "Interactive food ordering counter")]
pub struct Cli {
    /// TOML file with outlet, display and menu settings
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable debug logging on stderr")]
    pub verbose: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}
