//! # Hearth Terminal
//!
//! The ordering counter: a prompt loop over `hearth-core`.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          hearth-terminal                                │
//! │                                                                         │
//! │  main.rs ─────► parses flags, calls run()                              │
//! │                                                                         │
//! │  lib.rs ──────► logging, config, builds the Session                    │
//! │                                                                         │
//! │  config.rs ───► outlet, currency symbol, menu (TOML + HEARTH_* env)    │
//! │                                                                         │
//! │  session.rs ──► main menu loop                                         │
//! │                                                                         │
//! │  commands/ ───► view_menu, add_item, update_item, place_order, ...     │
//! │                                                                         │
//! │  console.rs ──► prompts and validated input over BufRead/Write         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (stderr)
//! 2. Load configuration
//! 3. Build the catalog and renderer
//! 4. Run the session on stdin/stdout

pub mod cli;
pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod session;

use std::io::{self, Write};

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::TerminalConfig;
use console::Console;
use error::AppResult;
use session::Session;

/// Runs the counter until the customer exits.
pub fn run(cli: Cli) -> AppResult<()> {
    init_tracing(cli.verbose);

    let config = TerminalConfig::load(cli.config)?;

    if cli.print_config {
        let mut stdout = io::stdout().lock();
        stdout.write_all(config.to_toml()?.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    }

    let catalog = config.catalog()?;
    info!(
        outlet = %catalog.outlet().id(),
        foods = catalog.len(),
        "Starting Hearth terminal"
    );

    let console = Console::new(io::stdin().lock(), io::stdout().lock());
    let mut session = Session::new(catalog, config.renderer(), console);
    session.run()?;

    info!("Session ended");
    Ok(())
}

/// Initializes the tracing subscriber.
///
/// ## Log Levels
/// - `RUST_LOG` always wins when set
/// - `--verbose` - debug output from hearth crates
/// - otherwise only warnings
///
/// Logs go to stderr; stdout belongs to the customer.
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "hearth_terminal=debug,hearth_core=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();

    // A second run() in the same process keeps the first subscriber.
    if let Err(e) = installed {
        debug!(error = %e, "Tracing subscriber already installed");
    }
}
