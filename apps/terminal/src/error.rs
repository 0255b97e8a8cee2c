//! # Application Error Type
//!
//! Unified error type for the terminal.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Terminal                           │
//! │                                                                         │
//! │  Cart rule broken (bad qty, item not in cart)                           │
//! │      └──► handled inside the command: message printed, loop continues   │
//! │                                                                         │
//! │  Config invalid / unreadable                                            │
//! │      └──► AppError ──► main prints it and exits with failure            │
//! │                                                                         │
//! │  Input closed (Ctrl-D, end of script)                                   │
//! │      └──► AppError::InputClosed ──► session ends cleanly                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use hearth_core::{CoreError, ValidationError};
use thiserror::Error;

/// Errors surfaced by the terminal.
#[derive(Debug, Error)]
pub enum AppError {
    /// Reading stdin or writing stdout failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input stream ended while waiting for an answer.
    #[error("Input closed")]
    InputClosed,

    /// A main-menu number outside 1-7.
    #[error("Unknown menu option: {0}")]
    InvalidChoice(i64),

    /// An explicitly requested config file does not exist.
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// The config file is not valid TOML for `TerminalConfig`.
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The effective config could not be written out as TOML.
    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// A menu entry in the config is invalid.
    #[error("Invalid menu entry {id}: {source}")]
    MenuEntry {
        id: u32,
        #[source]
        source: ValidationError,
    },

    /// Config values broke a business rule.
    #[error("Invalid config: {0}")]
    Validation(#[from] ValidationError),

    /// Core business logic error.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience alias for terminal results.
pub type AppResult<T> = Result<T, AppError>;
