//! # Shell Error Type
//!
//! Failures that stop the shell itself. Order failures are NOT here: they
//! are printed to the customer and the menu keeps running.

use storefront_core::CoreError;

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    /// Reading the terminal or writing to it failed.
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The seed catalog or store could not be built.
    #[error("Could not set up the store: {0}")]
    Setup(#[from] CoreError),
}
