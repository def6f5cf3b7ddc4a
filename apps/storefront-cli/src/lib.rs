//! # Storefront CLI Library
//!
//! Wires configuration, logging and the seed catalog to the interactive
//! shell.
//!
//! ## Module Organization
//! ```text
//! storefront_cli/
//! ├── lib.rs      ◄─── You are here (startup & run)
//! ├── config.rs   ◄─── Environment configuration
//! ├── seed.rs     ◄─── Hardcoded starting catalog
//! ├── shell.rs    ◄─── Menu loop over stdin/stdout
//! └── error.rs    ◄─── Shell error type
//! ```

pub mod config;
pub mod error;
pub mod seed;
pub mod shell;

use std::io;

use storefront_core::Store;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::ShellConfig;
use error::ShellError;
use shell::Shell;

/// Runs the storefront against the process terminal.
///
/// ## Startup Sequence
/// 1. Initialize logging (stderr, `RUST_LOG` aware)
/// 2. Load configuration from the environment
/// 3. Build the store from the seed catalog
/// 4. Hand the store to the shell until the customer quits
pub fn run() -> Result<(), ShellError> {
    init_tracing();

    let config = ShellConfig::load()?;
    info!(
        store = %config.store_name,
        shipping_fee_cents = config.shipping_fee_cents,
        "Configuration loaded"
    );

    let mut store = Store::with_config(seed::seed_catalog()?, config.store_config())?;
    info!(products = store.products().len(), "Catalog seeded");

    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(&mut store, config.store_name, stdin.lock(), stdout.lock()).run()
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so they never interleave with the menu on stdout.
///
/// ## Log Levels
/// - Default: WARN (rejected orders only)
/// - `RUST_LOG=info` - startup and completed orders
/// - `RUST_LOG=storefront_core=debug` - every purchase and stock change
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
