//! # Storefront Entry Point
//!
//! The actual setup is in lib.rs for better testability.

fn main() -> Result<(), storefront_cli::error::ShellError> {
    storefront_cli::run()
}
