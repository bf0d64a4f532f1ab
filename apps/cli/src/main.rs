//! # Shopkeep Entry Point
//!
//! ```text
//! $ SHOPKEEP_SEED_DEMO=1 shopkeep
//! Welcome to Shopkeep
//!
//! 1) Products  2) Customers  3) Cart  0) Exit
//! >
//! ```
//!
//! The actual setup is in lib.rs so tests can drive the same code.

use std::process::ExitCode;

fn main() -> ExitCode {
    match shopkeep_cli_lib::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("shopkeep: {}", e);
            ExitCode::FAILURE
        }
    }
}
