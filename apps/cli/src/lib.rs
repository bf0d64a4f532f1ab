//! # Shopkeep CLI Library
//!
//! Services, configuration and the text menu for the `shopkeep` binary.
//!
//! ## Module Organization
//! ```text
//! shopkeep_cli_lib/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── AppState (store + config)
//! │   └── config.rs   ◄─── AppConfig from SHOPKEEP_* variables
//! ├── services/
//! │   ├── catalog.rs  ◄─── Products and customers
//! │   ├── cart.rs     ◄─── Cart operations
//! │   └── checkout.rs ◄─── Checkout and order ids
//! ├── commands/
//! │   ├── mod.rs      ◄─── Console, prompts, main menu
//! │   ├── product.rs  ◄─── Products menu
//! │   ├── customer.rs ◄─── Customers menu
//! │   └── cart.rs     ◄─── Cart menu and receipts
//! └── error.rs        ◄─── AppError and ErrorCode
//! ```

pub mod commands;
pub mod error;
pub mod services;
pub mod state;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use commands::Console;
use state::{AppConfig, AppState};

/// Runs an interactive session on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • AppConfig::from_env() over defaults                               │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • RUST_LOG if set, else SHOPKEEP_LOG, else "warn"                   │
/// │     • Written to stderr so the menu output stays clean                  │
/// │                                                                         │
/// │  3. Build State ──────────────────────────────────────────────────────► │
/// │     • Store (demo data if SHOPKEEP_SEED_DEMO)                           │
/// │                                                                         │
/// │  4. Run the Console ──────────────────────────────────────────────────► │
/// │     • Until "0" or end of input                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> io::Result<()> {
    let config = AppConfig::from_env();
    init_tracing(&config.log_filter);

    info!(store_name = %config.store_name, "Starting Shopkeep");

    let state = AppState::new(config);
    let stdin = io::stdin();
    let stdout = io::stdout();

    Console::new(state, stdin.lock(), stdout.lock()).run()?;

    info!("Session ended");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=shopkeep_store=debug` - Repository traffic only
/// - Default: `default_filter` (from `SHOPKEEP_LOG`, `warn` if unset)
pub fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
