//! # DELI-cious Console Library
//!
//! The counter application: text menus over stdin/stdout that build an
//! order and write a receipt at checkout.
//!
//! ## Module Organization
//! ```text
//! deli_console_lib/
//! ├── lib.rs          ◄─── You are here (startup & session)
//! ├── input.rs        ◄─── Prompter over any reader/writer
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── config.rs   ◄─── Store name, receipts directory
//! │   └── session.rs  ◄─── The active order
//! ├── commands/
//! │   ├── mod.rs      ◄─── Shared menu helpers
//! │   ├── home.rs     ◄─── Home screen
//! │   ├── order.rs    ◄─── Order screen, cancel
//! │   ├── sandwich.rs ◄─── Custom and signature sandwiches
//! │   ├── drink.rs    ◄─── Drinks
//! │   ├── chips.rs    ◄─── Chips
//! │   └── checkout.rs ◄─── Checkout and receipt
//! └── error.rs        ◄─── CliError for the screens
//! ```

pub mod commands;
pub mod error;
pub mod input;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

use deli_receipts::{FileReceiptStore, ReceiptStore};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use error::CliResult;
use input::Prompter;
use state::{ConfigState, SessionState};

/// Runs the console application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: warn,deli=info, can be overridden with RUST_LOG          │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • DELI_STORE_NAME, DELI_RECEIPTS_DIR                                │
/// │                                                                         │
/// │  3. Create Receipt Store ─────────────────────────────────────────────► │
/// │     • Directory is created on the first checkout                        │
/// │                                                                         │
/// │  4. Run Session ──────────────────────────────────────────────────────► │
/// │     • Home screen until Exit or end of input                            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> ExitCode {
    init_tracing();

    let config = ConfigState::from_env();
    match config.snapshot() {
        Ok(snapshot) => info!(config = %snapshot, "Starting DELI-cious POS"),
        Err(err) => warn!(%err, "Starting DELI-cious POS, config snapshot unavailable"),
    }

    let store = FileReceiptStore::new(config.receipt_config());
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());
    let mut session = SessionState::new();

    match run_session(&mut prompter, &mut session, &store, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(code = ?err.code, "session aborted: {}", err.message);
            eprintln!("{}", err.message);
            ExitCode::FAILURE
        }
    }
}

/// Drives one session from the welcome banner to exit.
///
/// End of input is a normal way to finish: any unfinished order is
/// dropped without a receipt.
pub fn run_session<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    session: &mut SessionState,
    store: &dyn ReceiptStore,
    config: &ConfigState,
) -> CliResult<()> {
    match commands::home::home_screen(p, session, store, config) {
        Err(err) if err.is_input_closed() => {
            if let Some(order) = session.cancel() {
                info!(order_id = %order.id(), "input closed with an open order");
            }
            info!("input closed, ending session");
            Ok(())
        }
        result => result,
    }
}

/// Initializes tracing with an env filter, writing to stderr so log lines
/// never land inside the menus.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,deli=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
