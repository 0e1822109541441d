//! # DELI-cious Console Entry Point
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        DELI-cious POS Console                           │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                      Terminal (stdin / stdout)                   │  │
//! │  │  • Home menu            • Order menu                             │  │
//! │  │  • Sandwich builder     • Checkout summary                       │  │
//! │  └──────────────────────────────┬───────────────────────────────────┘  │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    deli_console_lib                              │  │
//! │  │                                                                  │  │
//! │  │  main.rs ────► Calls run()                                       │  │
//! │  │  lib.rs ─────► Logging, config, session                          │  │
//! │  │  commands/ ──► home, order, sandwich, drink, chips, checkout     │  │
//! │  │  state/ ─────► SessionState, ConfigState                         │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    Receipts directory                            │  │
//! │  │  20240315-143052.txt, 20240315-143052-1.txt, ...                 │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    deli_console_lib::run()
}
