//! # State Module
//!
//! State the console screens share.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────────┐  ┌──────────────────────────────┐    │
//! │  │        SessionState          │  │        ConfigState           │    │
//! │  │                              │  │                              │    │
//! │  │  Option<Order>               │  │  store_name                  │    │
//! │  │  start / finish / cancel     │  │  receipts_dir                │    │
//! │  └──────────────────────────────┘  └──────────────────────────────┘    │
//! │                                                                         │
//! │  SessionState: mutated by the order screens, one order at a time       │
//! │  ConfigState: read-only after startup                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::ConfigState;
pub use session::SessionState;
