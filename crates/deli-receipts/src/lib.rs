//! # deli-receipts: Receipt Layer for DELI-cious POS
//!
//! Formats checked-out orders as receipts and keeps them as text files.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     DELI-cious Checkout Flow                            │
//! │                                                                         │
//! │  Console checkout (confirm)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   deli-receipts (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │    format     │    │     store     │    │    error     │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ ReceiptHeader │◄───│ ReceiptStore  │───►│ ReceiptError │  │   │
//! │  │   │ format_receipt│    │ FileReceipt-  │    │              │  │   │
//! │  │   │               │    │ Store         │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │   <receipts dir>/20240315-143052.txt                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`format`] - Receipt header, date line and footer
//! - [`store`] - The `ReceiptStore` seam and the file-backed store
//! - [`error`] - Receipt error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use deli_core::{Chips, Order};
//! use deli_receipts::{FileReceiptStore, ReceiptConfig, ReceiptStore};
//!
//! let store = FileReceiptStore::new(ReceiptConfig::new("receipts"));
//!
//! let mut order = Order::new();
//! order.add_product(Chips::new("Lays"));
//!
//! let path = store.save_order(&order, chrono::Local::now().naive_local())?;
//! println!("saved {}", path.display());
//! # Ok::<(), deli_receipts::ReceiptError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod format;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{ReceiptError, ReceiptResult};
pub use format::{format_receipt, ReceiptHeader, DEFAULT_STORE_NAME};
pub use store::{FileReceiptStore, ReceiptConfig, ReceiptStore};
