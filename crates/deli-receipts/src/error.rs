//! # Receipt Error Types
//!
//! Error types for receipt writing.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  File system error (std::io::Error)                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ReceiptError (this module) ← Adds the path that failed                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CliError (in console app) ← Shown to the operator                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Order kept so checkout can be retried                                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Receipt persistence errors.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// The receipts directory could not be created.
    ///
    /// ## When This Occurs
    /// - A parent path is a regular file
    /// - File permissions issue
    #[error("Could not create receipts directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The receipt file could not be written.
    ///
    /// ## When This Occurs
    /// - Disk full
    /// - Directory became read-only
    #[error("Could not write receipt {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ReceiptError {
    /// The path that could not be created or written.
    pub fn path(&self) -> &PathBuf {
        match self {
            ReceiptError::CreateDir { path, .. } | ReceiptError::Write { path, .. } => path,
        }
    }
}

/// Result type for receipt operations.
pub type ReceiptResult<T> = Result<T, ReceiptError>;
