//! # Configuration State
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`DELI_*`)
//! 2. Defaults (this file)
//!
//! Read-only after initialization.

use deli_receipts::{ReceiptConfig, ReceiptHeader, DEFAULT_STORE_NAME};
use directories::ProjectDirs;
use serde::Serialize;
use std::path::PathBuf;

/// Environment variable overriding the store name on receipts.
pub const STORE_NAME_VAR: &str = "DELI_STORE_NAME";

/// Environment variable overriding where receipts are written.
pub const RECEIPTS_DIR_VAR: &str = "DELI_RECEIPTS_DIR";

/// Console configuration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (receipt header and welcome banner)
    pub store_name: String,

    /// Directory receipts are written to
    pub receipts_dir: PathBuf,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Store: "DELI-cious Sandwiches"
    /// - Receipts: `<platform data dir>/receipts`, or `./receipts` when the
    ///   platform has no data dir
    fn default() -> Self {
        ConfigState {
            store_name: DEFAULT_STORE_NAME.to_string(),
            receipts_dir: default_receipts_dir(),
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `DELI_STORE_NAME`: Override store name
    /// - `DELI_RECEIPTS_DIR`: Override receipts directory
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`] with a custom variable source.
    ///
    /// Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ConfigState::default();
        let set = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(store_name) = set(STORE_NAME_VAR) {
            config.store_name = store_name.trim().to_string();
        }

        if let Some(dir) = set(RECEIPTS_DIR_VAR) {
            config.receipts_dir = PathBuf::from(dir);
        }

        config
    }

    /// JSON snapshot for the startup log.
    pub fn snapshot(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Receipt store settings derived from this configuration.
    pub fn receipt_config(&self) -> ReceiptConfig {
        ReceiptConfig::new(&self.receipts_dir).header(ReceiptHeader::new(&self.store_name))
    }
}

/// Platform-specific receipts directory.
///
/// - **macOS**: `~/Library/Application Support/com.deli-cious.pos/receipts`
/// - **Windows**: `%APPDATA%\deli-cious\pos\data\receipts`
/// - **Linux**: `~/.local/share/pos/receipts`
fn default_receipts_dir() -> PathBuf {
    ProjectDirs::from("com", "deli-cious", "pos")
        .map(|dirs| dirs.data_dir().join("receipts"))
        .unwrap_or_else(|| PathBuf::from("receipts"))
}
