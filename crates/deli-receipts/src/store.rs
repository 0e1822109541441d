//! # Receipt Store
//!
//! Where finished orders go at checkout.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Receipt Persistence                              │
//! │                                                                         │
//! │  Checkout confirmed                                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ReceiptStore::save_order(&order, now)                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │  FileReceiptStore                        │                           │
//! │  │   1. create_dir_all(dir)                 │                           │
//! │  │   2. 20240315-143052.txt                 │                           │
//! │  │      taken? → 20240315-143052-1.txt      │                           │
//! │  │      taken? → 20240315-143052-2.txt ...  │                           │
//! │  │   3. write header + summary + footer     │                           │
//! │  └─────────────────────────────────────────┘                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Ok(path) → order discarded    Err(_) → order kept for retry           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDateTime;
use deli_core::Order;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

use crate::error::{ReceiptError, ReceiptResult};
use crate::format::{format_receipt, ReceiptHeader};

/// `20240315-143052`
const FILE_STEM_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Gives up looking for a free file name after this many suffixes.
const MAX_NAME_ATTEMPTS: u32 = 1000;

// =============================================================================
// Store Trait
// =============================================================================

/// Persists a rendered order summary as a receipt.
pub trait ReceiptStore: Send + Sync {
    /// Saves one receipt and returns where it went.
    ///
    /// A failed save leaves nothing behind that a retry would collide with
    /// in a way that loses data.
    fn save(&self, rendered_order: &str, timestamp: NaiveDateTime) -> ReceiptResult<PathBuf>;

    /// Renders `order` and saves it.
    fn save_order(&self, order: &Order, timestamp: NaiveDateTime) -> ReceiptResult<PathBuf> {
        debug!(order_id = %order.id(), items = order.len(), "saving receipt");
        self.save(&order.render(), timestamp)
    }
}

// =============================================================================
// Configuration
// =============================================================================

/// Receipt store configuration.
///
/// ## Example
/// ```rust
/// use deli_receipts::{ReceiptConfig, ReceiptHeader};
///
/// let config = ReceiptConfig::new("./receipts")
///     .header(ReceiptHeader::new("DELI-cious Downtown"));
/// assert_eq!(config.header.store_name, "DELI-cious Downtown");
/// ```
#[derive(Debug, Clone)]
pub struct ReceiptConfig {
    /// Directory receipts are written to. Created on first save.
    pub dir: PathBuf,

    /// Header box contents.
    pub header: ReceiptHeader,
}

impl ReceiptConfig {
    /// Creates a configuration writing to `dir` with the default header.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        ReceiptConfig {
            dir: dir.into(),
            header: ReceiptHeader::default(),
        }
    }

    /// Sets the header printed on every receipt.
    pub fn header(mut self, header: ReceiptHeader) -> Self {
        self.header = header;
        self
    }
}

// =============================================================================
// File Store
// =============================================================================

/// Writes each receipt to its own timestamped text file.
#[derive(Debug, Clone)]
pub struct FileReceiptStore {
    config: ReceiptConfig,
}

impl FileReceiptStore {
    pub fn new(config: ReceiptConfig) -> Self {
        FileReceiptStore { config }
    }

    pub fn dir(&self) -> &Path {
        &self.config.dir
    }

    /// Ensures the receipts directory exists.
    fn ensure_dir(&self) -> ReceiptResult<()> {
        fs::create_dir_all(&self.config.dir).map_err(|source| {
            error!(path = %self.config.dir.display(), error = %source, "failed to create receipts directory");
            ReceiptError::CreateDir {
                path: self.config.dir.clone(),
                source,
            }
        })
    }

    /// Creates the first free file for `stem`, never reusing an existing one.
    fn create_unique(&self, stem: &str) -> ReceiptResult<(PathBuf, fs::File)> {
        for attempt in 0..MAX_NAME_ATTEMPTS {
            let name = if attempt == 0 {
                format!("{stem}.txt")
            } else {
                format!("{stem}-{attempt}.txt")
            };
            let path = self.config.dir.join(name);

            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => return Ok((path, file)),
                Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                    debug!(path = %path.display(), "receipt name taken");
                }
                Err(source) => return Err(self.write_failed(path, source)),
            }
        }

        let path = self.config.dir.join(format!("{stem}.txt"));
        Err(self.write_failed(
            path,
            io::Error::new(io::ErrorKind::AlreadyExists, "no free receipt file name"),
        ))
    }

    fn write_failed(&self, path: PathBuf, source: io::Error) -> ReceiptError {
        error!(path = %path.display(), error = %source, "failed to write receipt");
        ReceiptError::Write { path, source }
    }
}

impl ReceiptStore for FileReceiptStore {
    fn save(&self, rendered_order: &str, timestamp: NaiveDateTime) -> ReceiptResult<PathBuf> {
        self.ensure_dir()?;

        let stem = timestamp.format(FILE_STEM_FORMAT).to_string();
        let (path, mut file) = self.create_unique(&stem)?;

        let receipt = format_receipt(&self.config.header, rendered_order, timestamp);
        if let Err(source) = file.write_all(receipt.as_bytes()).and_then(|()| file.flush()) {
            drop(file);
            // A half-written receipt would be mistaken for a real one.
            let _ = fs::remove_file(&path);
            return Err(self.write_failed(path, source));
        }

        info!(path = %path.display(), "receipt saved");
        Ok(path)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use deli_core::{Chips, Drink, DrinkSize};

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(12, 0, 1)
            .unwrap()
    }

    fn store_in(dir: &Path) -> FileReceiptStore {
        FileReceiptStore::new(ReceiptConfig::new(dir.join("receipts")))
    }

    #[test]
    fn test_save_creates_dir_and_file() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(tmp.path());

        let path = store.save("Order Summary:\n", noon()).unwrap();

        assert_eq!(path, tmp.path().join("receipts").join("20240315-120001.txt"));
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("Date: 03/15/2024 12:00:01 PM"));
        assert!(written.contains("Order Summary:\n"));
        assert!(written.ends_with("We hope you enjoy your meal!\n"));
    }

    #[test]
    fn test_same_second_does_not_overwrite() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(tmp.path());

        let first = store.save("first\n", noon()).unwrap();
        let second = store.save("second\n", noon()).unwrap();
        let third = store.save("third\n", noon()).unwrap();

        assert_eq!(first.file_name().unwrap(), "20240315-120001.txt");
        assert_eq!(second.file_name().unwrap(), "20240315-120001-1.txt");
        assert_eq!(third.file_name().unwrap(), "20240315-120001-2.txt");
        assert!(fs::read_to_string(&first).unwrap().contains("first"));
        assert!(fs::read_to_string(&second).unwrap().contains("second"));
    }

    #[test]
    fn test_save_order_writes_rendered_summary() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(tmp.path());

        let mut order = Order::new();
        order.add_product(Drink::new(DrinkSize::Large, "Root Beer"));
        order.add_product(Chips::new("Lays"));

        let path = store.save_order(&order, noon()).unwrap();
        let written = fs::read_to_string(path).unwrap();

        assert!(written.contains(&order.render()));
        assert!(written.contains("1. Large Root Beer - $3.00\n"));
        assert!(written.contains("Total: $4.50\n"));
    }

    #[test]
    fn test_custom_header() {
        let tmp = tempfile::tempdir().unwrap();
        let config = ReceiptConfig::new(tmp.path()).header(ReceiptHeader::new("Deli Two"));
        let store = FileReceiptStore::new(config);

        let path = store.save("", noon()).unwrap();
        let written = fs::read_to_string(path).unwrap();
        assert!(written.contains("║          Deli Two"));
    }

    #[test]
    fn test_unwritable_dir_reports_create_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("not-a-dir");
        fs::write(&blocker, "occupied").unwrap();

        let store = FileReceiptStore::new(ReceiptConfig::new(blocker.join("receipts")));
        let err = store.save("Order Summary:\n", noon()).unwrap_err();

        assert!(matches!(err, ReceiptError::CreateDir { .. }));
        assert_eq!(err.path(), &blocker.join("receipts"));
    }
}
