//! Test helpers: scripted prompters and receipt store doubles.

use chrono::NaiveDateTime;
use deli_receipts::{ReceiptError, ReceiptResult, ReceiptStore};
use std::io::{self, Cursor};
use std::path::PathBuf;
use std::sync::Mutex;

use crate::input::Prompter;

pub(crate) type ScriptedPrompter = Prompter<Cursor<Vec<u8>>, Vec<u8>>;

/// A prompter that answers with `script`, one line per prompt.
pub(crate) fn prompter(script: &str) -> ScriptedPrompter {
    Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
}

/// Everything the prompter has written.
pub(crate) fn shown(p: ScriptedPrompter) -> String {
    String::from_utf8(p.into_output()).unwrap()
}

/// Keeps every rendered order it is asked to save.
#[derive(Default)]
pub(crate) struct RecordingStore {
    saved: Mutex<Vec<String>>,
}

impl RecordingStore {
    pub(crate) fn saved(&self) -> Vec<String> {
        self.saved.lock().unwrap().clone()
    }
}

impl ReceiptStore for RecordingStore {
    fn save(&self, rendered_order: &str, timestamp: NaiveDateTime) -> ReceiptResult<PathBuf> {
        let mut saved = self.saved.lock().unwrap();
        saved.push(rendered_order.to_string());
        Ok(PathBuf::from(format!(
            "receipts/{}-{}.txt",
            timestamp.format("%Y%m%d-%H%M%S"),
            saved.len()
        )))
    }
}

/// Fails every save as if the disk were full.
pub(crate) struct FailingStore;

impl ReceiptStore for FailingStore {
    fn save(&self, _rendered_order: &str, _timestamp: NaiveDateTime) -> ReceiptResult<PathBuf> {
        Err(ReceiptError::Write {
            path: PathBuf::from("receipts/unwritable.txt"),
            source: io::Error::new(io::ErrorKind::Other, "disk full"),
        })
    }
}
