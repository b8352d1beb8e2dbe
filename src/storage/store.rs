//! Whole-state snapshot persistence
//!
//! One JSON record on disk holds the entire budget state. Saves replace the
//! record atomically; loads adopt the record field by field so a damaged
//! field never takes the rest of the state down with it.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

use crate::config::PerdiemPaths;
use crate::error::{PerdiemError, PerdiemResult};
use crate::models::{BudgetState, Money, Period, Transaction};

/// The serialized snapshot shape
///
/// `balance` is omitted while unset; `period` is a start/end pair of
/// ISO-8601 instants.
#[derive(Serialize)]
struct SnapshotRecord<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    balance: Option<Money>,
    transactions: &'a [Transaction],
    period: [String; 2],
}

/// Persistent store for the single budget snapshot
///
/// One active session per data directory is assumed; writes are not
/// coordinated across processes.
pub struct BudgetStore {
    snapshot_path: PathBuf,
}

impl BudgetStore {
    /// Create a store rooted at the given paths, ensuring the data directory exists
    pub fn new(paths: &PerdiemPaths) -> PerdiemResult<Self> {
        paths.ensure_directories()?;
        Ok(Self {
            snapshot_path: paths.snapshot_file(),
        })
    }

    /// Where the snapshot lives on disk
    pub fn snapshot_path(&self) -> &Path {
        &self.snapshot_path
    }

    /// Load the last saved state
    ///
    /// Returns None when nothing usable was ever written: no file, an
    /// unreadable file, or a root that is not a JSON object. Otherwise each
    /// field is adopted only if present and well-typed; a missing or
    /// mistyped field falls back to its default without disturbing the
    /// others, and an unusable period becomes the current calendar month.
    pub fn load(&self) -> Option<BudgetState> {
        let file = File::open(&self.snapshot_path).ok()?;
        let value: Value = serde_json::from_reader(BufReader::new(file)).ok()?;
        if !value.is_object() {
            return None;
        }

        let mut state = BudgetState::default();

        if let Some(balance) = value.get("balance") {
            if let Ok(balance) = serde_json::from_value::<Option<Money>>(balance.clone()) {
                state.balance = balance;
            }
        }

        if let Some(transactions) = value.get("transactions") {
            if let Ok(transactions) =
                serde_json::from_value::<Vec<Transaction>>(transactions.clone())
            {
                state.transactions = transactions;
            }
        }

        state.period = period_from_value(value.get("period")).unwrap_or_else(Period::current_month);

        Some(state)
    }

    /// Replace the snapshot with the given state
    ///
    /// The whole record is rewritten on every save; there are no partial
    /// updates. The write goes to a temp file in the same directory, is
    /// flushed and synced, then renamed over the old record.
    pub fn save(&self, state: &BudgetState) -> PerdiemResult<()> {
        let record = SnapshotRecord {
            balance: state.balance,
            transactions: &state.transactions,
            period: state.period.to_bounds(),
        };
        self.write_atomic(&record)
    }

    fn write_atomic<T: Serialize>(&self, record: &T) -> PerdiemResult<()> {
        if let Some(parent) = self.snapshot_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                PerdiemError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        // Temp file in the same directory (important for atomic rename)
        let temp_path = self.snapshot_path.with_extension("json.tmp");

        let file = File::create(&temp_path)
            .map_err(|e| PerdiemError::Storage(format!("Failed to create temp file: {}", e)))?;

        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, record)?;

        writer.flush()?;

        // Sync to disk before rename
        writer.get_ref().sync_all()?;

        // Atomic rename
        fs::rename(&temp_path, &self.snapshot_path).map_err(|e| {
            // Try to clean up temp file if rename fails
            let _ = fs::remove_file(&temp_path);
            PerdiemError::Storage(format!("Failed to rename temp file: {}", e))
        })?;

        Ok(())
    }
}

/// Decode the persisted period bounds, if they are usable
fn period_from_value(value: Option<&Value>) -> Option<Period> {
    let bounds = value?.as_array()?;
    if bounds.len() != 2 {
        return None;
    }
    Period::from_bounds(bounds[0].as_str()?, bounds[1].as_str()?)
}
