//! Durable best-score record.
//!
//! The record is a single key ([`BEST_SCORE_KEY`]) mapped to an integer. Reads
//! never fail: a missing, unreadable or non-numeric record is a best of 0.
//! Writes can fail, and callers treat that as non-fatal.

use std::cell::RefCell;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::types::BEST_SCORE_KEY;

const STORE_FILE_NAME: &str = "best.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write best score to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode best score record: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("best score store is unavailable")]
    Unavailable,
}

/// Persistence boundary for the best score.
pub trait BestScoreStore {
    /// Stored best, or 0 when absent or corrupt.
    fn load_best(&self) -> u32;
    fn save_best(&mut self, best: u32) -> Result<(), StoreError>;
}

/// Interpret a stored value. Accepts JSON numbers and numeric strings.
pub fn parse_best(value: &Value) -> u32 {
    let parsed = match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    parsed
        .map(|v| u32::try_from(v).unwrap_or(u32::MAX))
        .unwrap_or(0)
}

/// Data directory: `CAR_COUNTER_DATA_DIR`, else the platform local data dir.
pub fn default_data_dir() -> PathBuf {
    if let Ok(dir) = env::var("CAR_COUNTER_DATA_DIR") {
        if !dir.trim().is_empty() {
            return PathBuf::from(dir);
        }
    }
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("car-counter")
}

/// Best score kept in a JSON object file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<data dir>/best.json`.
    pub fn in_default_location() -> Self {
        Self::new(default_data_dir().join(STORE_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_record(&self) -> Option<Map<String, Value>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return None,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "failed to read best score");
                return None;
            }
        };
        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(map)) => Some(map),
            Ok(_) => {
                tracing::warn!(path = %self.path.display(), "best score record is not an object");
                None
            }
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "failed to parse best score");
                None
            }
        }
    }

    fn io_err(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl BestScoreStore for JsonFileStore {
    fn load_best(&self) -> u32 {
        self.read_record()
            .and_then(|map| map.get(BEST_SCORE_KEY).map(parse_best))
            .unwrap_or(0)
    }

    fn save_best(&mut self, best: u32) -> Result<(), StoreError> {
        let mut record = self.read_record().unwrap_or_default();
        record.insert(BEST_SCORE_KEY.to_string(), Value::from(best));
        let encoded = serde_json::to_vec_pretty(&Value::Object(record))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_err(e))?;
            }
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, encoded).map_err(|e| self.io_err(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_err(e))?;
        Ok(())
    }
}

/// In-memory store. Clones share the same record, so a test can keep a handle
/// while the controller owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<MemoryRecord>>,
}

#[derive(Debug, Default)]
struct MemoryRecord {
    value: Option<Value>,
    fail_writes: bool,
    writes: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_best(best: u32) -> Self {
        Self::with_raw(Value::from(best))
    }

    /// Seed the record with an arbitrary value, e.g. a corrupt one.
    pub fn with_raw(value: Value) -> Self {
        let store = Self::default();
        store.inner.borrow_mut().value = Some(value);
        store
    }

    /// Make every subsequent `save_best` fail.
    pub fn fail_writes(&self, fail: bool) {
        self.inner.borrow_mut().fail_writes = fail;
    }

    /// Raw stored value.
    pub fn raw(&self) -> Option<Value> {
        self.inner.borrow().value.clone()
    }

    /// Number of successful writes.
    pub fn writes(&self) -> u32 {
        self.inner.borrow().writes
    }
}

impl BestScoreStore for MemoryStore {
    fn load_best(&self) -> u32 {
        self.inner.borrow().value.as_ref().map(parse_best).unwrap_or(0)
    }

    fn save_best(&mut self, best: u32) -> Result<(), StoreError> {
        let mut record = self.inner.borrow_mut();
        if record.fail_writes {
            return Err(StoreError::Unavailable);
        }
        record.value = Some(Value::from(best));
        record.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_best_accepts_numbers_and_numeric_strings() {
        assert_eq!(parse_best(&json!(7)), 7);
        assert_eq!(parse_best(&json!("12")), 12);
        assert_eq!(parse_best(&json!(" 4 ")), 4);
    }

    #[test]
    fn parse_best_treats_garbage_as_zero() {
        assert_eq!(parse_best(&json!("abc")), 0);
        assert_eq!(parse_best(&json!(-3)), 0);
        assert_eq!(parse_best(&json!(2.5)), 0);
        assert_eq!(parse_best(&json!(null)), 0);
        assert_eq!(parse_best(&json!([1])), 0);
    }

    #[test]
    fn memory_store_shares_state_between_clones() {
        let store = MemoryStore::with_best(5);
        let mut handle = store.clone();
        assert_eq!(handle.load_best(), 5);
        handle.save_best(9).unwrap();
        assert_eq!(store.load_best(), 9);
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn memory_store_failing_writes_keep_old_value() {
        let mut store = MemoryStore::with_best(3);
        store.fail_writes(true);
        assert!(matches!(store.save_best(8), Err(StoreError::Unavailable)));
        assert_eq!(store.load_best(), 3);
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn json_file_store_missing_file_reads_zero() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nope.json"));
        assert_eq!(store.load_best(), 0);
    }

    #[test]
    fn json_file_store_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("best.json");
        let mut store = JsonFileStore::new(&path);
        store.save_best(11).unwrap();
        assert_eq!(JsonFileStore::new(&path).load_best(), 11);
        assert!(!path.with_extension("json.tmp").exists());
    }
}
