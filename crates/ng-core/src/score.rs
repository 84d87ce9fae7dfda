//! Best-time record
//!
//! One global best completion time, stored as `{"high_score": <seconds>}`.
//! A missing or unreadable record loads as "no best yet".

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

/// Score persistence errors
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid best time: {0}")]
    InvalidTime(f64),
}

/// On-disk shape of the record
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ScoreRecord {
    high_score: f64,
}

/// Persisted best completion time
#[derive(Debug, Clone)]
pub struct ScoreStore {
    path: PathBuf,
    best: Option<f64>,
}

impl ScoreStore {
    /// Load the record at `path`
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let best = match read_record(&path) {
            Ok(None) => None,
            Ok(Some(record)) if is_valid_time(record.high_score) => Some(record.high_score),
            Ok(Some(record)) => {
                warn!(path = %path.display(), value = record.high_score, "ignoring invalid best time");
                None
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring unreadable best-time record");
                None
            }
        };
        Self { path, best }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lowest recorded time in seconds
    pub fn best_time(&self) -> Option<f64> {
        self.best
    }

    /// Whether `elapsed` would beat the current best
    pub fn is_best(&self, elapsed: f64) -> bool {
        self.best.is_none_or(|best| elapsed < best)
    }

    /// Store `elapsed` if it beats the current best
    ///
    /// Returns `Ok(true)` on improvement and `Ok(false)` otherwise. On a
    /// failed write the in-memory best still holds the new time.
    pub fn record_if_best(&mut self, elapsed: f64) -> Result<bool, ScoreError> {
        if !is_valid_time(elapsed) {
            return Err(ScoreError::InvalidTime(elapsed));
        }
        if !self.is_best(elapsed) {
            return Ok(false);
        }

        let previous = self.best.replace(elapsed);
        info!(elapsed, ?previous, "new best time");
        self.save()?;
        Ok(true)
    }

    /// Forget the best time and delete the record
    pub fn clear(&mut self) -> Result<(), ScoreError> {
        self.best = None;
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self) -> Result<(), ScoreError> {
        let Some(high_score) = self.best else {
            return Ok(());
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, &ScoreRecord { high_score })?;
        writer.flush()?;
        Ok(())
    }
}

fn read_record(path: &Path) -> Result<Option<ScoreRecord>, ScoreError> {
    if !path.exists() {
        return Ok(None);
    }
    let file = File::open(path)?;
    let record = serde_json::from_reader(BufReader::new(file))?;
    Ok(Some(record))
}

fn is_valid_time(secs: f64) -> bool {
    secs.is_finite() && secs >= 0.0
}

/// Default record location: `<data dir>/numguess/highscore.json`
pub fn default_score_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("numguess");
    path.push("highscore.json");
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("numguess_score_{}_{}", std::process::id(), name));
        std::fs::create_dir_all(&dir).unwrap();
        dir.join("highscore.json")
    }

    fn cleanup(path: &Path) {
        if let Some(dir) = path.parent() {
            std::fs::remove_dir_all(dir).ok();
        }
    }

    #[test]
    fn test_load_missing_is_unset() {
        let path = temp_path("missing");
        let store = ScoreStore::load(&path);
        assert_eq!(store.best_time(), None);
        assert!(store.is_best(1000.0));
        cleanup(&path);
    }

    #[test]
    fn test_record_and_reload() {
        let path = temp_path("reload");
        let mut store = ScoreStore::load(&path);

        assert!(store.record_if_best(12.5).unwrap());
        assert_eq!(store.best_time(), Some(12.5));

        let reloaded = ScoreStore::load(&path);
        assert_eq!(reloaded.best_time(), Some(12.5));

        let raw = std::fs::read_to_string(&path).unwrap();
        assert_eq!(raw, r#"{"high_score":12.5}"#);
        cleanup(&path);
    }

    #[test]
    fn test_non_improving_is_noop() {
        let path = temp_path("noop");
        let mut store = ScoreStore::load(&path);
        store.record_if_best(10.0).unwrap();

        assert!(!store.record_if_best(10.0).unwrap());
        assert!(!store.record_if_best(11.0).unwrap());
        assert_eq!(store.best_time(), Some(10.0));

        assert!(store.record_if_best(9.99).unwrap());
        assert_eq!(ScoreStore::load(&path).best_time(), Some(9.99));
        cleanup(&path);
    }

    #[test]
    fn test_corrupt_record_is_unset() {
        let path = temp_path("corrupt");
        std::fs::write(&path, "{not json").unwrap();
        assert_eq!(ScoreStore::load(&path).best_time(), None);

        std::fs::write(&path, r#"{"high_score": Infinity}"#).unwrap();
        assert_eq!(ScoreStore::load(&path).best_time(), None);

        std::fs::write(&path, r#"{"high_score": -3.0}"#).unwrap();
        assert_eq!(ScoreStore::load(&path).best_time(), None);

        std::fs::write(&path, r#"{"other": 1}"#).unwrap();
        assert_eq!(ScoreStore::load(&path).best_time(), None);
        cleanup(&path);
    }

    #[test]
    fn test_corrupt_record_is_replaced() {
        let path = temp_path("replace");
        std::fs::write(&path, "garbage").unwrap();
        let mut store = ScoreStore::load(&path);
        assert!(store.record_if_best(30.0).unwrap());
        assert_eq!(ScoreStore::load(&path).best_time(), Some(30.0));
        cleanup(&path);
    }

    #[test]
    fn test_write_failure_is_reported() {
        let path = temp_path("blocked");
        let blocker = path.parent().unwrap().join("blocker");
        std::fs::write(&blocker, "a file, not a directory").unwrap();

        let mut store = ScoreStore::load(blocker.join("highscore.json"));
        assert!(store.record_if_best(5.0).is_err());
        assert_eq!(store.best_time(), Some(5.0));
        cleanup(&path);
    }

    #[test]
    fn test_invalid_time_rejected() {
        let path = temp_path("invalid");
        let mut store = ScoreStore::load(&path);
        assert!(matches!(
            store.record_if_best(f64::NAN),
            Err(ScoreError::InvalidTime(_))
        ));
        assert!(store.record_if_best(-1.0).is_err());
        assert_eq!(store.best_time(), None);
        assert!(!path.exists());
        cleanup(&path);
    }

    #[test]
    fn test_clear() {
        let path = temp_path("clear");
        let mut store = ScoreStore::load(&path);
        store.record_if_best(3.0).unwrap();
        store.clear().unwrap();
        assert_eq!(store.best_time(), None);
        assert!(!path.exists());
        // Clearing twice is fine
        store.clear().unwrap();
        cleanup(&path);
    }

    #[test]
    fn test_default_path() {
        let path = default_score_path();
        assert!(path.ends_with("numguess/highscore.json"));
    }
}
