//! Snapshot loading service
//!
//! Reads the usage snapshot JSON from disk and validates its shape before
//! the aggregator ever runs. Serde typing rejects negative or non-numeric
//! counters here, so the aggregation code downstream never sees them.

use std::fs;
use std::path::PathBuf;

use crate::types::{Result, TokendashError, UsageSnapshot};

/// Loads the usage snapshot from disk
pub struct SnapshotLoader {
    stats_path: PathBuf,
}

impl SnapshotLoader {
    /// Create a loader for the default snapshot location
    /// (~/.claude/usage-data.json)
    pub fn new() -> Self {
        let home = directories::BaseDirs::new()
            .map(|d| d.home_dir().to_path_buf())
            .unwrap_or_else(|| {
                eprintln!("[tokendash] Warning: Could not determine home directory");
                PathBuf::from(".")
            });
        Self {
            stats_path: home.join(".claude").join("usage-data.json"),
        }
    }

    /// Create a loader for a custom snapshot path
    pub fn with_path(stats_path: PathBuf) -> Self {
        Self { stats_path }
    }

    /// Read and validate the snapshot. Fails fast with a descriptive
    /// error on a missing file or malformed document.
    pub fn load(&self) -> Result<UsageSnapshot> {
        if !self.stats_path.exists() {
            return Err(TokendashError::Snapshot(format!(
                "usage snapshot not found at {} (pass --stats-file to point elsewhere)",
                self.stats_path.display()
            )));
        }

        let content = fs::read_to_string(&self.stats_path)?;
        serde_json::from_str(&content).map_err(|e| {
            TokendashError::Snapshot(format!(
                "invalid usage snapshot {}: {}",
                self.stats_path.display(),
                e
            ))
        })
    }
}

impl Default for SnapshotLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_snapshot(content: &str) -> (SnapshotLoader, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("usage-data.json");
        fs::write(&path, content).unwrap();
        (SnapshotLoader::with_path(path), temp_dir)
    }

    #[test]
    fn test_load_valid_snapshot() {
        let (loader, _temp) = write_snapshot(
            r#"{
                "modelUsage": {"claude-sonnet-4-5": {"inputTokens": 100, "outputTokens": 50}},
                "dailyActivity": [{"date": "2026-01-15", "messageCount": 3}],
                "hourCounts": {"10": 3}
            }"#,
        );

        let snapshot = loader.load().unwrap();
        assert_eq!(snapshot.model_usage.len(), 1);
        assert_eq!(snapshot.daily_activity.len(), 1);
    }

    #[test]
    fn test_load_missing_file_is_descriptive() {
        let loader = SnapshotLoader::with_path(PathBuf::from("/nonexistent/usage-data.json"));
        let err = loader.load().unwrap_err();
        assert!(matches!(err, TokendashError::Snapshot(_)));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_load_malformed_json_fails_fast() {
        let (loader, _temp) = write_snapshot("{not valid json");
        let err = loader.load().unwrap_err();
        assert!(matches!(err, TokendashError::Snapshot(_)));
    }

    #[test]
    fn test_load_wrong_shape_fails_fast() {
        // modelUsage must be a mapping, not a sequence
        let (loader, _temp) = write_snapshot(r#"{"modelUsage": [1, 2, 3]}"#);
        assert!(loader.load().is_err());
    }

    #[test]
    fn test_load_negative_counter_rejected() {
        let (loader, _temp) =
            write_snapshot(r#"{"modelUsage": {"m": {"inputTokens": -100}}}"#);
        assert!(loader.load().is_err());
    }
}
