//! Cost estimation from aggregate token totals
//!
//! Applies one flat per-million-token rate table to the combined totals
//! regardless of which model produced the tokens. That is deliberate: the
//! estimate is a single consistent benchmark figure, not a per-model bill.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::types::{Result, TokenCounts, TokendashError};

/// Currency-per-million-token multipliers for the four token categories.
///
/// Injected into the estimator rather than read from a hidden constant so
/// callers can swap the table (e.g. via `--rates`) without touching the
/// aggregation code.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateTable {
    pub input_per_million: f64,
    pub output_per_million: f64,
    pub cache_read_per_million: f64,
    pub cache_creation_per_million: f64,
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            input_per_million: 5.0,
            output_per_million: 25.0,
            cache_read_per_million: 0.5,
            cache_creation_per_million: 6.25,
        }
    }
}

impl RateTable {
    /// Load a replacement rate table from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            TokendashError::Config(format!("invalid rate table {}: {}", path.display(), e))
        })
    }

    /// Estimate the cost of the given grand totals in dollars.
    /// Unrounded; rounding is a presentation concern.
    pub fn estimate(&self, totals: &TokenCounts) -> f64 {
        (totals.input_tokens as f64 * self.input_per_million
            + totals.output_tokens as f64 * self.output_per_million
            + totals.cache_read_input_tokens as f64 * self.cache_read_per_million
            + totals.cache_creation_input_tokens as f64 * self.cache_creation_per_million)
            / 1_000_000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn totals(input: u64, output: u64, cache_read: u64, cache_creation: u64) -> TokenCounts {
        TokenCounts {
            input_tokens: input,
            output_tokens: output,
            cache_read_input_tokens: cache_read,
            cache_creation_input_tokens: cache_creation,
        }
    }

    #[test]
    fn test_estimate_reference_rates() {
        // 1M input * $5 + 2M output * $25 = $55
        let rates = RateTable::default();
        let cost = rates.estimate(&totals(1_000_000, 2_000_000, 0, 0));
        assert!((cost - 55.0).abs() < 1e-9, "Expected 55.0, got {}", cost);
    }

    #[test]
    fn test_estimate_zero_totals_is_zero() {
        let rates = RateTable::default();
        assert_eq!(rates.estimate(&totals(0, 0, 0, 0)), 0.0);
    }

    #[test]
    fn test_estimate_is_linear() {
        let rates = RateTable::default();
        let base = rates.estimate(&totals(1_000, 2_000, 3_000, 4_000));
        let doubled = rates.estimate(&totals(2_000, 4_000, 6_000, 8_000));
        assert!(
            (doubled - base * 2.0).abs() < 1e-9,
            "Expected {}, got {}",
            base * 2.0,
            doubled
        );
    }

    #[test]
    fn test_estimate_all_categories_contribute() {
        let rates = RateTable {
            input_per_million: 1.0,
            output_per_million: 2.0,
            cache_read_per_million: 3.0,
            cache_creation_per_million: 4.0,
        };
        // (1M*1 + 1M*2 + 1M*3 + 1M*4) / 1M-scale = 10
        let cost = rates.estimate(&totals(1_000_000, 1_000_000, 1_000_000, 1_000_000));
        assert!((cost - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_rate_table_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rates.json");
        std::fs::write(
            &path,
            r#"{
                "inputPerMillion": 3.0,
                "outputPerMillion": 15.0,
                "cacheReadPerMillion": 0.3,
                "cacheCreationPerMillion": 3.75
            }"#,
        )
        .unwrap();

        let rates = RateTable::from_file(&path).unwrap();
        assert!((rates.input_per_million - 3.0).abs() < f64::EPSILON);
        assert!((rates.cache_creation_per_million - 3.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rate_table_from_file_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rates.json");
        std::fs::write(&path, "not json{{{").unwrap();

        let result = RateTable::from_file(&path);
        assert!(matches!(result, Err(TokendashError::Config(_))));
    }

    #[test]
    fn test_rate_table_from_file_missing() {
        let result = RateTable::from_file(Path::new("/nonexistent/rates.json"));
        assert!(matches!(result, Err(TokendashError::Io(_))));
    }
}
