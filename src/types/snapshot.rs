//! Wire-format types for the usage snapshot
//!
//! The snapshot is a single camelCase JSON document written by the usage
//! collector. Every counter is optional on the wire; serde defaults map
//! absence to zero so the aggregation code only ever sees fully-populated
//! records.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A point-in-time capture of usage statistics, the engine's sole input.
///
/// `model_usage` keeps wire-format insertion order (IndexMap) because
/// ranking ties are broken by the order models appear in the document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageSnapshot {
    #[serde(default)]
    pub model_usage: IndexMap<String, TokenCounts>,
    #[serde(default)]
    pub daily_activity: Vec<DayRecord>,
    /// Hour-of-day ("0".."23") to message count, sparse
    #[serde(default)]
    pub hour_counts: HashMap<String, u64>,
    /// Lifetime counters; derived from `daily_activity` when absent
    #[serde(default)]
    pub total_sessions: Option<u64>,
    #[serde(default)]
    pub total_messages: Option<u64>,
    /// Presentation-only date labels
    #[serde(default)]
    pub first_session_date: Option<String>,
    #[serde(default)]
    pub last_computed_date: Option<String>,
}

/// The four counted token categories. Absent fields are zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenCounts {
    #[serde(default)]
    pub input_tokens: u64,
    #[serde(default)]
    pub output_tokens: u64,
    #[serde(default)]
    pub cache_read_input_tokens: u64,
    #[serde(default)]
    pub cache_creation_input_tokens: u64,
}

impl TokenCounts {
    /// Sum of all four categories
    pub fn total(&self) -> u64 {
        self.input_tokens
            .saturating_add(self.output_tokens)
            .saturating_add(self.cache_read_input_tokens)
            .saturating_add(self.cache_creation_input_tokens)
    }
}

/// One calendar day of activity. Dates are `YYYY-MM-DD` and unique
/// within the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRecord {
    pub date: String,
    #[serde(default)]
    pub message_count: u64,
    #[serde(default)]
    pub session_count: u64,
    #[serde(default)]
    pub tool_call_count: u64,
}

impl DayRecord {
    /// Zero-valued stand-in for an empty daily series
    pub fn sentinel() -> Self {
        Self {
            date: "N/A".to_string(),
            message_count: 0,
            session_count: 0,
            tool_call_count: 0,
        }
    }
}
