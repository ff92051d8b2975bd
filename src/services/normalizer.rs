//! Snapshot normalization service
//!
//! Maps the loosely-structured wire snapshot to a fully-populated form:
//! sparse string-keyed hour counts become a dense 24-slot table, and the
//! lifetime counters fall back to sums over the daily series when the
//! collector omitted them. Downstream aggregation is total over this type.

use indexmap::IndexMap;

use crate::types::{DayRecord, TokenCounts, UsageSnapshot};

/// A snapshot with every optional field resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedSnapshot {
    pub model_usage: IndexMap<String, TokenCounts>,
    pub daily_activity: Vec<DayRecord>,
    /// Dense message counts indexed by hour of day
    pub hour_counts: [u64; 24],
    pub total_messages: u64,
    pub total_sessions: u64,
    pub first_session_date: Option<String>,
    pub last_computed_date: Option<String>,
}

/// Resolve all optional snapshot fields.
///
/// Hour keys outside "0".."23" (or unparseable) are dropped.
pub fn normalize(raw: UsageSnapshot) -> NormalizedSnapshot {
    let mut hour_counts = [0u64; 24];
    for (key, count) in &raw.hour_counts {
        if let Ok(hour) = key.parse::<usize>() {
            if hour < 24 {
                hour_counts[hour] = *count;
            }
        }
    }

    let total_messages = raw.total_messages.unwrap_or_else(|| {
        raw.daily_activity
            .iter()
            .fold(0u64, |acc, d| acc.saturating_add(d.message_count))
    });
    let total_sessions = raw.total_sessions.unwrap_or_else(|| {
        raw.daily_activity
            .iter()
            .fold(0u64, |acc, d| acc.saturating_add(d.session_count))
    });

    NormalizedSnapshot {
        model_usage: raw.model_usage,
        daily_activity: raw.daily_activity,
        hour_counts,
        total_messages,
        total_sessions,
        first_session_date: raw.first_session_date,
        last_computed_date: raw.last_computed_date,
    }
}
