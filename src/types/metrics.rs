//! Derived metrics produced by the aggregation engine

use super::{DayRecord, TokenCounts};

/// Per-model token totals, ranked by `total` descending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelAggregate {
    pub id: String,
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub cache_read_input_tokens: u64,
    pub cache_creation_input_tokens: u64,
    /// Sum of the four counters above
    pub total: u64,
}

impl ModelAggregate {
    pub fn from_counts(id: String, counts: &TokenCounts) -> Self {
        Self {
            id,
            input_tokens: counts.input_tokens,
            output_tokens: counts.output_tokens,
            cache_read_input_tokens: counts.cache_read_input_tokens,
            cache_creation_input_tokens: counts.cache_creation_input_tokens,
            total: counts.total(),
        }
    }
}

/// The engine's sole output: every derived quantity downstream
/// presentation consumes. Built once per snapshot, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedMetrics {
    /// Grand totals per token category, summed across all models
    pub totals: TokenCounts,
    /// Sum over all models of their `total`
    pub total_tokens: u64,
    /// Flat-rate cost estimate in USD (unrounded)
    pub cost_estimate: f64,
    pub total_messages: u64,
    pub total_sessions: u64,
    pub total_tool_calls: u64,
    pub day_count: u64,
    pub avg_messages_per_day: f64,
    /// Ranked descending by total, ties in snapshot order
    pub models: Vec<ModelAggregate>,
    /// Day with the greatest message count; sentinel when the series is empty
    pub peak_day: DayRecord,
    /// Up to five busiest days, ranked descending
    pub top_days: Vec<DayRecord>,
    /// Bar normalization denominators, floored at 1 so renderers
    /// never divide by zero
    pub max_daily_messages: u64,
    pub max_hour_count: u64,
    /// Pass-through copies for downstream consumers
    pub daily_activity: Vec<DayRecord>,
    pub hour_counts: [u64; 24],
    pub first_session_date: Option<String>,
    pub last_computed_date: Option<String>,
}
