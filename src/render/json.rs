//! Machine-readable export of derived metrics
//!
//! The top-level key set and the shortened per-model field names
//! (`cacheRead`, not `cacheReadInputTokens`) are a stable contract that
//! downstream tooling depends on. Change them and you break consumers.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::types::{DayRecord, DerivedMetrics, ModelAggregate, PromptRecord};

/// One ranked model in the export, with shortened field names.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelExport {
    pub id: String,
    pub total: u64,
    pub input: u64,
    pub output: u64,
    pub cache_read: u64,
    pub cache_create: u64,
}

impl From<&ModelAggregate> for ModelExport {
    fn from(model: &ModelAggregate) -> Self {
        Self {
            id: model.id.clone(),
            total: model.total,
            input: model.input_tokens,
            output: model.output_tokens,
            cache_read: model.cache_read_input_tokens,
            cache_create: model.cache_creation_input_tokens,
        }
    }
}

/// The full export document.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageExport {
    /// ISO-8601 generation timestamp
    pub generated: String,
    pub total_tokens: u64,
    pub total_input: u64,
    pub total_output: u64,
    pub total_cache_read: u64,
    pub total_cache_create: u64,
    pub cost_estimate: f64,
    pub total_messages: u64,
    pub total_sessions: u64,
    pub total_tool_calls: u64,
    pub day_count: u64,
    pub avg_messages_per_day: f64,
    pub models: Vec<ModelExport>,
    pub daily: Vec<DayRecord>,
    /// All 24 hours, keys "0".."23"
    pub hour_counts: BTreeMap<u8, u64>,
    pub peak_day: DayRecord,
    pub top_days: Vec<DayRecord>,
}

impl UsageExport {
    pub fn new(metrics: &DerivedMetrics, generated: DateTime<Utc>) -> Self {
        let hour_counts: BTreeMap<u8, u64> = metrics
            .hour_counts
            .iter()
            .enumerate()
            .map(|(hour, &count)| (hour as u8, count))
            .collect();

        Self {
            generated: generated.to_rfc3339(),
            total_tokens: metrics.total_tokens,
            total_input: metrics.totals.input_tokens,
            total_output: metrics.totals.output_tokens,
            total_cache_read: metrics.totals.cache_read_input_tokens,
            total_cache_create: metrics.totals.cache_creation_input_tokens,
            cost_estimate: metrics.cost_estimate,
            total_messages: metrics.total_messages,
            total_sessions: metrics.total_sessions,
            total_tool_calls: metrics.total_tool_calls,
            day_count: metrics.day_count,
            avg_messages_per_day: metrics.avg_messages_per_day,
            models: metrics.models.iter().map(ModelExport::from).collect(),
            daily: metrics.daily_activity.clone(),
            hour_counts,
            peak_day: metrics.peak_day.clone(),
            top_days: metrics.top_days.clone(),
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Serialize the parallel prompt list artifact.
pub fn prompts_to_json_pretty(prompts: &[PromptRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(prompts)
}
