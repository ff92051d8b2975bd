//! Aggregation engine: model ranking, daily/hourly statistics, and
//! assembly of the derived metrics structure
//!
//! Everything here is pure. Shape validation happens in the loader, so
//! these functions are total over `NormalizedSnapshot` and never fail.

use indexmap::IndexMap;

use crate::services::normalizer::NormalizedSnapshot;
use crate::services::pricing::RateTable;
use crate::types::{DayRecord, DerivedMetrics, ModelAggregate, TokenCounts};

/// How many of the busiest days the ranking keeps.
const TOP_DAYS: usize = 5;

/// Aggregator for computing derived usage metrics
pub struct Aggregator;

impl Aggregator {
    /// Rank models by total tokens descending and sum grand totals.
    ///
    /// Every input key produces exactly one entry, zero-total models
    /// included. The sort is stable, so equal totals keep the order the
    /// models appeared in the snapshot.
    pub fn rank_models(
        model_usage: &IndexMap<String, TokenCounts>,
    ) -> (Vec<ModelAggregate>, TokenCounts) {
        let mut totals = TokenCounts::default();
        let mut models: Vec<ModelAggregate> = model_usage
            .iter()
            .map(|(id, counts)| {
                totals.input_tokens = totals.input_tokens.saturating_add(counts.input_tokens);
                totals.output_tokens = totals.output_tokens.saturating_add(counts.output_tokens);
                totals.cache_read_input_tokens = totals
                    .cache_read_input_tokens
                    .saturating_add(counts.cache_read_input_tokens);
                totals.cache_creation_input_tokens = totals
                    .cache_creation_input_tokens
                    .saturating_add(counts.cache_creation_input_tokens);
                ModelAggregate::from_counts(id.clone(), counts)
            })
            .collect();

        models.sort_by(|a, b| b.total.cmp(&a.total));
        (models, totals)
    }

    /// Day with the strictly greatest message count; the first such day
    /// wins ties. Empty input yields the zero-valued sentinel.
    pub fn peak_day(days: &[DayRecord]) -> DayRecord {
        let mut peak: Option<&DayRecord> = None;
        for day in days {
            match peak {
                Some(current) if day.message_count <= current.message_count => {}
                _ => peak = Some(day),
            }
        }
        peak.cloned().unwrap_or_else(DayRecord::sentinel)
    }

    /// The busiest days ranked descending by message count, at most five.
    /// Equal counts keep chronological order (stable sort).
    pub fn top_days(days: &[DayRecord]) -> Vec<DayRecord> {
        let mut ranked = days.to_vec();
        ranked.sort_by(|a, b| b.message_count.cmp(&a.message_count));
        ranked.truncate(TOP_DAYS);
        ranked
    }

    /// Greatest daily message count, floored at 1 so renderers can divide.
    pub fn max_daily_messages(days: &[DayRecord]) -> u64 {
        days.iter()
            .map(|d| d.message_count)
            .max()
            .unwrap_or(0)
            .max(1)
    }

    /// Greatest hourly message count, floored at 1 so renderers can divide.
    pub fn max_hour_count(hours: &[u64; 24]) -> u64 {
        hours.iter().copied().max().unwrap_or(0).max(1)
    }

    /// Run the full pipeline over a normalized snapshot.
    pub fn derive(snapshot: NormalizedSnapshot, rates: &RateTable) -> DerivedMetrics {
        let (models, totals) = Self::rank_models(&snapshot.model_usage);
        let total_tokens = models.iter().fold(0u64, |acc, m| acc.saturating_add(m.total));
        let cost_estimate = rates.estimate(&totals);

        let total_tool_calls = snapshot
            .daily_activity
            .iter()
            .fold(0u64, |acc, d| acc.saturating_add(d.tool_call_count));

        let day_count = snapshot.daily_activity.len() as u64;
        let avg_messages_per_day = if day_count == 0 {
            0.0
        } else {
            snapshot.total_messages as f64 / day_count as f64
        };

        DerivedMetrics {
            totals,
            total_tokens,
            cost_estimate,
            total_messages: snapshot.total_messages,
            total_sessions: snapshot.total_sessions,
            total_tool_calls,
            day_count,
            avg_messages_per_day,
            peak_day: Self::peak_day(&snapshot.daily_activity),
            top_days: Self::top_days(&snapshot.daily_activity),
            max_daily_messages: Self::max_daily_messages(&snapshot.daily_activity),
            max_hour_count: Self::max_hour_count(&snapshot.hour_counts),
            models,
            daily_activity: snapshot.daily_activity,
            hour_counts: snapshot.hour_counts,
            first_session_date: snapshot.first_session_date,
            last_computed_date: snapshot.last_computed_date,
        }
    }
}
