//! Plain-text report rendering

use std::fmt::Write;

use crate::services::format::{format_compact, format_currency, group_thousands, percentage};
use crate::types::DerivedMetrics;

/// How many trailing days the activity section shows
const DAILY_ROWS: usize = 14;
const BAR_WIDTH: usize = 24;

/// Render a bar scaled against `max` (already floored at 1 upstream).
/// Non-zero values always get at least one filled cell so small bars
/// stay visible next to large ones.
fn bar(value: u64, max: u64, width: usize) -> String {
    let ratio = value as f64 / max as f64;
    let mut filled = (ratio * width as f64).round() as usize;
    if value > 0 {
        filled = filled.max(1);
    }
    let filled = filled.min(width);
    format!("{}{}", "▓".repeat(filled), "░".repeat(width - filled))
}

/// Render the full text report for a derived metrics structure.
pub fn render_report(metrics: &DerivedMetrics) -> String {
    let mut out = String::new();

    writeln!(out, "Usage Report").unwrap();
    writeln!(out, "============").unwrap();
    if let (Some(first), Some(last)) = (
        metrics.first_session_date.as_deref(),
        metrics.last_computed_date.as_deref(),
    ) {
        writeln!(out, "{} → {}", first, last).unwrap();
    }
    writeln!(out).unwrap();

    writeln!(out, "Total tokens     {}", format_compact(metrics.total_tokens)).unwrap();
    writeln!(out, "  input          {}", format_compact(metrics.totals.input_tokens)).unwrap();
    writeln!(out, "  output         {}", format_compact(metrics.totals.output_tokens)).unwrap();
    writeln!(
        out,
        "  cache read     {}",
        format_compact(metrics.totals.cache_read_input_tokens)
    )
    .unwrap();
    writeln!(
        out,
        "  cache create   {}",
        format_compact(metrics.totals.cache_creation_input_tokens)
    )
    .unwrap();
    writeln!(out, "Est. cost        {}", format_currency(metrics.cost_estimate)).unwrap();
    writeln!(out, "Messages         {}", group_thousands(metrics.total_messages)).unwrap();
    writeln!(out, "Sessions         {}", group_thousands(metrics.total_sessions)).unwrap();
    writeln!(out, "Tool calls       {}", group_thousands(metrics.total_tool_calls)).unwrap();
    writeln!(
        out,
        "Active days      {} (avg {:.1} msgs/day)",
        metrics.day_count, metrics.avg_messages_per_day
    )
    .unwrap();

    if !metrics.models.is_empty() {
        writeln!(out).unwrap();
        writeln!(out, "Models").unwrap();
        writeln!(out, "------").unwrap();
        for model in &metrics.models {
            writeln!(
                out,
                "{:<32} {:>8}  {:>5}%  {}",
                model.id,
                format_compact(model.total),
                percentage(model.total, metrics.total_tokens),
                bar(model.total, metrics.total_tokens.max(1), BAR_WIDTH),
            )
            .unwrap();
        }
    }

    if !metrics.daily_activity.is_empty() {
        writeln!(out).unwrap();
        writeln!(out, "Daily activity (last {} days)", DAILY_ROWS.min(metrics.daily_activity.len()))
            .unwrap();
        writeln!(out, "------------------------------").unwrap();
        let start = metrics.daily_activity.len().saturating_sub(DAILY_ROWS);
        for day in &metrics.daily_activity[start..] {
            writeln!(
                out,
                "{:<12} {:>6}  {}",
                day.date,
                day.message_count,
                bar(day.message_count, metrics.max_daily_messages, BAR_WIDTH),
            )
            .unwrap();
        }

        writeln!(out).unwrap();
        writeln!(out, "Peak day: {} ({} messages)", metrics.peak_day.date, metrics.peak_day.message_count)
            .unwrap();
        if !metrics.top_days.is_empty() {
            writeln!(out, "Busiest days:").unwrap();
            for day in &metrics.top_days {
                writeln!(out, "  {} ({} messages)", day.date, day.message_count).unwrap();
            }
        }
    }

    writeln!(out).unwrap();
    writeln!(out, "Hourly distribution").unwrap();
    writeln!(out, "-------------------").unwrap();
    for (hour, &count) in metrics.hour_counts.iter().enumerate() {
        writeln!(
            out,
            "{:02}:00 {:>6}  {}",
            hour,
            count,
            bar(count, metrics.max_hour_count, BAR_WIDTH),
        )
        .unwrap();
    }

    out
}
