//! Criterion benchmarks for the aggregation pipeline

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::path::PathBuf;

use indexmap::IndexMap;
use tokendash::parsers::ClaudeSessionParser;
use tokendash::services::{Aggregator, NormalizedSnapshot, RateTable};
use tokendash::types::{DayRecord, TokenCounts};

/// Build a snapshot with `days` day records and `models` model entries
fn synthetic_snapshot(days: usize, models: usize) -> NormalizedSnapshot {
    let mut model_usage = IndexMap::new();
    for i in 0..models {
        model_usage.insert(
            format!("model-{}", i),
            TokenCounts {
                input_tokens: (i as u64 + 1) * 1_000,
                output_tokens: (i as u64 + 1) * 500,
                cache_read_input_tokens: i as u64 * 10_000,
                cache_creation_input_tokens: i as u64 * 2_000,
            },
        );
    }

    let daily_activity = (0..days)
        .map(|i| DayRecord {
            date: format!("20{:02}-{:02}-{:02}", 20 + i / 336, (i / 28) % 12 + 1, i % 28 + 1),
            message_count: (i as u64 * 37) % 211,
            session_count: i as u64 % 7,
            tool_call_count: (i as u64 * 11) % 97,
        })
        .collect();

    let mut hour_counts = [0u64; 24];
    for (hour, slot) in hour_counts.iter_mut().enumerate() {
        *slot = (hour as u64 * 13) % 50;
    }

    NormalizedSnapshot {
        model_usage,
        daily_activity,
        hour_counts,
        total_messages: 12_345,
        total_sessions: 678,
        first_session_date: None,
        last_computed_date: None,
    }
}

fn bench_derive(c: &mut Criterion) {
    let rates = RateTable::default();
    let mut group = c.benchmark_group("aggregator");

    for (days, models) in [(365, 10), (3650, 40)] {
        let snapshot = synthetic_snapshot(days, models);
        group.bench_with_input(
            BenchmarkId::new("derive", format!("{}d-{}m", days, models)),
            &snapshot,
            |b, snapshot| {
                b.iter(|| Aggregator::derive(black_box(snapshot.clone()), black_box(&rates)));
            },
        );
    }

    group.finish();
}

fn bench_rankings(c: &mut Criterion) {
    let snapshot = synthetic_snapshot(3650, 40);
    let mut group = c.benchmark_group("aggregator");

    group.bench_function("rank_models", |b| {
        b.iter(|| Aggregator::rank_models(black_box(&snapshot.model_usage)));
    });
    group.bench_function("top_days", |b| {
        b.iter(|| Aggregator::top_days(black_box(&snapshot.daily_activity)));
    });

    group.finish();
}

fn bench_session_parse(c: &mut Criterion) {
    let fixture = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("claude-sample.jsonl");
    let parser = ClaudeSessionParser::with_projects_dir(fixture.parent().unwrap().to_path_buf());

    let mut group = c.benchmark_group("parser");
    group.bench_function("parse_file", |b| {
        b.iter(|| parser.parse_file(black_box(&fixture)));
    });
    group.finish();
}

criterion_group!(benches, bench_derive, bench_rankings, bench_session_parse);
criterion_main!(benches);
