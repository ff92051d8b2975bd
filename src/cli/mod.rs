use std::path::PathBuf;

use chrono::Utc;
use clap::{Args, Parser, Subcommand};

mod generate;

pub use generate::GenerateArgs;

use crate::render::{render_report, UsageExport};
use crate::services::{normalize, Aggregator, RateTable, SnapshotLoader};
use crate::types::DerivedMetrics;

/// Static usage & cost report generator for Claude Code telemetry
#[derive(Parser)]
#[command(name = "tokendash")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    inputs: InputArgs,
}

/// Input locations shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Usage snapshot file (default: ~/.claude/usage-data.json)
    #[arg(long, global = true, value_name = "FILE")]
    stats_file: Option<PathBuf>,

    /// Project session log directory (default: ~/.claude/projects)
    #[arg(long, global = true, value_name = "DIR")]
    projects_dir: Option<PathBuf>,

    /// JSON file overriding the per-million-token rate table
    #[arg(long, global = true, value_name = "FILE")]
    rates: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the usage report (default)
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show per-day activity
    Daily {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write data.json, prompts.json, and report.txt artifacts
    Generate(GenerateArgs),
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        let rates = match &self.inputs.rates {
            Some(path) => RateTable::from_file(path)?,
            None => RateTable::default(),
        };
        let loader = match self.inputs.stats_file.clone() {
            Some(path) => SnapshotLoader::with_path(path),
            None => SnapshotLoader::new(),
        };
        let metrics = Aggregator::derive(normalize(loader.load()?), &rates);

        match self.command.unwrap_or(Commands::Stats { json: false }) {
            Commands::Stats { json: false } => {
                print!("{}", render_report(&metrics));
                Ok(())
            }
            Commands::Stats { json: true } => {
                let export = UsageExport::new(&metrics, Utc::now());
                println!("{}", export.to_json_pretty()?);
                Ok(())
            }
            Commands::Daily { json } => {
                print_daily(&metrics, json);
                Ok(())
            }
            Commands::Generate(args) => args.run(&self.inputs, &metrics),
        }
    }
}

fn print_daily(metrics: &DerivedMetrics, json: bool) {
    if json {
        match serde_json::to_string_pretty(&metrics.daily_activity) {
            Ok(out) => println!("{}", out),
            Err(e) => eprintln!("[tokendash] Warning: daily serialization failed: {}", e),
        }
        return;
    }

    println!("{:<12} {:>9} {:>9} {:>11}", "Date", "Messages", "Sessions", "Tool calls");
    for day in &metrics.daily_activity {
        println!(
            "{:<12} {:>9} {:>9} {:>11}",
            day.date, day.message_count, day.session_count, day.tool_call_count
        );
    }
}
