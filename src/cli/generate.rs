//! `tokendash generate` subcommand for writing static artifacts

use chrono::Utc;
use clap::Args;
use std::fs;
use std::path::PathBuf;

use crate::cli::InputArgs;
use crate::parsers::ClaudeSessionParser;
use crate::render::json::prompts_to_json_pretty;
use crate::render::{render_report, UsageExport};
use crate::types::DerivedMetrics;

/// Write static report artifacts
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Output directory for the artifacts
    #[arg(long, short, default_value = "dist", value_name = "DIR")]
    pub output: PathBuf,
}

impl GenerateArgs {
    pub fn run(&self, inputs: &InputArgs, metrics: &DerivedMetrics) -> anyhow::Result<()> {
        fs::create_dir_all(&self.output)?;

        let export = UsageExport::new(metrics, Utc::now());
        let data_path = self.output.join("data.json");
        fs::write(&data_path, export.to_json_pretty()?)?;
        println!("Wrote {}", data_path.display());

        let parser = match inputs.projects_dir.clone() {
            Some(dir) => ClaudeSessionParser::with_projects_dir(dir),
            None => ClaudeSessionParser::new(),
        };
        let prompts = parser.parse_all()?;
        let prompts_path = self.output.join("prompts.json");
        fs::write(&prompts_path, prompts_to_json_pretty(&prompts)?)?;
        println!("Wrote {} ({} prompts)", prompts_path.display(), prompts.len());

        let report_path = self.output.join("report.txt");
        fs::write(&report_path, render_report(metrics))?;
        println!("Wrote {}", report_path.display());

        Ok(())
    }
}
