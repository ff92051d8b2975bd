//! Claude Code session JSONL prompt extractor

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::types::{PromptRecord, Result};

/// Session JSONL line structure (user messages only carry prompts)
#[derive(Deserialize)]
struct SessionLine {
    #[serde(rename = "type")]
    line_type: Option<String>,
    #[serde(rename = "sessionId", default)]
    session_id: Option<String>,
    timestamp: Option<String>,
    message: Option<SessionMessage>,
}

#[derive(Deserialize)]
struct SessionMessage {
    role: Option<String>,
    /// Either a plain string or an array of content blocks
    content: Option<serde_json::Value>,
}

/// Extractor for user prompts in Claude Code project logs
pub struct ClaudeSessionParser {
    projects_dir: PathBuf,
}

impl ClaudeSessionParser {
    /// Create a parser with the default projects directory
    /// (~/.claude/projects/)
    pub fn new() -> Self {
        let home = directories::BaseDirs::new()
            .map(|d| d.home_dir().to_path_buf())
            .unwrap_or_else(|| {
                eprintln!("[tokendash] Warning: Could not determine home directory");
                PathBuf::from(".")
            });
        Self {
            projects_dir: home.join(".claude").join("projects"),
        }
    }

    /// Create a parser with a custom projects directory (for testing)
    pub fn with_projects_dir(projects_dir: PathBuf) -> Self {
        Self { projects_dir }
    }

    /// Collect all session log files under the projects directory
    pub fn collect_files(&self) -> Vec<PathBuf> {
        let pattern = self.projects_dir.join("**/*.jsonl");
        glob::glob(&pattern.to_string_lossy())
            .map(|paths| paths.filter_map(|e| e.ok()).collect())
            .unwrap_or_default()
    }

    /// Parse every session log in parallel and merge prompts across
    /// projects, newest first (records without a timestamp sort last).
    pub fn parse_all(&self) -> Result<Vec<PromptRecord>> {
        let files = self.collect_files();

        let mut prompts: Vec<PromptRecord> = files
            .par_iter()
            .flat_map(|f| match self.parse_file(f) {
                Ok(records) => records,
                Err(e) => {
                    eprintln!("[tokendash] Warning: Failed to parse {:?}: {}", f, e);
                    Vec::new()
                }
            })
            .collect();

        prompts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(prompts)
    }

    /// Parse a single session log file
    pub fn parse_file(&self, path: &Path) -> Result<Vec<PromptRecord>> {
        let project = project_name(path);
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let mut records = Vec::new();
        for line in reader.lines() {
            let mut bytes = line?.into_bytes();
            if let Some(record) = parse_line(&mut bytes, &project) {
                records.push(record);
            }
        }
        Ok(records)
    }
}

impl Default for ClaudeSessionParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Project name = the log's parent directory name
fn project_name(path: &Path) -> String {
    path.parent()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Parse one JSONL line into a prompt record, or None if the line is not
/// a user prompt (assistant turns, tool results, harness-generated
/// messages, blank text).
fn parse_line(line: &mut [u8], project: &str) -> Option<PromptRecord> {
    if line.is_empty() {
        return None;
    }

    let data: SessionLine = simd_json::from_slice(line).ok()?;

    if data.line_type.as_deref() != Some("user") {
        return None;
    }
    let message = data.message.as_ref()?;
    if message.role.as_deref() != Some("user") {
        return None;
    }

    let text = extract_text(message.content.as_ref()?)?;
    // Harness-generated messages wrap their payload in tags
    if text.is_empty() || text.starts_with('<') {
        return None;
    }

    let timestamp = data
        .timestamp
        .as_deref()
        .and_then(|ts| DateTime::parse_from_rfc3339(ts).ok())
        .map(|dt| dt.with_timezone(&Utc));

    Some(PromptRecord {
        project: project.to_string(),
        session_id: data.session_id,
        timestamp,
        text,
    })
}

/// Pull the textual content out of a message body: either a plain string
/// or the `text` blocks of a content array (tool results are skipped).
fn extract_text(content: &serde_json::Value) -> Option<String> {
    match content {
        serde_json::Value::String(s) => Some(s.trim().to_string()),
        serde_json::Value::Array(blocks) => {
            let parts: Vec<&str> = blocks
                .iter()
                .filter(|b| b.get("type").and_then(|t| t.as_str()) == Some("text"))
                .filter_map(|b| b.get("text").and_then(|t| t.as_str()))
                .collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join("\n").trim().to_string())
            }
        }
        _ => None,
    }
}
