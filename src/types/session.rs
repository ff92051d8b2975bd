//! Session log types

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A user-authored prompt extracted from a project session log.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptRecord {
    /// Last segment of the project log directory
    pub project: String,
    pub session_id: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
    pub text: String,
}
