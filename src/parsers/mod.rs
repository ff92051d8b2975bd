//! Session log discovery and prompt extraction
//!
//! Collaborator-facing: walks the per-project session logs, pulls out
//! user-authored prompts, and merges them across projects. Unreadable
//! files and unparseable lines are skipped with a warning, never fatal.

mod claude;

pub use claude::ClaudeSessionParser;
