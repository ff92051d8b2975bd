//! Render collaborators: stable JSON export and plain-text report

pub mod json;
pub mod text;

pub use json::{ModelExport, UsageExport};
pub use text::render_report;
