use std::fmt;

use clap::ValueEnum;
use thiserror::Error;

use crate::aggregate::AuditReport;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Plain-text summary.
    #[default]
    Text,
    /// Pretty-printed JSON with the same fields.
    Json,
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to encode report as json: {0}")]
    Json(#[from] serde_json::Error),
}

impl fmt::Display for AuditReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total words found: {}", self.total)?;
        if self.duplicates.is_empty() {
            writeln!(f, "No duplicates found.")?;
        } else {
            writeln!(f, "Duplicates found:")?;
            for dup in &self.duplicates {
                writeln!(f, "- {dup}")?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Topic counts:")?;
        for count in self.topic_counts.iter() {
            writeln!(f, "- {count}")?;
        }
        Ok(())
    }
}

/// Render the report; text output ends with a newline after the last line.
pub fn render(report: &AuditReport, format: OutputFormat) -> Result<String, ReportError> {
    match format {
        OutputFormat::Text => Ok(report.to_string()),
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(report)?;
            out.push('\n');
            Ok(out)
        }
    }
}
