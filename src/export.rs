//! Clipboard export of a comparison result

use crate::compare::ComparisonResult;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// One `{marker}{text}` line per inline line
    InlineText,
    /// The whole result, pretty-printed
    Json,
}

pub fn export(result: &ComparisonResult, format: ExportFormat) -> Result<String, ExportError> {
    match format {
        ExportFormat::InlineText => Ok(inline_text(result)),
        ExportFormat::Json => Ok(serde_json::to_string_pretty(result)?),
    }
}

pub fn inline_text(result: &ComparisonResult) -> String {
    result
        .inline
        .iter()
        .map(|line| format!("{}{}", line.marker, line.text))
        .collect::<Vec<_>>()
        .join("\n")
}
