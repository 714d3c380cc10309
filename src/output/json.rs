use serde::Serialize;
use std::path::Path;

use super::Summary;
use crate::batch::BatchResult;
use crate::errors::{ReorderError, Result};
use crate::pipeline::FileReport;

#[derive(Serialize)]
struct ErrorEntry<'a> {
    path: &'a Path,
    category: &'static str,
    message: String,
}

#[derive(Serialize)]
struct CheckOutput<'a> {
    files: Vec<&'a FileReport>,
    errors: Vec<ErrorEntry<'a>>,
    summary: Summary,
}

/// Render a check batch as pretty-printed JSON.
pub fn format_check_json(batch: &BatchResult<FileReport>) -> Result<String> {
    let output = CheckOutput {
        files: batch.successes().collect(),
        errors: batch
            .failures()
            .map(|(path, e)| ErrorEntry {
                path,
                category: e.category(),
                message: e.to_string(),
            })
            .collect(),
        summary: Summary::for_check(batch),
    };
    serde_json::to_string_pretty(&output)
        .map_err(|e| ReorderError::other(format!("JSON serialization failed: {}", e)))
}
