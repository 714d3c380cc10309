//! Report rendering for the `check` and `fix` commands.

pub mod json;
pub mod terminal;

pub use json::format_check_json;
pub use terminal::{format_check_report, format_fix_report};

use crate::batch::BatchResult;
use crate::pipeline::{FileReport, RewrittenFile};

/// Counts shown at the end of every report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Summary {
    pub files: usize,
    pub needs_reordering: usize,
    pub failed: usize,
}

impl Summary {
    pub fn for_check(batch: &BatchResult<FileReport>) -> Self {
        Self {
            files: batch.file_count() - batch.failure_count(),
            needs_reordering: batch.successes().filter(|r| r.needs_reordering()).count(),
            failed: batch.failure_count(),
        }
    }

    pub fn for_fix(batch: &BatchResult<RewrittenFile>) -> Self {
        Self {
            files: batch.file_count() - batch.failure_count(),
            needs_reordering: batch.successes().filter(|r| r.changed()).count(),
            failed: batch.failure_count(),
        }
    }
}
