//! Stages of the per-file pipelines.
//!
//! Reading and parsing are shared; `fix` and `check` diverge after that.

pub mod check;
pub mod fix;

use crate::errors::ReorderError;
use crate::io;
use crate::pipeline::data::{FileTask, ParsedFile, SourceFile};
use crate::pipeline::stage::{FnStage, Stage};
use crate::syntax::parse_source;

pub use check::{ClassifyStage, ReportStage};
pub use fix::{write_stage, PlanStage, RewriteStage};

/// Read the file from disk.
pub fn read_stage() -> impl Stage<Input = FileTask, Output = SourceFile, Error = ReorderError>
       + Send
       + Sync
       + 'static {
    FnStage::new("Read", |task: FileTask| -> Result<SourceFile, ReorderError> {
        let source = io::read_file(&task.path)?;
        Ok(SourceFile {
            path: task.path,
            source,
            config: task.config,
        })
    })
}

/// Parse Swift source into a concrete tree.
pub struct ParseStage;

impl Stage for ParseStage {
    type Input = SourceFile;
    type Output = ParsedFile;
    type Error = ReorderError;

    fn execute(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        let ast = parse_source(&input.source, &input.path)?;
        Ok(ParsedFile {
            ast,
            config: input.config,
        })
    }

    fn name(&self) -> &str {
        "Parse"
    }
}
