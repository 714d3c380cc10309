//! Stages of the fix pipeline: plan, rewrite, and optionally write back.

use crate::errors::ReorderError;
use crate::io;
use crate::pipeline::data::{ParsedFile, PlannedFile, RewrittenFile};
use crate::pipeline::stage::{FnStage, Stage};
use crate::rewrite::{plan_file, StructuralRewriter};

/// Plan every type in the file against its configuration.
pub struct PlanStage;

impl Stage for PlanStage {
    type Input = ParsedFile;
    type Output = PlannedFile;
    type Error = std::convert::Infallible;

    fn execute(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        let plans = plan_file(&input.ast, input.config.rules());
        Ok(PlannedFile {
            ast: input.ast,
            plans,
        })
    }

    fn name(&self) -> &str {
        "Plan"
    }
}

/// Render the reordered source.
pub struct RewriteStage;

impl Stage for RewriteStage {
    type Input = PlannedFile;
    type Output = RewrittenFile;
    type Error = std::convert::Infallible;

    fn execute(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        let rewritten = StructuralRewriter::new(&input.plans).rewrite(&input.ast);
        let reordered_types = input
            .plans
            .iter()
            .filter(|plan| plan.needs_rewriting())
            .map(|plan| plan.summary())
            .collect();

        Ok(RewrittenFile {
            path: input.ast.path,
            original: input.ast.source,
            rewritten,
            reordered_types,
            written: false,
        })
    }

    fn name(&self) -> &str {
        "Rewrite"
    }
}

/// Write changed files back in place.
pub fn write_stage(
) -> impl Stage<Input = RewrittenFile, Output = RewrittenFile, Error = ReorderError>
       + Send
       + Sync
       + 'static {
    FnStage::new(
        "Write",
        |mut file: RewrittenFile| -> Result<RewrittenFile, ReorderError> {
            if file.changed() {
                io::write_file(&file.path, &file.rewritten)?;
                file.written = true;
                tracing::info!("Reordered {}", file.path.display());
            }
            Ok(file)
        },
    )
}
