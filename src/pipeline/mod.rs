//! Per-file pipelines for the `fix` and `check` commands.
//!
//! Both pipelines are built once per command and shared read-only by every
//! worker thread; all per-file state flows through the stage values.

pub mod builder;
pub mod data;
pub mod stage;
pub mod stages;

pub use builder::{BuiltPipeline, PipelineBuilder, StageTiming};
pub use data::{FileReport, FileTask, RewrittenFile, TypeReport};
pub use stage::{FnStage, Stage};

use stages::{read_stage, write_stage, ClassifyStage, ParseStage, PlanStage, ReportStage, RewriteStage};

/// read → parse → plan → rewrite, then write back unless `dry_run`.
pub fn fix_pipeline(dry_run: bool) -> BuiltPipeline<FileTask, RewrittenFile> {
    PipelineBuilder::<FileTask>::new()
        .stage(read_stage())
        .stage(ParseStage)
        .stage(PlanStage)
        .stage(RewriteStage)
        .when(!dry_run, |p| p.stage(write_stage()))
        .build()
}

/// read → parse → classify → report.
pub fn check_pipeline() -> BuiltPipeline<FileTask, FileReport> {
    PipelineBuilder::<FileTask>::new()
        .stage(read_stage())
        .stage(ParseStage)
        .stage(ClassifyStage)
        .stage(ReportStage)
        .build()
}
