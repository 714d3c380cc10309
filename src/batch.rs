//! Parallel per-file execution of a pipeline.
//!
//! Configurations are resolved before fan-out, so a malformed config file
//! fails the run before any file is touched. After that every file runs to
//! completion on the rayon pool and results come back in input order.

use rayon::prelude::*;
use std::path::{Path, PathBuf};

use crate::config::ConfigResolver;
use crate::errors::{ReorderError, Result};
use crate::observability::{enter_file, enter_phase, file_done, start_progress, RunPhase};
use crate::pipeline::{BuiltPipeline, FileTask, StageTiming};

/// Result of running a pipeline over one file.
#[derive(Debug)]
pub struct FileOutcome<T> {
    pub path: PathBuf,
    pub result: Result<T>,
}

/// Outcomes of a batch, in input order.
#[derive(Debug)]
pub struct BatchResult<T> {
    pub outcomes: Vec<FileOutcome<T>>,
}

impl<T> BatchResult<T> {
    pub fn successes(&self) -> impl Iterator<Item = &T> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = (&Path, &ReorderError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.path.as_path(), e)))
    }

    /// The error of the first failing file in input order.
    pub fn first_error(&self) -> Option<&ReorderError> {
        self.failures().next().map(|(_, e)| e)
    }

    pub fn file_count(&self) -> usize {
        self.outcomes.len()
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }
}

/// Run `pipeline` over every file in parallel.
pub fn run_batch<T: Send + 'static>(
    files: &[PathBuf],
    resolver: &ConfigResolver,
    pipeline: &BuiltPipeline<FileTask, T>,
) -> Result<BatchResult<T>> {
    let configs = {
        let _phase = enter_phase(RunPhase::LoadingConfig);
        resolver.resolve_all(files)?
    };
    tracing::debug!("Processing {} files", files.len());
    start_progress(files.len());

    let outcomes = files
        .par_iter()
        .zip(configs)
        .map(|(path, config)| {
            let _phase = enter_phase(RunPhase::Processing);
            let _file = enter_file(path);
            let result = pipeline
                .execute_with_timing(FileTask::new(path, config))
                .map(|(output, timings)| {
                    let stages: Vec<String> = timings.iter().map(StageTiming::format).collect();
                    tracing::trace!("{}: {}", path.display(), stages.join(", "));
                    output
                })
                .map_err(|e| e.with_path(path));
            if let Err(e) = &result {
                tracing::debug!("{} failed: {}", path.display(), e);
            }
            file_done();
            FileOutcome {
                path: path.clone(),
                result,
            }
        })
        .collect();

    Ok(BatchResult { outcomes })
}
