//! Command handlers invoked from `main`.

pub mod check;
pub mod fix;
pub mod init;

use anyhow::Result;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::batch::BatchResult;
use crate::io::discover_swift_files;
use crate::observability::{enter_phase, RunPhase};

/// Outcome of a command that completed without a hard failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Clean,
    NeedsChanges,
}

impl CommandStatus {
    pub fn exit_code(self) -> ExitCode {
        match self {
            CommandStatus::Clean => ExitCode::SUCCESS,
            CommandStatus::NeedsChanges => ExitCode::from(1),
        }
    }
}

/// Expand the command-line paths into the Swift files to process.
fn collect_inputs(paths: &[PathBuf], exclude: &[String]) -> Result<Vec<PathBuf>> {
    let _phase = enter_phase(RunPhase::Discovery);
    let paths = if paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        paths.to_vec()
    };
    let files = discover_swift_files(&paths, exclude)?;
    tracing::info!("Found {} Swift files", files.len());
    Ok(files)
}

/// Surface the first per-file failure, in input order, as the command error.
fn first_failure<T>(batch: &BatchResult<T>) -> Result<()> {
    match batch.first_error() {
        Some(err) => Err(anyhow::Error::new(err.clone())),
        None => Ok(()),
    }
}
