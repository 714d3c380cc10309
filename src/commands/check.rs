use anyhow::Result;
use std::path::PathBuf;

use super::{collect_inputs, first_failure, CommandStatus};
use crate::batch::run_batch;
use crate::cli::OutputFormat;
use crate::config::ConfigResolver;
use crate::observability::{enter_phase, RunPhase};
use crate::output::{format_check_json, format_check_report};
use crate::pipeline::check_pipeline;

pub struct CheckConfig {
    pub paths: Vec<PathBuf>,
    pub config: Option<PathBuf>,
    pub format: OutputFormat,
    pub exclude: Vec<String>,
}

/// Report every type whose members are out of order.
///
/// Returns `NeedsChanges` when at least one file would be rewritten. A
/// per-file failure is reported alongside the other results and then
/// returned as the command error.
pub fn handle_check(config: CheckConfig) -> Result<CommandStatus> {
    let files = collect_inputs(&config.paths, &config.exclude)?;
    let resolver = ConfigResolver::new(config.config.as_deref())?;
    let batch = run_batch(&files, &resolver, &check_pipeline())?;

    {
        let _phase = enter_phase(RunPhase::Reporting);
        let rendered = match config.format {
            OutputFormat::Terminal => format_check_report(&batch),
            OutputFormat::Json => format_check_json(&batch)?,
        };
        println!("{}", rendered);
    }

    first_failure(&batch)?;

    let needs_changes = batch.successes().any(|report| report.needs_reordering());
    Ok(if needs_changes {
        CommandStatus::NeedsChanges
    } else {
        CommandStatus::Clean
    })
}
