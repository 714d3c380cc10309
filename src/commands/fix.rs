use anyhow::Result;
use std::path::PathBuf;

use super::{collect_inputs, first_failure, CommandStatus};
use crate::batch::run_batch;
use crate::config::ConfigResolver;
use crate::observability::{enter_phase, RunPhase};
use crate::output::format_fix_report;
use crate::pipeline::fix_pipeline;

pub struct FixConfig {
    pub paths: Vec<PathBuf>,
    pub config: Option<PathBuf>,
    pub dry_run: bool,
    pub exclude: Vec<String>,
}

/// Rewrite files in place, or with `dry_run` only report what would change.
///
/// A dry run returns `NeedsChanges` when any file would be rewritten; a real
/// run that succeeds is always `Clean`.
pub fn handle_fix(config: FixConfig) -> Result<CommandStatus> {
    let files = collect_inputs(&config.paths, &config.exclude)?;
    let resolver = ConfigResolver::new(config.config.as_deref())?;
    let batch = run_batch(&files, &resolver, &fix_pipeline(config.dry_run))?;

    {
        let _phase = enter_phase(RunPhase::Reporting);
        println!("{}", format_fix_report(&batch, config.dry_run));
    }

    first_failure(&batch)?;

    let would_change = batch.successes().any(|file| file.changed());
    Ok(if config.dry_run && would_change {
        CommandStatus::NeedsChanges
    } else {
        CommandStatus::Clean
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    const UNORDERED: &str = "class A {\n    func f() {}\n\n    init() {}\n}\n";
    const ORDERED: &str = "class A {\n    init() {}\n\n    func f() {}\n}\n";

    fn fix(dir: &TempDir, dry_run: bool) -> Result<CommandStatus> {
        handle_fix(FixConfig {
            paths: vec![dir.path().to_path_buf()],
            config: None,
            dry_run,
            exclude: Vec::new(),
        })
    }

    #[test]
    fn test_dry_run_reports_without_writing() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("A.swift");
        fs::write(&file, UNORDERED).unwrap();

        assert_eq!(fix(&dir, true).unwrap(), CommandStatus::NeedsChanges);
        assert_eq!(fs::read_to_string(&file).unwrap(), UNORDERED);
    }

    #[test]
    fn test_fix_writes_and_settles() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("A.swift");
        fs::write(&file, UNORDERED).unwrap();

        assert_eq!(fix(&dir, false).unwrap(), CommandStatus::Clean);
        assert_eq!(fs::read_to_string(&file).unwrap(), ORDERED);
        assert_eq!(fix(&dir, true).unwrap(), CommandStatus::Clean);
    }

    #[test]
    fn test_excluded_files_are_left_alone() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("Generated")).unwrap();
        let file = dir.path().join("Generated").join("A.swift");
        fs::write(&file, UNORDERED).unwrap();

        let status = handle_fix(FixConfig {
            paths: vec![dir.path().to_path_buf()],
            config: None,
            dry_run: false,
            exclude: vec!["**/Generated/**".to_string()],
        })
        .unwrap();
        assert_eq!(status, CommandStatus::Clean);
        assert_eq!(fs::read_to_string(&file).unwrap(), UNORDERED);
    }
}
