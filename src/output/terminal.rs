use colored::*;
use std::fmt::Write;

use super::Summary;
use crate::batch::BatchResult;
use crate::pipeline::{FileReport, RewrittenFile};

pub fn format_check_report(batch: &BatchResult<FileReport>) -> String {
    let mut out = String::new();

    for report in batch.successes().filter(|r| r.needs_reordering()) {
        let _ = writeln!(out, "{}", report.path.display().to_string().bold());
        for t in report.unordered_types() {
            let _ = writeln!(
                out,
                "  {} {} (line {}): expected {}",
                t.type_kind,
                t.type_name.cyan(),
                t.line,
                t.expected.join(", ")
            );
        }
    }

    write_failures(&mut out, batch);

    let summary = Summary::for_check(batch);
    let status = if summary.needs_reordering == 0 && summary.failed == 0 {
        "✓".green()
    } else {
        "✗".red()
    };
    let _ = writeln!(
        out,
        "{} {} files checked, {} need reordering, {} failed",
        status, summary.files, summary.needs_reordering, summary.failed
    );
    out
}

pub fn format_fix_report(batch: &BatchResult<RewrittenFile>, dry_run: bool) -> String {
    let mut out = String::new();
    let verb = if dry_run { "would reorder" } else { "reordered" };

    for file in batch.successes().filter(|f| f.changed()) {
        let _ = writeln!(out, "{} {}", verb.yellow(), file.path.display());
        for t in &file.reordered_types {
            let _ = writeln!(
                out,
                "  {} {} (line {}): {}",
                t.type_kind,
                t.type_name.cyan(),
                t.line,
                t.reordered.join(", ")
            );
        }
    }

    write_failures(&mut out, batch);

    let summary = Summary::for_fix(batch);
    let _ = writeln!(
        out,
        "{} files processed, {} {}, {} failed",
        summary.files, summary.needs_reordering, verb, summary.failed
    );
    out
}

fn write_failures<T>(out: &mut String, batch: &BatchResult<T>) {
    for (path, error) in batch.failures() {
        let _ = writeln!(out, "{} {}: {}", "error:".red().bold(), path.display(), error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::FileOutcome;
    use crate::core::TypeKind;
    use crate::errors::ReorderError;
    use crate::pipeline::TypeReport;
    use std::path::PathBuf;

    fn check_batch() -> BatchResult<FileReport> {
        BatchResult {
            outcomes: vec![
                FileOutcome {
                    path: PathBuf::from("Foo.swift"),
                    result: Ok(FileReport {
                        path: PathBuf::from("Foo.swift"),
                        types: vec![TypeReport {
                            type_name: "Foo".to_string(),
                            type_kind: TypeKind::Struct,
                            line: 1,
                            current: vec!["run".to_string(), "init".to_string()],
                            expected: vec!["init".to_string(), "run".to_string()],
                            needs_reordering: true,
                        }],
                    }),
                },
                FileOutcome {
                    path: PathBuf::from("Bad.swift"),
                    result: Err(ReorderError::parse("unexpected token")),
                },
            ],
        }
    }

    #[test]
    fn test_check_report_lists_types_and_failures() {
        let text = format_check_report(&check_batch());
        assert!(text.contains("Foo.swift"));
        assert!(text.contains("expected init, run"));
        assert!(text.contains("Bad.swift"));
        assert!(text.contains("unexpected token"));
        assert!(text.contains("1 files checked, 1 need reordering, 1 failed"));
    }

    #[test]
    fn test_fix_report_dry_run_wording() {
        let batch = BatchResult {
            outcomes: vec![FileOutcome {
                path: PathBuf::from("Foo.swift"),
                result: Ok(RewrittenFile {
                    path: PathBuf::from("Foo.swift"),
                    original: "a".to_string(),
                    rewritten: "b".to_string(),
                    reordered_types: Vec::new(),
                    written: false,
                }),
            }],
        };
        let text = format_fix_report(&batch, true);
        assert!(text.contains("would reorder"));
        assert!(text.contains("Foo.swift"));
        assert!(format_fix_report(&batch, false).contains("reordered"));
    }
}
