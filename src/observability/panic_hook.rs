//! Custom panic hook for structured crash reports.
//!
//! A crash report names the phase, the file being processed and how far the
//! run got, which is usually enough to reproduce the failure on one file.

use super::context::{current_context, progress, Progress, RunContext};
use std::panic::PanicHookInfo;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const WIDTH: usize = 76;

/// Install the custom panic hook. Call early in `main`.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!();
        eprint!("{}", crash_report(info, &current_context(), progress()));
    }));
}

fn crash_report(info: &PanicHookInfo<'_>, context: &RunContext, progress: Progress) -> String {
    let mut lines = vec![
        "SWIFTORDER CRASH REPORT".to_string(),
        format!("Version: {}", VERSION),
        format!("Platform: {}", std::env::consts::OS),
        format!("Panic: {}", extract_panic_message(info)),
    ];
    if let Some(location) = info.location() {
        lines.push(format!(
            "Location: {}:{}:{}",
            location.file(),
            location.line(),
            location.column()
        ));
    }
    lines.extend(context_lines(context, progress));
    if std::env::var("RUST_BACKTRACE").is_err() {
        lines.push("Run with RUST_BACKTRACE=1 for stack trace".to_string());
    }

    let border = "═".repeat(WIDTH + 4);
    let mut report = format!("╔{}╗\n", border);
    for line in lines {
        report.push_str(&format!("║  {:<width$}  ║\n", truncate(&line, WIDTH), width = WIDTH));
    }
    report.push_str(&format!("╚{}╝\n", border));

    if std::env::var("RUST_BACKTRACE").is_ok() {
        report.push_str(&format!("{}\n", std::backtrace::Backtrace::capture()));
    }
    if let Some(file) = &context.current_file {
        report.push_str(&format!("Include this crash report and the file: {}\n", file.display()));
    }
    report
}

fn context_lines(context: &RunContext, progress: Progress) -> Vec<String> {
    let mut lines = vec![match &context.phase {
        Some(phase) => format!("Phase: {}", phase),
        None => "Phase: (not set)".to_string(),
    }];
    if let Some(file) = &context.current_file {
        lines.push(format!("File: {}", file.display()));
    }
    if progress.total > 0 {
        lines.push(format!(
            "Progress: {} / {} files",
            progress.processed, progress.total
        ));
    }
    lines
}

fn extract_panic_message(info: &PanicHookInfo<'_>) -> String {
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observability::context::RunPhase;
    use std::path::PathBuf;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly10!", 10), "exactly10!");
        assert_eq!(truncate("this is a long string", 10), "this is...");
        assert_eq!(truncate("ééééééé", 5), "éé...");
    }

    #[test]
    fn test_context_lines() {
        let context = RunContext {
            phase: Some(RunPhase::Processing),
            current_file: Some(PathBuf::from("Foo.swift")),
        };
        assert_eq!(
            context_lines(
                &context,
                Progress {
                    processed: 3,
                    total: 10
                }
            ),
            vec![
                "Phase: processing".to_string(),
                "File: Foo.swift".to_string(),
                "Progress: 3 / 10 files".to_string(),
            ]
        );
        assert_eq!(
            context_lines(&RunContext::new(), Progress::default()),
            vec!["Phase: (not set)".to_string()]
        );
    }
}
