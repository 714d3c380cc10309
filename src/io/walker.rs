use crate::errors::{ReorderError, Result};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

const SWIFT_EXTENSION: &str = "swift";

/// Collects Swift sources below a root, honouring `.gitignore` and
/// user-supplied exclude globs.
pub struct SwiftFileWalker {
    root: PathBuf,
    ignore_patterns: Vec<glob::Pattern>,
}

impl SwiftFileWalker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            ignore_patterns: vec![],
        }
    }

    /// Invalid glob patterns are skipped with a warning.
    pub fn with_ignore_patterns(mut self, patterns: &[String]) -> Self {
        self.ignore_patterns = patterns
            .iter()
            .filter_map(|pattern| match glob::Pattern::new(pattern) {
                Ok(p) => Some(p),
                Err(e) => {
                    tracing::warn!("Ignoring invalid exclude pattern '{}': {}", pattern, e);
                    None
                }
            })
            .collect();
        self
    }

    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let walker = WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(true)
            .build();

        for entry in walker {
            let entry = entry.map_err(|e| ReorderError::io_with_path(e.to_string(), &self.root))?;
            let path = entry.path();

            if path.is_file() && is_swift(path) && !self.is_excluded(path) {
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        Ok(files)
    }

    fn is_excluded(&self, path: &Path) -> bool {
        is_excluded(&self.ignore_patterns, path)
    }
}

fn is_swift(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext == SWIFT_EXTENSION)
        .unwrap_or(false)
}

fn is_excluded(patterns: &[glob::Pattern], path: &Path) -> bool {
    let path_str = path.to_string_lossy();
    patterns.iter().any(|p| p.matches(&path_str))
}

/// Expand command-line paths into the list of files to process.
///
/// Files named explicitly are taken as they are; directories are walked for
/// `*.swift`. The result is sorted and free of duplicates.
pub fn discover_swift_files(paths: &[PathBuf], excludes: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            let walked = SwiftFileWalker::new(path.clone())
                .with_ignore_patterns(excludes)
                .walk()?;
            tracing::debug!("Found {} Swift files under {}", walked.len(), path.display());
            files.extend(walked);
        } else if path.is_file() {
            files.push(path.clone());
        } else {
            return Err(ReorderError::io_with_path("No such file or directory", path));
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}
