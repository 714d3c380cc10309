//! Error type shared by the library.
//!
//! Library code returns [`ReorderError`]; command handlers and `main` wrap
//! it in `anyhow`.
//!
//! ```rust
//! use swiftorder::errors::ReorderError;
//!
//! let err = ReorderError::io_with_path("permission denied", "Sources/Foo.swift");
//! assert_eq!(err.category(), "I/O");
//! assert_eq!(err.to_string(), "I/O error: permission denied (path: Sources/Foo.swift)");
//! ```

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReorderError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReorderError {
    /// Reading or writing a source or configuration file failed.
    #[error("I/O error: {message}{}", path_suffix(path))]
    Io {
        message: String,
        path: Option<PathBuf>,
    },
    /// The Swift grammar produced error or missing nodes.
    #[error("Parse error: {message}{}{}", path_suffix(path), line_suffix(line))]
    Parse {
        message: String,
        path: Option<PathBuf>,
        line: Option<usize>,
    },
    /// A configuration file is not valid YAML.
    #[error("Config error: {message}{}", path_suffix(path))]
    Config {
        message: String,
        path: Option<PathBuf>,
    },
    /// Stages were composed with mismatching types.
    #[error("Pipeline error: {0}")]
    Pipeline(String),
    #[error("{0}")]
    Other(String),
}

fn path_suffix(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!(" (path: {})", p.display()),
        None => String::new(),
    }
}

fn line_suffix(line: &Option<usize>) -> String {
    line.map(|l| format!(" at line {}", l)).unwrap_or_default()
}

impl ReorderError {
    pub fn io_with_path(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            path: None,
            line: None,
        }
    }

    pub fn parse_with_context(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        line: usize,
    ) -> Self {
        Self::Parse {
            message: message.into(),
            path: Some(path.into()),
            line: Some(line),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            path: None,
        }
    }

    pub fn pipeline(message: impl Into<String>) -> Self {
        Self::Pipeline(message.into())
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }

    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. } | Self::Config { path, .. } | Self::Parse { path, .. } => {
                path.as_ref()
            }
            Self::Pipeline(_) | Self::Other(_) => None,
        }
    }

    /// Short label used in reports and JSON output.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Io { .. } => "I/O",
            Self::Parse { .. } => "Parse",
            Self::Config { .. } => "Config",
            Self::Pipeline(_) => "Pipeline",
            Self::Other(_) => "Error",
        }
    }

    /// Fill in the path of a path-carrying error. An existing path wins.
    pub fn with_path(mut self, file: impl Into<PathBuf>) -> Self {
        if let Self::Io { path, .. } | Self::Parse { path, .. } | Self::Config { path, .. } =
            &mut self
        {
            if path.is_none() {
                *path = Some(file.into());
            }
        }
        self
    }
}

impl From<io::Error> for ReorderError {
    fn from(err: io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
            path: None,
        }
    }
}

// Lets `Stage`s with `Error = Infallible` join a pipeline.
impl From<std::convert::Infallible> for ReorderError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}
