use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use super::core::Configuration;
use super::mapping::parse_config;
use crate::errors::{ReorderError, Result};

pub const CONFIG_FILE_NAME: &str = ".swiftorder.yaml";

/// Maximum number of directories inspected when searching for a config file.
pub const MAX_TRAVERSAL_DEPTH: usize = 25;

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Nearest `.swiftorder.yaml` at or above `dir`.
pub fn find_config_file(dir: &Path) -> Option<PathBuf> {
    directory_ancestors(dir.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|path| path.is_file())
}

/// Read and map one configuration file. Malformed YAML is an error.
pub fn load_config_file(path: &Path) -> Result<Configuration> {
    let contents =
        fs::read_to_string(path).map_err(|e| ReorderError::io_with_path(e.to_string(), path))?;
    let config = parse_config(&contents).map_err(|e| e.with_path(path))?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Load the configuration that applies to files in `dir`.
///
/// A discovered file that cannot be read is logged and skipped in favour of
/// the defaults; one that cannot be parsed is an error.
pub fn load_config_for_dir(dir: &Path) -> Result<Configuration> {
    let Some(path) = find_config_file(dir) else {
        tracing::debug!(
            "No {} found above {}; using default config",
            CONFIG_FILE_NAME,
            dir.display()
        );
        return Ok(Configuration::default());
    };

    match load_config_file(&path) {
        Err(ReorderError::Io { message, .. }) => {
            handle_read_error(&path, &message);
            Ok(Configuration::default())
        }
        other => other,
    }
}

fn handle_read_error(config_path: &Path, message: &str) {
    tracing::warn!(
        "Failed to read config file {}: {}. Using default config.",
        config_path.display(),
        message
    );
}

/// Resolves the configuration for each source file.
///
/// With an explicit config every file shares it. Otherwise the nearest
/// ancestor file is looked up once per directory and cached.
#[derive(Debug)]
pub struct ConfigResolver {
    explicit: Option<Arc<Configuration>>,
    cache: Mutex<HashMap<PathBuf, Arc<Configuration>>>,
}

impl ConfigResolver {
    pub fn new(explicit: Option<&Path>) -> Result<Self> {
        let explicit = explicit
            .map(|path| load_config_file(path).map(Arc::new))
            .transpose()?;
        Ok(Self {
            explicit,
            cache: Mutex::new(HashMap::new()),
        })
    }

    pub fn with_config(config: Configuration) -> Self {
        Self {
            explicit: Some(Arc::new(config)),
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn resolve(&self, file: &Path) -> Result<Arc<Configuration>> {
        if let Some(config) = &self.explicit {
            return Ok(Arc::clone(config));
        }

        let absolute = std::path::absolute(file)
            .map_err(|e| ReorderError::io_with_path(e.to_string(), file))?;
        let dir = absolute
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("/"));

        let mut cache = self
            .cache
            .lock()
            .map_err(|_| ReorderError::config("Configuration cache poisoned"))?;
        if let Some(config) = cache.get(&dir) {
            return Ok(Arc::clone(config));
        }

        let config = Arc::new(load_config_for_dir(&dir)?);
        cache.insert(dir, Arc::clone(&config));
        Ok(config)
    }

    /// Resolve every file up front, in order.
    pub fn resolve_all(&self, files: &[PathBuf]) -> Result<Vec<Arc<Configuration>>> {
        files.iter().map(|file| self.resolve(file)).collect()
    }
}
