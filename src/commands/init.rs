use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG: &str = r#"# swiftorder configuration
version: 1

ordering:
  # Members are grouped by the first rule they match, in this order.
  # Members matching no rule keep their relative order after all groups.
  members:
    - type_alias
    - associated_type
    - initializer
    - type_property
    - instance_property
    - nested_type
    - type_method
    - instance_method
    - subscript
    - deinitializer
    # Filtered rules:
    # - property:
    #     annotated: true        # @State, @Published, ...
    #     visibility: private
    # - method:
    #     kind: static           # or instance
    #     visibility: public

extensions:
  # Extension bodies are left untouched; members never move between
  # an extension and the extended type.
  strategy: separate             # or merge
  respect_boundaries: true
"#;

/// Write the default configuration file into `dir`.
pub fn init_config(force: bool, dir: &Path) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if io::file_exists(&config_path) && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    io::write_file(&config_path, DEFAULT_CONFIG)?;
    println!("Created {}", config_path.display());

    Ok(config_path)
}
