//! Configuration: schema, YAML mapping and file discovery.

mod core;
pub mod loader;
pub mod mapping;

pub use self::core::{Configuration, ExtensionStrategy, CURRENT_VERSION};
pub use loader::{
    directory_ancestors, find_config_file, load_config_file, load_config_for_dir, ConfigResolver,
    CONFIG_FILE_NAME,
};
pub use mapping::parse_config;
