//! Command-line interface: argument definitions and runtime setup.

pub mod args;
pub mod setup;

pub use args::{Cli, Commands, OutputFormat};
pub use setup::{configure_thread_pool, get_worker_count, initialize};

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    use clap::Parser;
    Cli::parse()
}
