use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "swiftorder")]
#[command(about = "Reorder the members of Swift types by a configurable policy", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Number of worker threads (0 = all cores)
    #[arg(short = 'j', long, default_value = "0", global = true, env = "SWIFTORDER_JOBS")]
    pub jobs: usize,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report types whose members are out of order
    Check {
        /// Files or directories to check
        #[arg(default_value = ".")]
        paths: Vec<PathBuf>,

        /// Configuration file (overrides .swiftorder.yaml discovery)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Glob patterns to exclude
        #[arg(long)]
        exclude: Vec<String>,
    },

    /// Reorder members in place
    Fix {
        /// Files or directories to fix
        #[arg(default_value = ".")]
        paths: Vec<PathBuf>,

        /// Configuration file (overrides .swiftorder.yaml discovery)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Show what would change without writing
        #[arg(long)]
        dry_run: bool,

        /// Glob patterns to exclude
        #[arg(long)]
        exclude: Vec<String>,
    },

    /// Write a default .swiftorder.yaml
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,

        /// Directory to write the configuration file to
        #[arg(long, default_value = ".")]
        path: PathBuf,
    },
}
