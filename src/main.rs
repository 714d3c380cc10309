use anyhow::Result;
use std::process::ExitCode;
use swiftorder::cli::{self, Commands};
use swiftorder::commands::{check, fix, init, CommandStatus};

fn main() -> Result<ExitCode> {
    let cli = cli::parse_args();
    cli::initialize(cli.verbose, cli.jobs);

    let status = match cli.command {
        Commands::Check {
            paths,
            config,
            format,
            exclude,
        } => check::handle_check(check::CheckConfig {
            paths,
            config,
            format,
            exclude,
        })?,
        Commands::Fix {
            paths,
            config,
            dry_run,
            exclude,
        } => fix::handle_fix(fix::FixConfig {
            paths,
            config,
            dry_run,
            exclude,
        })?,
        Commands::Init { force, path } => {
            init::init_config(force, &path)?;
            CommandStatus::Clean
        }
    };

    Ok(status.exit_code())
}
