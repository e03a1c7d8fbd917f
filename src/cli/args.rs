use crate::constants::{exit_codes, verbosity};
use crate::params::ServiceParams;
use clap::{error::ErrorKind, CommandFactory, Parser};
use log::LevelFilter;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// Service creation tool.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Cpp name for the service.
    #[arg(short = 'n', long = "cpp_name")]
    pub cpp_name: String,

    /// CMake target name.
    #[arg(short = 'c', long = "cmake_target")]
    pub cmake_target: String,

    /// Base path for the service.
    #[arg(short = 'p', long = "path")]
    pub path: PathBuf,

    /// Service name.
    #[arg(short = 's', long = "service_name")]
    pub service_name: String,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Preview actions without touching the filesystem.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

impl Args {
    pub fn to_params(&self) -> ServiceParams {
        ServiceParams::new(
            self.path.clone(),
            self.service_name.clone(),
            self.cmake_target.clone(),
            self.cpp_name.clone(),
        )
    }
}

/// Parse command line arguments with custom handling for missing required inputs.
pub fn get_args() -> Args {
    Args::try_parse().unwrap_or_else(|e| {
        if e.kind() == ErrorKind::MissingRequiredArgument {
            eprintln!("{}", e.render());
            let mut command = Args::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
