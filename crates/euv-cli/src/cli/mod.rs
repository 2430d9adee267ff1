mod commands;
mod helpers;

use clap::Parser;
use euv_core::domain::{EuvError, SpectralDomain};
use std::path::PathBuf;

pub fn run_from_env() -> i32 {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match run(args) {
        Ok(code) => code,
        Err(error) => {
            let euv_error = error.as_euv_error();
            eprintln!("{}", euv_error.diagnostic_line());
            eprintln!("{}", euv_error.fatal_exit_line());
            euv_error.exit_code()
        }
    }
}

pub fn run<I, S>(args: I) -> Result<i32, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let full_args = std::iter::once("euv-rs".to_string())
        .chain(args.into_iter().map(Into::into))
        .collect::<Vec<_>>();
    parse_and_dispatch(full_args)
}

fn parse_and_dispatch(args: Vec<String>) -> Result<i32, CliError> {
    match Cli::try_parse_from(&args) {
        Ok(cli) => {
            helpers::init_tracing(cli.verbose);
            dispatch_parsed(cli.command, cli.config)
        }
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                print!("{}", err);
                Ok(0)
            }
            _ => Err(CliError::Usage(err.to_string())),
        },
    }
}

#[derive(Parser)]
#[command(
    name = "euv-rs",
    version,
    about = "Solar EUV spectral irradiance from F10.7 and Lyman-alpha proxies"
)]
struct Cli {
    /// Engine configuration file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(clap::Subcommand)]
enum CliCommand {
    /// Compute the band spectrum
    Bands(commands::SpectrumArgs),
    /// Compute the line spectrum
    Lines(commands::SpectrumArgs),
    /// Compute band and line spectra for the same proxies
    Spectra(commands::SpectrumArgs),
    /// Load every coefficient table and report its bin count
    Tables(commands::TablesArgs),
}

fn dispatch_parsed(command: CliCommand, config: Option<PathBuf>) -> Result<i32, CliError> {
    match command {
        CliCommand::Bands(args) => {
            commands::run_spectrum_command(&[SpectralDomain::Bands], args, config.as_deref())
        }
        CliCommand::Lines(args) => {
            commands::run_spectrum_command(&[SpectralDomain::Lines], args, config.as_deref())
        }
        CliCommand::Spectra(args) => {
            commands::run_spectrum_command(&SpectralDomain::ALL, args, config.as_deref())
        }
        CliCommand::Tables(args) => commands::run_tables_command(args, config.as_deref()),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Compute(EuvError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl CliError {
    fn as_euv_error(&self) -> EuvError {
        match self {
            Self::Usage(message) => EuvError::input_validation("INPUT.CLI_USAGE", message.clone()),
            Self::Compute(error) => error.clone(),
            Self::Internal(error) => EuvError::io_system("IO.CLI", format!("{error:#}")),
        }
    }
}
