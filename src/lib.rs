//! Breadcrumb trails for the registry web console.
//!
//! Given the sequence of pages a user visits, [`breadcrumb::Navigator`]
//! produces the trail shown above each page. Trails can be recorded into
//! YAML cassettes and replayed or re-checked later.

pub mod adapters;
pub mod breadcrumb;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod ports;
pub mod route;

use clap::Parser;

pub use error::CrumbsError;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing, configuration loading or
/// command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    let config = config::Config::load().map_err(|err| err.to_string())?;
    logging::init(&config.log);
    commands::dispatch(&cli.command, &config).map_err(|err| err.to_string())
}
