//! Core library entry for the `muster` CLI.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod envelope;
pub mod error;
pub mod extract;
pub mod orchestrator;
pub mod ports;
pub mod store;
#[cfg(test)]
pub(crate) mod test_helpers;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// Help and version requests are printed here and count as success.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    use clap::error::ErrorKind;

    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err)
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) =>
        {
            err.print().map_err(|e| e.to_string())?;
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    commands::dispatch(&cli.command)
}
