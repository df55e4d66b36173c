//! Core library entry for the `repocat` CLI.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod ports;
pub mod snapshot;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// An omitted subcommand runs `build`.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command
/// execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => {
            // clap routes --help and --version through the error path;
            // they belong on stdout with a success exit.
            if err.use_stderr() {
                return Err(err.to_string());
            }
            print!("{err}");
            return Ok(());
        }
    };
    let command = cli.command.unwrap_or_default();
    commands::dispatch(&command)
}
