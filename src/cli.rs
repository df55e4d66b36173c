//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `repocat`.
#[derive(Debug, Parser)]
#[command(
    name = "repocat",
    version,
    about = "Concatenate tracked project files into one snapshot document"
)]
pub struct Cli {
    /// The command to execute. Defaults to `build` when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Regenerate the snapshot document from the current working tree.
    Build {
        /// Write the snapshot to this file instead of the configured output.
        /// Must end with `.txt`.
        #[arg(long, value_name = "FILE")]
        output: Option<String>,

        /// Additional root directory to include (repeatable); replaces the
        /// configured list.
        #[arg(long = "extra-root", value_name = "DIR")]
        extra_roots: Vec<PathBuf>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Self::Build { output: None, extra_roots: Vec::new() }
    }
}
