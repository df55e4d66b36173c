//! `repocat build` command.

use std::env;
use std::path::{Path, PathBuf};

use crate::config::SnapshotConfig;
use crate::context::ServiceContext;
use crate::snapshot::generator;

/// Execute the `build` command against the current working directory.
///
/// Loads `.repocat.yaml` (defaults when absent), applies CLI overrides —
/// `output` replaces the output filename, a non-empty `extra_roots`
/// replaces the configured list — and regenerates the snapshot.
///
/// # Errors
///
/// Returns an error string if configuration is invalid or generation fails.
pub fn run(
    ctx: &ServiceContext,
    output: Option<&str>,
    extra_roots: &[PathBuf],
) -> Result<(), String> {
    let root = env::current_dir().map_err(|e| format!("failed to get current directory: {e}"))?;
    run_at(ctx, &root, output, extra_roots)
}

/// Execute the `build` command against an explicit primary root.
fn run_at(
    ctx: &ServiceContext,
    root: &Path,
    output: Option<&str>,
    extra_roots: &[PathBuf],
) -> Result<(), String> {
    let mut config = SnapshotConfig::load(ctx, root)?;
    if let Some(output) = output {
        config.output = output.to_string();
    }
    if !extra_roots.is_empty() {
        config.extra_roots = extra_roots.to_vec();
    }
    config.validate()?;

    let snapshot = generator::generate(ctx, root, &config)?;
    println!("Snapshot written to {} ({} files)", config.output, snapshot.blocks.len());
    Ok(())
}
