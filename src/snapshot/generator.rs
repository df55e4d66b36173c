//! Snapshot generation: collect paths, read contents, write the document.

use std::path::Path;

use crate::config::SnapshotConfig;
use crate::context::ServiceContext;
use crate::snapshot::{collect, render, FileBlock, Snapshot};

/// Generates a [`Snapshot`] for the project rooted at `root` and writes
/// the rendered document to the configured output path.
///
/// Files that vanish between enumeration and read are skipped silently —
/// the two steps are not atomic — and do not count toward the `Files:`
/// header. Any other read failure aborts the run before the output file
/// is touched: the single write happens only after every read succeeded.
///
/// # Errors
///
/// Returns an error if enumeration fails, a still-present file cannot be
/// read, or the output cannot be written.
pub fn generate(
    ctx: &ServiceContext,
    root: &Path,
    config: &SnapshotConfig,
) -> Result<Snapshot, String> {
    let generated_at = ctx.clock.now();

    let paths = collect::collect(ctx, root, &config.extra_roots)?;

    let mut blocks = Vec::new();
    for path in paths {
        let abs = root.join(&path);
        if !ctx.fs.exists(&abs) {
            continue; // vanished between enumeration and read
        }
        let content = ctx
            .fs
            .read_to_string(&abs)
            .map_err(|e| format!("failed to read {path}: {e}"))?;
        let language = language_tag(&path);
        blocks.push(FileBlock { path, language, content });
    }

    let snapshot = Snapshot { generated_at, blocks };

    let doc = render::render(&snapshot);
    let output = root.join(&config.output);
    ctx.fs
        .write(&output, &doc)
        .map_err(|e| format!("failed to write snapshot to {}: {e}", output.display()))?;

    Ok(snapshot)
}

/// Derives the fence language tag: the extension with its leading `.`
/// removed, or "" when there is none. No mapping table on purpose.
fn language_tag(path: &str) -> String {
    Path::new(path)
        .extension()
        .map_or_else(String::new, |ext| ext.to_string_lossy().into_owned())
}
