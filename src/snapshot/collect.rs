//! Path collection: enumerate roots, filter, deduplicate, sort.

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use crate::context::ServiceContext;

/// Suffix excluded from snapshots, matched case-sensitively against the
/// relative path. This is what keeps the tool from re-ingesting its own
/// previous output (the output filename is constrained to end in `.txt`).
const PLAIN_TEXT_SUFFIX: &str = ".txt";

/// Collects the relative paths to include in a snapshot.
///
/// Enumerates tracked files in the primary root and every extra root,
/// re-expresses each as a `/`-separated path relative to the primary root,
/// drops `.txt` entries, deduplicates (first occurrence wins, primary root
/// first), and sorts lexicographically ascending.
///
/// Extra roots that do not exist on disk contribute nothing and are not an
/// error; an extra root that exists but is not a working tree fails the
/// same way the primary root does.
///
/// # Errors
///
/// Returns an error if tracked-file enumeration fails for the primary root
/// or for an existing extra root.
pub fn collect(
    ctx: &ServiceContext,
    root: &Path,
    extra_roots: &[PathBuf],
) -> Result<Vec<String>, String> {
    let root = normalize(root);
    let mut seen = HashSet::new();
    let mut paths = Vec::new();

    let tracked = ctx
        .vcs
        .list_tracked(&root)
        .map_err(|e| format!("failed to list tracked files in {}: {e}", root.display()))?;
    for file in tracked {
        add_entry(file, &mut seen, &mut paths);
    }

    for extra in extra_roots {
        let dir = normalize(&root.join(extra));
        if !ctx.fs.exists(&dir) {
            continue; // extra roots are optional augmentation
        }
        let tracked = ctx
            .vcs
            .list_tracked(&dir)
            .map_err(|e| format!("failed to list tracked files in {}: {e}", dir.display()))?;
        for file in tracked {
            let rel = relative_to(&normalize(&dir.join(&file)), &root);
            add_entry(rel, &mut seen, &mut paths);
        }
    }

    paths.sort();
    Ok(paths)
}

/// Applies the `.txt` filter and first-seen deduplication.
fn add_entry(path: String, seen: &mut HashSet<String>, out: &mut Vec<String>) {
    if path.ends_with(PLAIN_TEXT_SUFFIX) {
        return;
    }
    if seen.insert(path.clone()) {
        out.push(path);
    }
}

/// Resolves `.` and `..` components lexically, without touching the disk.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Re-expresses `path` relative to `base`, joining the result with `/`.
///
/// Both arguments must already be normalized. Paths outside `base` get
/// `..` components.
fn relative_to(path: &Path, base: &Path) -> String {
    let path: Vec<_> = path.components().collect();
    let base: Vec<_> = base.components().collect();
    let common = path.iter().zip(&base).take_while(|(a, b)| a == b).count();

    let mut parts: Vec<String> = Vec::new();
    for _ in common..base.len() {
        parts.push("..".to_string());
    }
    for component in &path[common..] {
        parts.push(component.as_os_str().to_string_lossy().into_owned());
    }
    parts.join("/")
}
