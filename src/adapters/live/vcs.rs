//! Live tracked-file lister shelling out to the `git` CLI.

use std::path::Path;
use std::process::Command;

use crate::ports::vcs::TrackedFileLister;

/// Lists tracked files by running `git ls-files` inside the root.
///
/// Respects `.gitignore` for free: `ls-files` only reports what the index
/// knows about. There is deliberately no fallback to a raw directory walk
/// when the root is not a working tree.
pub struct GitLister;

impl TrackedFileLister for GitLister {
    fn list_tracked(
        &self,
        root: &Path,
    ) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>> {
        let output = Command::new("git").arg("ls-files").current_dir(root).output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(format!("git ls-files failed in {}: {stderr}", root.display()).into());
        }
        let files = String::from_utf8_lossy(&output.stdout)
            .lines()
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        Ok(files)
    }
}
