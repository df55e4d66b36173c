//! Version-control port for tracked-file enumeration.

use std::path::Path;

/// Enumerates the files a version-control system tracks under a root.
///
/// Abstracting enumeration allows deterministic replay and testing without
/// requiring a real repository, and leaves room for implementations that
/// walk the filesystem directly where the version-control tool is
/// unavailable.
pub trait TrackedFileLister: Send + Sync {
    /// Lists all tracked files under `root`, as `/`-separated paths
    /// relative to `root`, honoring the system's ignore rules.
    ///
    /// # Errors
    ///
    /// Returns an error if `root` is not a valid working tree or the
    /// version-control command cannot be run.
    fn list_tracked(
        &self,
        root: &Path,
    ) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>>;
}
