//! Snapshot configuration loaded from `.repocat.yaml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::context::ServiceContext;

/// Name of the optional configuration file at the primary root.
pub const CONFIG_FILE: &str = ".repocat.yaml";

/// Default output filename for the snapshot document.
pub const DEFAULT_OUTPUT: &str = "codeBase.txt";

/// Configuration for a snapshot build.
///
/// All fields are optional in the YAML file; a missing file means
/// defaults throughout. CLI flags override whatever was loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SnapshotConfig {
    /// Output filename, relative to the primary root.
    pub output: String,
    /// Additional root directories, relative to the primary root.
    /// Roots that do not exist on disk are skipped silently.
    pub extra_roots: Vec<PathBuf>,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self { output: DEFAULT_OUTPUT.to_string(), extra_roots: Vec::new() }
    }
}

impl SnapshotConfig {
    /// Loads the configuration from `<root>/.repocat.yaml`, or returns
    /// defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(ctx: &ServiceContext, root: &Path) -> Result<Self, String> {
        let path = root.join(CONFIG_FILE);
        if !ctx.fs.exists(&path) {
            return Ok(Self::default());
        }
        let contents = ctx
            .fs
            .read_to_string(&path)
            .map_err(|e| format!("failed to read {CONFIG_FILE}: {e}"))?;
        serde_yaml::from_str(&contents).map_err(|e| format!("failed to parse {CONFIG_FILE}: {e}"))
    }

    /// Validates the configuration.
    ///
    /// The output filename must end with `.txt`: the enumeration filter
    /// drops `.txt` entries, which is what keeps a rerun from ingesting
    /// its own previous output.
    ///
    /// # Errors
    ///
    /// Returns an error describing the invalid field.
    pub fn validate(&self) -> Result<(), String> {
        if !self.output.ends_with(".txt") {
            return Err(format!(
                "output filename must end with .txt (got {:?}); \
                 otherwise the next run would ingest the snapshot itself",
                self.output
            ));
        }
        Ok(())
    }
}
