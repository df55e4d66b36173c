//! Recording session managing per-port cassette recorders.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use chrono::Utc;

use super::recorder::CassetteRecorder;

/// Manages per-port `CassetteRecorder` instances for a recording session.
///
/// Each port gets its own recorder writing to a separate cassette file.
/// All cassettes land in a timestamped subdirectory of the base directory.
pub struct RecordingSession {
    /// Recorder for clock interactions.
    pub clock: Arc<Mutex<CassetteRecorder>>,
    /// Recorder for filesystem interactions.
    pub fs: Arc<Mutex<CassetteRecorder>>,
    /// Recorder for tracked-file lister interactions.
    pub vcs: Arc<Mutex<CassetteRecorder>>,
    /// Output directory containing all cassette files.
    output_dir: PathBuf,
}

impl RecordingSession {
    /// Create a new recording session under the given base directory.
    ///
    /// Cassettes are written to `<base>/<timestamp>/<port>.cassette.yaml`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The cassette directory already exists
    /// - The directory cannot be created
    pub fn new(base: PathBuf) -> Result<Self, String> {
        let timestamp = Utc::now().format("%Y-%m-%dT%H-%M-%S").to_string();
        let output_dir = base.join(&timestamp);

        if output_dir.exists() {
            return Err(format!("Cassette directory already exists: {}", output_dir.display()));
        }

        std::fs::create_dir_all(&output_dir)
            .map_err(|e| format!("Failed to create cassette directory: {e}"))?;

        let commit = get_commit_hash();

        let make_recorder = |port: &str| -> Arc<Mutex<CassetteRecorder>> {
            let path = output_dir.join(format!("{port}.cassette.yaml"));
            let name = format!("{timestamp}-{port}");
            Arc::new(Mutex::new(CassetteRecorder::new(path, &name, &commit)))
        };

        Ok(Self {
            clock: make_recorder("clock"),
            fs: make_recorder("fs"),
            vcs: make_recorder("vcs"),
            output_dir,
        })
    }

    /// Finish all recorders and write cassette files to disk.
    ///
    /// Consumes the session and writes each port's cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if any cassette file cannot be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        fn finish_one(arc: Arc<Mutex<CassetteRecorder>>, port: &str) -> Result<(), String> {
            let recorder = Arc::try_unwrap(arc)
                .map_err(|_| format!("Recording adapter for {port} still has references"))?
                .into_inner()
                .map_err(|e| format!("Recorder lock for {port} poisoned: {e}"))?;
            recorder.finish().map_err(|e| format!("Failed to write {port} cassette: {e}"))?;
            Ok(())
        }

        finish_one(self.clock, "clock")?;
        finish_one(self.fs, "fs")?;
        finish_one(self.vcs, "vcs")?;

        Ok(self.output_dir)
    }
}

/// Get the current git commit hash, or "unknown" with a warning if unavailable.
fn get_commit_hash() -> String {
    let hash = std::process::Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string());

    if let Some(h) = hash {
        h
    } else {
        eprintln!("Warning: Could not get git commit hash, using 'unknown'");
        "unknown".to_string()
    }
}
