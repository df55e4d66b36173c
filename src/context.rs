//! Service context bundling all port trait objects.

use std::path::{Path, PathBuf};

use crate::adapters::live::clock::LiveClock;
use crate::adapters::live::filesystem::LiveFileSystem;
use crate::adapters::live::vcs::GitLister;
use crate::adapters::recording::clock::RecordingClock;
use crate::adapters::recording::filesystem::RecordingFileSystem;
use crate::adapters::recording::vcs::RecordingLister;
use crate::adapters::replaying::{ReplayingClock, ReplayingFileSystem, ReplayingLister};
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::RecordingSession;
use crate::ports::clock::Clock;
use crate::ports::filesystem::FileSystem;
use crate::ports::vcs::TrackedFileLister;

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. Constructors
/// wire up different adapter implementations (live, recording, replaying).
pub struct ServiceContext {
    /// Clock for obtaining the current time.
    pub clock: Box<dyn Clock>,
    /// Filesystem for file I/O.
    pub fs: Box<dyn FileSystem>,
    /// Tracked-file lister for version-control enumeration.
    pub vcs: Box<dyn TrackedFileLister>,
}

impl ServiceContext {
    /// Creates a live context with real adapters for all ports.
    #[must_use]
    pub fn live() -> Self {
        Self {
            clock: Box::new(LiveClock),
            fs: Box::new(LiveFileSystem),
            vcs: Box::new(GitLister),
        }
    }

    /// Creates a recording context that captures all port interactions.
    ///
    /// Live adapters do the actual work; every interaction is recorded into
    /// per-port cassette files under `base`. The caller must drop the
    /// context and then call [`RecordingSession::finish`] to write the
    /// cassettes. This is the developer-only mechanism behind the
    /// `REPOCAT_RECORD` env var.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette directory cannot be created.
    pub fn recording_at(base: PathBuf) -> Result<(Self, RecordingSession), String> {
        let session = RecordingSession::new(base)?;

        let ctx = Self {
            clock: Box::new(RecordingClock::new(
                Box::new(LiveClock),
                std::sync::Arc::clone(&session.clock),
            )),
            fs: Box::new(RecordingFileSystem::new(
                Box::new(LiveFileSystem),
                std::sync::Arc::clone(&session.fs),
            )),
            vcs: Box::new(RecordingLister::new(
                Box::new(GitLister),
                std::sync::Arc::clone(&session.vcs),
            )),
        };

        Ok((ctx, session))
    }

    /// Creates a replaying context from a monolithic cassette file.
    ///
    /// All ports are served by a single cassette — each port gets its own
    /// replayer so per-port cursors are independent.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
        let cassette: crate::cassette::format::Cassette = serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))?;

        Ok(Self {
            clock: Box::new(ReplayingClock::new(CassetteReplayer::new(&cassette))),
            fs: Box::new(ReplayingFileSystem::new(CassetteReplayer::new(&cassette))),
            vcs: Box::new(ReplayingLister::new(CassetteReplayer::new(&cassette))),
        })
    }
}
