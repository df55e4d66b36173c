//! Replaying adapter for the `TrackedFileLister` port.

use std::path::Path;
use std::sync::Mutex;

use super::extract_result;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::vcs::TrackedFileLister;

/// Replays recorded tracked-file listings from a cassette.
pub struct ReplayingLister {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingLister {
    /// Creates a new replaying lister from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl TrackedFileLister for ReplayingLister {
    fn list_tracked(
        &self,
        _root: &Path,
    ) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>> {
        let output = {
            let mut replayer = self.replayer.lock().expect("replayer lock poisoned");
            let interaction = replayer.next_interaction("vcs", "list_tracked");
            interaction.output.clone()
        };
        extract_result(&output, "vcs::list_tracked")
    }
}
