//! Recording adapter for the `TrackedFileLister` port.

use std::path::Path;
use std::sync::{Arc, Mutex};

use serde::Serialize;

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::TrackedFileLister;

/// Records tracked-file listings while delegating to an inner implementation.
pub struct RecordingLister {
    inner: Box<dyn TrackedFileLister>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingLister {
    /// Creates a new recording lister wrapping the given implementation.
    pub fn new(inner: Box<dyn TrackedFileLister>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct RootInput<'a> {
    root: &'a str,
}

impl TrackedFileLister for RecordingLister {
    fn list_tracked(
        &self,
        root: &Path,
    ) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>> {
        let result = self.inner.list_tracked(root);
        let input = RootInput { root: &root.display().to_string() };
        record_result(&self.recorder, "vcs", "list_tracked", &input, &result);
        result
    }
}
