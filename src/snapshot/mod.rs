//! Snapshot assembly: deterministic concatenation of tracked files.

pub mod collect;
pub mod generator;
pub mod render;

use chrono::{DateTime, Utc};

/// One file's contribution to the snapshot document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileBlock {
    /// Path relative to the primary root, `/`-separated.
    pub path: String,
    /// Bare extension string annotating the opening fence ("" when the
    /// file has no extension). Deliberately not mapped to a language
    /// name — downstream consumers get the literal extension.
    pub language: String,
    /// Full file contents.
    pub content: String,
}

/// The assembled snapshot prior to rendering.
///
/// Blocks are sorted lexicographically ascending by relative path, a pure
/// function of the path strings. Two runs over an unchanged tree differ
/// only in `generated_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// When the snapshot was generated.
    pub generated_at: DateTime<Utc>,
    /// File blocks in path order.
    pub blocks: Vec<FileBlock>,
}
