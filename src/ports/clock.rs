//! Clock port for obtaining the current time.

use chrono::{DateTime, Utc};

/// Provides the current time.
///
/// Abstracting time access keeps snapshot generation deterministic under
/// replay: the `Generated:` header line is the only non-reproducible part
/// of a snapshot, and a substituted clock pins it down.
pub trait Clock: Send + Sync {
    /// Returns the current UTC time.
    fn now(&self) -> DateTime<Utc>;
}
