//! Replaying adapter for the `Clock` port.

use std::sync::Mutex;

use chrono::{DateTime, Utc};

use crate::cassette::replayer::CassetteReplayer;
use crate::ports::clock::Clock;

/// Replays recorded clock readings from a cassette.
pub struct ReplayingClock {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingClock {
    /// Creates a new replaying clock from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl Clock for ReplayingClock {
    fn now(&self) -> DateTime<Utc> {
        let output = {
            let mut replayer = self.replayer.lock().expect("replayer lock poisoned");
            let interaction = replayer.next_interaction("clock", "now");
            interaction.output.clone()
        };
        let text = output.as_str().expect("clock::now: expected string output");
        DateTime::parse_from_rfc3339(text)
            .expect("clock::now: expected RFC 3339 timestamp")
            .with_timezone(&Utc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::{Cassette, Interaction};
    use serde_json::json;

    #[test]
    fn replaying_clock_returns_recorded_time() {
        let cassette = Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            commit: "abc".into(),
            interactions: vec![Interaction {
                seq: 0,
                port: "clock".into(),
                method: "now".into(),
                input: json!({}),
                output: json!("2025-04-01T08:30:00Z"),
            }],
        };
        let clock = ReplayingClock::new(CassetteReplayer::new(&cassette));
        assert_eq!(clock.now().to_rfc3339(), "2025-04-01T08:30:00+00:00");
    }
}
