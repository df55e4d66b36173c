//! Adapter implementations of the port traits.
//!
//! `live` talks to the real world, `recording` captures live interactions
//! into cassettes, and `replaying` serves them back deterministically.

pub mod live;
pub mod recording;
pub mod replaying;
