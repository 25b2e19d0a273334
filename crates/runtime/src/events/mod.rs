//! Tile triggers and fired events.
mod triggers;

pub use triggers::{FiredEvent, TriggerTable};
