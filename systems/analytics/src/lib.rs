#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic analytics system that folds world events into run statistics.

use mars_rover_core::{Event, RunStats};

/// Pure analytics system that counts moves, blocked moves and turns.
#[derive(Debug, Default)]
pub struct Analytics {
    stats: RunStats,
}

impl Analytics {
    /// Creates a new analytics system with zeroed counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the counters accumulated so far.
    #[must_use]
    pub fn report(&self) -> RunStats {
        self.stats
    }

    /// Consumes world events and updates the counters.
    pub fn handle(&mut self, events: &[Event]) {
        for event in events {
            match event {
                Event::RoverMoved { .. } => {
                    self.stats.moves = self.stats.moves.saturating_add(1);
                }
                Event::MoveBlocked { .. } => {
                    self.stats.blocked = self.stats.blocked.saturating_add(1);
                }
                Event::RoverTurned { .. } => {
                    self.stats.turns = self.stats.turns.saturating_add(1);
                }
            }
        }
    }
}
