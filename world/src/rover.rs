//! Rover state and the movement policy that guards it.

use mars_rover_core::{MoveOutcome, Orientation, Position, RoverId, StatusReport};

use crate::spatial::SpatialMap;

/// Rover with a position and a facing.
///
/// The rover never owns the map it drives on; the world lends it for every
/// operation that needs it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rover {
    id: RoverId,
    position: Position,
    orientation: Orientation,
}

impl Rover {
    pub(crate) const fn new(id: RoverId, position: Position, orientation: Orientation) -> Self {
        Self {
            id,
            position,
            orientation,
        }
    }

    /// Identifier of the rover.
    #[must_use]
    pub const fn id(&self) -> RoverId {
        self.id
    }

    /// Cell currently occupied by the rover.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Current facing of the rover.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Attempts to advance one cell in the current facing.
    ///
    /// The move commits only when the next cell is inside the map and free of
    /// obstacles; otherwise the rover is left untouched.
    pub fn move_forward(&mut self, map: &SpatialMap) -> MoveOutcome {
        let from = self.position;
        let Some(next) = from.step(self.orientation) else {
            log::warn!(
                "Move blocked at {from} facing {}: coordinate space exhausted",
                self.orientation
            );
            return MoveOutcome::Blocked { position: from };
        };

        if !map.in_bounds(next.x(), next.y()) || map.has_obstacle_at(next.x(), next.y()) {
            log::warn!("Move blocked at {next} due to obstacle or boundary");
            return MoveOutcome::Blocked { position: from };
        }

        log::info!("Moving from {from} to {next}");
        self.position = next;
        MoveOutcome::Moved { from, to: next }
    }

    /// Turns a quarter counter-clockwise and returns the new facing.
    pub fn turn_left(&mut self) -> Orientation {
        self.orientation = self.orientation.turn_left();
        log::info!("Turned left. New direction: {}", self.orientation);
        self.orientation
    }

    /// Turns a quarter clockwise and returns the new facing.
    pub fn turn_right(&mut self) -> Orientation {
        self.orientation = self.orientation.turn_right();
        log::info!("Turned right. New direction: {}", self.orientation);
        self.orientation
    }

    /// Reports the rover's state, re-checking the map for an obstacle underfoot.
    #[must_use]
    pub fn status_report(&self, map: &SpatialMap) -> StatusReport {
        StatusReport {
            x: self.position.x(),
            y: self.position.y(),
            facing: self.orientation,
            obstacle_here: map.has_obstacle_at(self.position.x(), self.position.y()),
        }
    }
}
