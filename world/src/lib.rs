#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative world state management for the Mars Rover simulation.

mod rover;
mod spatial;

use mars_rover_core::{
    Command, ConstructionError, Event, MoveOutcome, Orientation, Position, Rotation, RoverId,
};

pub use rover::Rover;
pub use spatial::{MapComponent, Obstacle, SpatialMap};

/// Represents the authoritative simulation state: one map and the rover on it.
#[derive(Debug)]
pub struct World {
    map: SpatialMap,
    rover: Rover,
}

impl World {
    /// Creates a world with a rover placed on the provided map.
    ///
    /// Fails when the map has no cells or the starting cell is outside the map
    /// or occupied by an obstacle, so the rover never starts in a state that
    /// movement would have refused.
    pub fn new(
        map: SpatialMap,
        rover: RoverId,
        start: Position,
        facing: Orientation,
    ) -> Result<Self, ConstructionError> {
        if map.width() == 0 || map.height() == 0 {
            return Err(ConstructionError::EmptyGrid {
                width: map.width(),
                height: map.height(),
            });
        }
        if !map.in_bounds(start.x(), start.y()) {
            return Err(ConstructionError::StartOutOfBounds(start));
        }
        if map.has_obstacle_at(start.x(), start.y()) {
            return Err(ConstructionError::StartOnObstacle(start));
        }

        Ok(Self {
            map,
            rover: Rover::new(rover, start, facing),
        })
    }
}

/// Applies the provided command to the world, mutating state deterministically.
///
/// Commands bound to a rover the world does not know are dropped without
/// emitting events.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    let target = command.target();
    let World { map, rover } = world;
    if rover.id() != target {
        log::warn!(
            "Dropping {:?} bound to unknown rover {}",
            command.kind(),
            target.get()
        );
        return;
    }

    match command {
        Command::MoveForward { .. } => match rover.move_forward(map) {
            MoveOutcome::Moved { from, to } => out_events.push(Event::RoverMoved {
                rover: target,
                from,
                to,
            }),
            MoveOutcome::Blocked { position } => out_events.push(Event::MoveBlocked {
                rover: target,
                position,
                facing: rover.orientation(),
            }),
        },
        Command::TurnLeft { .. } => {
            let facing = rover.turn_left();
            out_events.push(Event::RoverTurned {
                rover: target,
                rotation: Rotation::Left,
                facing,
            });
        }
        Command::TurnRight { .. } => {
            let facing = rover.turn_right();
            out_events.push(Event::RoverTurned {
                rover: target,
                rotation: Rotation::Right,
                facing,
            });
        }
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use mars_rover_core::{Orientation, Position, RoverId, StatusReport};

    use super::{Rover, SpatialMap, World};

    /// Reports the rover's current state against the map.
    #[must_use]
    pub fn status_report(world: &World) -> StatusReport {
        world.rover.status_report(&world.map)
    }

    /// Provides read-only access to the spatial map.
    #[must_use]
    pub fn spatial_map(world: &World) -> &SpatialMap {
        &world.map
    }

    /// Provides read-only access to the rover.
    #[must_use]
    pub fn rover(world: &World) -> &Rover {
        &world.rover
    }

    /// Identifier of the rover commands must be bound to.
    #[must_use]
    pub fn rover_id(world: &World) -> RoverId {
        world.rover.id()
    }

    /// Cell currently occupied by the rover.
    #[must_use]
    pub fn position(world: &World) -> Position {
        world.rover.position()
    }

    /// Current facing of the rover.
    #[must_use]
    pub fn orientation(world: &World) -> Orientation {
        world.rover.orientation()
    }
}
