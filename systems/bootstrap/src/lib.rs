#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure bootstrap system that validates construction inputs into a world.

use mars_rover_core::{ConstructionError, Orientation, Position, RoverId};
use mars_rover_world::{Obstacle, SpatialMap, World};
use serde::{Deserialize, Serialize};

/// Identifier assigned to the single rover of a scenario.
pub const PRIMARY_ROVER: RoverId = RoverId::new(0);

/// Construction-time inputs describing a simulation run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Number of grid columns.
    pub width: u32,
    /// Number of grid rows.
    pub height: u32,
    /// Starting column of the rover.
    pub start_x: i32,
    /// Starting row of the rover.
    pub start_y: i32,
    /// Starting facing label: one of `N`, `S`, `E`, `W`.
    pub facing: char,
    /// Obstacle coordinates in declaration order.
    #[serde(default)]
    pub obstacles: Vec<Position>,
}

impl Scenario {
    /// The demonstration scenario: a 10x10 grid with two obstacles.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            width: 10,
            height: 10,
            start_x: 0,
            start_y: 0,
            facing: 'N',
            obstacles: vec![Position::new(2, 2), Position::new(3, 5)],
        }
    }

    /// Parses the starting facing.
    pub fn orientation(&self) -> Result<Orientation, ConstructionError> {
        Orientation::from_symbol(self.facing)
    }

    /// Builds the spatial map with one obstacle component per declared coordinate.
    #[must_use]
    pub fn spatial_map(&self) -> SpatialMap {
        let mut map = SpatialMap::new(self.width, self.height);
        for &obstacle in &self.obstacles {
            map.add_component(Obstacle::at(obstacle));
        }
        map
    }

    /// Validates the inputs and builds the world.
    ///
    /// The facing is checked first, so an invalid facing is reported even
    /// when the placement is also invalid.
    pub fn build(&self) -> Result<World, ConstructionError> {
        let facing = self.orientation()?;
        World::new(
            self.spatial_map(),
            PRIMARY_ROVER,
            Position::new(self.start_x, self.start_y),
            facing,
        )
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self::demo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mars_rover_world::query;

    #[test]
    fn demo_scenario_builds() {
        let world = Scenario::demo().build().expect("demo scenario is valid");

        assert_eq!(query::rover_id(&world), PRIMARY_ROVER);
        assert_eq!(query::position(&world), Position::new(0, 0));
        assert_eq!(query::orientation(&world), Orientation::North);
        assert!(query::spatial_map(&world).has_obstacle_at(2, 2));
        assert!(query::spatial_map(&world).has_obstacle_at(3, 5));
        assert_eq!(query::spatial_map(&world).obstacle_count(), 2);
    }

    #[test]
    fn default_scenario_is_the_demo() {
        assert_eq!(Scenario::default(), Scenario::demo());
    }

    #[test]
    fn invalid_facing_is_fatal() {
        let scenario = Scenario {
            facing: 'Q',
            ..Scenario::demo()
        };

        assert_eq!(
            scenario.build().err(),
            Some(ConstructionError::InvalidFacing('Q'))
        );
    }

    #[test]
    fn invalid_facing_wins_over_invalid_placement() {
        let scenario = Scenario {
            facing: 'x',
            start_x: -1,
            ..Scenario::demo()
        };

        assert_eq!(
            scenario.build().err(),
            Some(ConstructionError::InvalidFacing('x'))
        );
    }

    #[test]
    fn placement_errors_surface_from_world() {
        let on_obstacle = Scenario {
            start_x: 2,
            start_y: 2,
            ..Scenario::demo()
        };
        assert_eq!(
            on_obstacle.build().err(),
            Some(ConstructionError::StartOnObstacle(Position::new(2, 2)))
        );

        let empty = Scenario {
            width: 0,
            ..Scenario::demo()
        };
        assert!(matches!(
            empty.build(),
            Err(ConstructionError::EmptyGrid { width: 0, .. })
        ));
    }

    #[test]
    fn scenario_deserialises_without_obstacles() {
        let scenario: Scenario = serde_json::from_str(
            r#"{"width":3,"height":4,"start_x":1,"start_y":2,"facing":"E"}"#,
        )
        .expect("scenario parses");

        assert!(scenario.obstacles.is_empty());
        let world = scenario.build().expect("scenario is valid");
        assert_eq!(query::orientation(&world), Orientation::East);
    }
}
