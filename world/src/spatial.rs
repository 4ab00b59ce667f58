//! Bounded spatial map composed of obstacle markers and nested maps.

use mars_rover_core::Position;

/// Fixed point that blocks rover movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Obstacle {
    position: Position,
}

impl Obstacle {
    /// Creates an obstacle anchored at the provided coordinate.
    #[must_use]
    pub const fn at(position: Position) -> Self {
        Self { position }
    }

    /// Coordinate occupied by the obstacle.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    fn contains(&self, x: i32, y: i32) -> bool {
        self.position.x() == x && self.position.y() == y
    }
}

/// Closed set of components that answer the obstacle containment query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MapComponent {
    /// A single obstacle marker.
    Obstacle(Obstacle),
    /// A nested map whose components are queried recursively.
    Grid(SpatialMap),
}

impl MapComponent {
    /// Reports whether the component places an obstacle at the coordinate.
    #[must_use]
    pub fn has_obstacle_at(&self, x: i32, y: i32) -> bool {
        match self {
            Self::Obstacle(obstacle) => obstacle.contains(x, y),
            Self::Grid(map) => map.has_obstacle_at(x, y),
        }
    }
}

impl From<Obstacle> for MapComponent {
    fn from(obstacle: Obstacle) -> Self {
        Self::Obstacle(obstacle)
    }
}

impl From<SpatialMap> for MapComponent {
    fn from(map: SpatialMap) -> Self {
        Self::Grid(map)
    }
}

/// Rectangular region with an ordered collection of components.
///
/// Neither query fails: coordinates outside the map simply report `false`.
/// Rejecting moves is the rover's responsibility.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpatialMap {
    width: u32,
    height: u32,
    components: Vec<MapComponent>,
}

impl SpatialMap {
    /// Creates an empty map with the provided dimensions.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            components: Vec::new(),
        }
    }

    /// Number of columns covered by the map.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows covered by the map.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Components in insertion order.
    #[must_use]
    pub fn components(&self) -> &[MapComponent] {
        &self.components
    }

    /// Appends a component. Duplicates are kept.
    pub fn add_component(&mut self, component: impl Into<MapComponent>) {
        self.components.push(component.into());
    }

    /// Reports whether `0 <= x < width` and `0 <= y < height`.
    #[must_use]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        let within = |value: i32, limit: u32| u32::try_from(value).is_ok_and(|value| value < limit);
        within(x, self.width) && within(y, self.height)
    }

    /// Reports whether any contained component places an obstacle at the coordinate.
    #[must_use]
    pub fn has_obstacle_at(&self, x: i32, y: i32) -> bool {
        self.components
            .iter()
            .any(|component| component.has_obstacle_at(x, y))
    }

    /// Counts obstacle markers, descending into nested maps.
    #[must_use]
    pub fn obstacle_count(&self) -> usize {
        self.components
            .iter()
            .map(|component| match component {
                MapComponent::Obstacle(_) => 1,
                MapComponent::Grid(map) => map.obstacle_count(),
            })
            .sum()
    }
}
