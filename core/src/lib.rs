#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Mars Rover simulation.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters translate instruction
//! symbols into [`Command`] values bound to a rover, the world executes those
//! commands via its `apply` entry point, and then broadcasts [`Event`] values
//! that systems fold into history and statistics.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Compass facing of a rover.
///
/// Turning is total: every variant has exactly one left and one right
/// successor, and turning left then right restores the original facing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Facing toward increasing `y`.
    North,
    /// Facing toward decreasing `y`.
    South,
    /// Facing toward increasing `x`.
    East,
    /// Facing toward decreasing `x`.
    West,
}

impl Orientation {
    /// All orientations in label order.
    pub const ALL: [Orientation; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// Parses a starting facing from its single-character label.
    pub fn from_symbol(symbol: char) -> Result<Self, ConstructionError> {
        match symbol {
            'N' => Ok(Self::North),
            'S' => Ok(Self::South),
            'E' => Ok(Self::East),
            'W' => Ok(Self::West),
            other => Err(ConstructionError::InvalidFacing(other)),
        }
    }

    /// Orientation reached by rotating a quarter turn counter-clockwise.
    #[must_use]
    pub const fn turn_left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::South => Self::East,
            Self::East => Self::North,
            Self::West => Self::South,
        }
    }

    /// Orientation reached by rotating a quarter turn clockwise.
    #[must_use]
    pub const fn turn_right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::South => Self::West,
            Self::East => Self::South,
            Self::West => Self::North,
        }
    }

    /// Unit vector covered by one forward step.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::North => (0, 1),
            Self::South => (0, -1),
            Self::East => (1, 0),
            Self::West => (-1, 0),
        }
    }

    /// Single-character label of the orientation.
    #[must_use]
    pub const fn label(self) -> char {
        match self {
            Self::North => 'N',
            Self::South => 'S',
            Self::East => 'E',
            Self::West => 'W',
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Direction of a quarter turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rotation {
    /// Counter-clockwise quarter turn.
    Left,
    /// Clockwise quarter turn.
    Right,
}

/// Integer grid coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    x: i32,
    y: i32,
}

impl Position {
    /// Creates a new coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Horizontal component.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Vertical component.
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Coordinate one forward step away when facing `orientation`.
    ///
    /// Returns `None` when the step would leave the representable coordinate
    /// space.
    #[must_use]
    pub fn step(self, orientation: Orientation) -> Option<Self> {
        let (dx, dy) = orientation.delta();
        Some(Self::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Unique identifier assigned to a rover.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoverId(u32);

impl RoverId {
    /// Creates a new rover identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Instruction families understood by the rover, independent of any target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommandKind {
    /// Advance one cell in the current facing.
    MoveForward,
    /// Quarter turn counter-clockwise.
    TurnLeft,
    /// Quarter turn clockwise.
    TurnRight,
}

impl CommandKind {
    /// Maps an instruction symbol onto a command kind.
    ///
    /// Unknown symbols yield `None`; callers drop them.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'M' => Some(Self::MoveForward),
            'L' => Some(Self::TurnLeft),
            'R' => Some(Self::TurnRight),
            _ => None,
        }
    }

    /// Instruction symbol that produces this kind.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::MoveForward => 'M',
            Self::TurnLeft => 'L',
            Self::TurnRight => 'R',
        }
    }

    /// Binds the kind to a specific rover.
    #[must_use]
    pub const fn bind(self, rover: RoverId) -> Command {
        match self {
            Self::MoveForward => Command::MoveForward { rover },
            Self::TurnLeft => Command::TurnLeft { rover },
            Self::TurnRight => Command::TurnRight { rover },
        }
    }
}

/// Commands that express all permissible world mutations.
///
/// Every command is bound to the rover it targets when it is constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Requests that the rover advance one cell in its current facing.
    MoveForward {
        /// Rover the command is bound to.
        rover: RoverId,
    },
    /// Requests that the rover turn a quarter counter-clockwise.
    TurnLeft {
        /// Rover the command is bound to.
        rover: RoverId,
    },
    /// Requests that the rover turn a quarter clockwise.
    TurnRight {
        /// Rover the command is bound to.
        rover: RoverId,
    },
}

impl Command {
    /// Rover targeted by the command.
    #[must_use]
    pub const fn target(&self) -> RoverId {
        match *self {
            Self::MoveForward { rover } | Self::TurnLeft { rover } | Self::TurnRight { rover } => {
                rover
            }
        }
    }

    /// Kind of instruction carried by the command.
    #[must_use]
    pub const fn kind(&self) -> CommandKind {
        match self {
            Self::MoveForward { .. } => CommandKind::MoveForward,
            Self::TurnLeft { .. } => CommandKind::TurnLeft,
            Self::TurnRight { .. } => CommandKind::TurnRight,
        }
    }
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// Confirms that a rover moved between two cells.
    RoverMoved {
        /// Rover that advanced.
        rover: RoverId,
        /// Cell occupied before the move.
        from: Position,
        /// Cell occupied after the move.
        to: Position,
    },
    /// Reports that a move was rejected by boundary or obstacle policy.
    MoveBlocked {
        /// Rover whose move was rejected.
        rover: RoverId,
        /// Cell the rover still occupies.
        position: Position,
        /// Facing of the rejected move.
        facing: Orientation,
    },
    /// Confirms that a rover turned.
    RoverTurned {
        /// Rover that turned.
        rover: RoverId,
        /// Rotation that was applied.
        rotation: Rotation,
        /// Facing after the turn.
        facing: Orientation,
    },
}

/// Result of a single forward move attempt.
///
/// Boundary and obstacle rejections are deliberately reported the same way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The move was committed.
    Moved {
        /// Cell occupied before the move.
        from: Position,
        /// Cell occupied after the move.
        to: Position,
    },
    /// The move was rejected and the rover did not change state.
    Blocked {
        /// Cell the rover still occupies.
        position: Position,
    },
}

impl MoveOutcome {
    /// Reports whether the move was rejected.
    #[must_use]
    pub const fn is_blocked(&self) -> bool {
        matches!(self, Self::Blocked { .. })
    }
}

/// Read-only summary of a rover's state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    /// Horizontal coordinate of the rover.
    pub x: i32,
    /// Vertical coordinate of the rover.
    pub y: i32,
    /// Current facing.
    pub facing: Orientation,
    /// Whether an obstacle shares the rover's cell.
    pub obstacle_here: bool,
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let obstacles = if self.obstacle_here {
            "Obstacle detected."
        } else {
            "No obstacles detected."
        };
        write!(
            f,
            "Rover is at ({}, {}) facing {}. {obstacles}",
            self.x, self.y, self.facing
        )
    }
}

/// Counters describing what happened during a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    /// Number of committed moves.
    pub moves: u32,
    /// Number of rejected moves.
    pub blocked: u32,
    /// Number of turns.
    pub turns: u32,
}

impl RunStats {
    /// Total number of commands represented by the counters.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.moves
            .saturating_add(self.blocked)
            .saturating_add(self.turns)
    }
}

/// Reasons a simulation refuses to be constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConstructionError {
    /// The starting facing is not one of `N`, `S`, `E`, `W`.
    #[error("invalid start direction '{0}', expected one of N, S, E, W")]
    InvalidFacing(char),
    /// The grid has no cells.
    #[error("grid must have positive dimensions, got {width}x{height}")]
    EmptyGrid {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// The starting position lies outside the grid.
    #[error("start position {0} lies outside the grid")]
    StartOutOfBounds(Position),
    /// The starting position coincides with an obstacle.
    #[error("start position {0} is occupied by an obstacle")]
    StartOnObstacle(Position),
}
