#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command dispatch: instruction translation and an invoker with history.
//!
//! Instruction symbols become [`Command`] values bound to one rover. The
//! [`Invoker`] applies each command to the world and then records it, so the
//! history reflects attempted commands in execution order, including moves the
//! world refused.

use mars_rover_core::{Command, CommandKind, Event, RoverId};
use mars_rover_world::{self as world, World};

/// Translates instruction symbols into commands bound to `rover`.
///
/// Symbols other than `M`, `L` and `R` are dropped.
#[must_use]
pub fn translate(instructions: &str, rover: RoverId) -> Vec<Command> {
    instructions
        .chars()
        .filter_map(CommandKind::from_symbol)
        .map(|kind| kind.bind(rover))
        .collect()
}

/// What happened when a command was executed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The rover moved to a new cell.
    Moved,
    /// The move was refused by boundary or obstacle policy.
    Blocked,
    /// The rover turned.
    Turned,
    /// The world produced no event, typically because the command targeted
    /// a rover it does not know.
    Ignored,
}

impl CommandOutcome {
    fn from_events(events: &[Event]) -> Self {
        match events.last() {
            Some(Event::RoverMoved { .. }) => Self::Moved,
            Some(Event::MoveBlocked { .. }) => Self::Blocked,
            Some(Event::RoverTurned { .. }) => Self::Turned,
            None => Self::Ignored,
        }
    }
}

/// Single append-only history record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Command that was executed.
    pub command: Command,
    /// Outcome observed when it ran.
    pub outcome: CommandOutcome,
}

/// Applies commands in sequence and keeps their execution history.
#[derive(Debug, Default)]
pub struct Invoker {
    history: Vec<HistoryEntry>,
    scratch: Vec<Event>,
}

impl Invoker {
    /// Creates an invoker with an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes the command against the world, then appends it to the history.
    ///
    /// Events emitted by the world are forwarded to `out_events`.
    pub fn execute_command(
        &mut self,
        world: &mut World,
        command: Command,
        out_events: &mut Vec<Event>,
    ) {
        self.scratch.clear();
        world::apply(world, command, &mut self.scratch);

        let outcome = CommandOutcome::from_events(&self.scratch);
        if outcome == CommandOutcome::Ignored {
            log::warn!("{:?} produced no world events", command.kind());
        }

        self.history.push(HistoryEntry { command, outcome });
        out_events.extend(self.scratch.drain(..));
    }

    /// Executed commands in execution order.
    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Number of executed commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Reports whether no command has been executed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

/// Translates `instructions` for the world's rover and executes them in order.
pub fn run(
    world: &mut World,
    invoker: &mut Invoker,
    instructions: &str,
    out_events: &mut Vec<Event>,
) {
    let rover = world::query::rover_id(world);
    for command in translate(instructions, rover) {
        invoker.execute_command(world, command, out_events);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mars_rover_core::{Orientation, Position, Rotation};

    #[test]
    fn translate_drops_unknown_symbols() {
        let rover = RoverId::new(4);
        let commands = translate("M x L?R m", rover);

        assert_eq!(
            commands,
            vec![
                Command::MoveForward { rover },
                Command::TurnLeft { rover },
                Command::TurnRight { rover },
            ]
        );
    }

    #[test]
    fn translate_of_noise_is_empty() {
        assert!(translate("", RoverId::new(0)).is_empty());
        assert!(translate("xyz 123", RoverId::new(0)).is_empty());
    }

    #[test]
    fn outcome_follows_last_event() {
        let rover = RoverId::new(0);
        let moved = [Event::RoverMoved {
            rover,
            from: Position::new(0, 0),
            to: Position::new(0, 1),
        }];
        let blocked = [Event::MoveBlocked {
            rover,
            position: Position::new(0, 0),
            facing: Orientation::South,
        }];
        let turned = [Event::RoverTurned {
            rover,
            rotation: Rotation::Right,
            facing: Orientation::East,
        }];

        assert_eq!(CommandOutcome::from_events(&moved), CommandOutcome::Moved);
        assert_eq!(CommandOutcome::from_events(&blocked), CommandOutcome::Blocked);
        assert_eq!(CommandOutcome::from_events(&turned), CommandOutcome::Turned);
        assert_eq!(CommandOutcome::from_events(&[]), CommandOutcome::Ignored);
    }
}
