use mars_rover_core::{Command, CommandKind, Event, Orientation, Position, RoverId};
use mars_rover_world::{self as world, query, Obstacle, SpatialMap, World};
use proptest::prelude::*;

const ROVER: RoverId = RoverId::new(0);

fn arb_orientation() -> impl Strategy<Value = Orientation> {
    prop::sample::select(Orientation::ALL.to_vec())
}

fn world_on(map: SpatialMap, x: i32, y: i32, facing: Orientation) -> World {
    World::new(map, ROVER, Position::new(x, y), facing).expect("valid placement")
}

fn run(world: &mut World, instructions: &str) -> Vec<Event> {
    let mut events = Vec::new();
    for kind in instructions.chars().filter_map(CommandKind::from_symbol) {
        world::apply(world, kind.bind(ROVER), &mut events);
    }
    events
}

proptest! {
    #[test]
    fn clear_move_advances_by_delta(
        width in 1u32..20,
        height in 1u32..20,
        x in 0i32..20,
        y in 0i32..20,
        facing in arb_orientation(),
    ) {
        let x = x % width as i32;
        let y = y % height as i32;
        let mut world = world_on(SpatialMap::new(width, height), x, y, facing);
        let (dx, dy) = facing.delta();
        let next = Position::new(x + dx, y + dy);

        let _ = run(&mut world, "M");

        let expected = if query::spatial_map(&world).in_bounds(next.x(), next.y()) {
            next
        } else {
            Position::new(x, y)
        };
        prop_assert_eq!(query::position(&world), expected);
        prop_assert_eq!(query::orientation(&world), facing);
    }

    #[test]
    fn obstacle_ahead_blocks_move(
        x in 1i32..8,
        y in 1i32..8,
        facing in arb_orientation(),
    ) {
        let (dx, dy) = facing.delta();
        let mut map = SpatialMap::new(10, 10);
        map.add_component(Obstacle::at(Position::new(x + dx, y + dy)));
        let mut world = world_on(map, x, y, facing);

        let events = run(&mut world, "M");

        prop_assert_eq!(query::position(&world), Position::new(x, y));
        prop_assert_eq!(query::orientation(&world), facing);
        let blocked = matches!(events.as_slice(), [Event::MoveBlocked { .. }]);
        prop_assert!(blocked);
    }
}

#[test]
fn demo_instructions_follow_expected_trace() {
    let mut map = SpatialMap::new(10, 10);
    map.add_component(Obstacle::at(Position::new(2, 2)));
    map.add_component(Obstacle::at(Position::new(3, 5)));
    let mut world = world_on(map, 0, 0, Orientation::North);

    let events = run(&mut world, "MMRMLM");

    let positions: Vec<Position> = events
        .iter()
        .filter_map(|event| match event {
            Event::RoverMoved { to, .. } => Some(*to),
            _ => None,
        })
        .collect();
    assert_eq!(
        positions,
        vec![
            Position::new(0, 1),
            Position::new(0, 2),
            Position::new(1, 2),
            Position::new(1, 3),
        ]
    );

    let report = query::status_report(&world);
    assert_eq!((report.x, report.y), (1, 3));
    assert_eq!(report.facing, Orientation::North);
    assert!(!report.obstacle_here);
}

#[test]
fn single_cell_grid_blocks_every_move() {
    let mut world = world_on(SpatialMap::new(1, 1), 0, 0, Orientation::North);

    let events = run(&mut world, "MRMRMRM");

    let blocked = events
        .iter()
        .filter(|event| matches!(event, Event::MoveBlocked { .. }))
        .count();
    assert_eq!(blocked, 4);
    assert_eq!(query::position(&world), Position::new(0, 0));
    assert_eq!(query::orientation(&world), Orientation::West);
}

#[test]
fn obstacle_directly_north_blocks_first_move() {
    let mut map = SpatialMap::new(5, 5);
    map.add_component(Obstacle::at(Position::new(0, 1)));
    let mut world = world_on(map, 0, 0, Orientation::North);

    let events = run(&mut world, "M");

    assert_eq!(
        events,
        vec![Event::MoveBlocked {
            rover: ROVER,
            position: Position::new(0, 0),
            facing: Orientation::North,
        }]
    );
    assert_eq!(query::position(&world), Position::new(0, 0));
}

#[test]
fn rover_can_drive_around_an_obstacle() {
    let mut map = SpatialMap::new(4, 4);
    map.add_component(Obstacle::at(Position::new(1, 1)));
    let mut world = world_on(map, 1, 0, Orientation::North);

    let _ = run(&mut world, "MRMLMML");

    assert_eq!(query::position(&world), Position::new(2, 2));
    assert_eq!(query::orientation(&world), Orientation::West);
    assert!(!query::status_report(&world).obstacle_here);
}

#[test]
fn commands_bound_elsewhere_leave_world_untouched() {
    let mut world = world_on(SpatialMap::new(3, 3), 1, 1, Orientation::South);
    let mut events = Vec::new();

    world::apply(
        &mut world,
        Command::MoveForward {
            rover: RoverId::new(3),
        },
        &mut events,
    );

    assert!(events.is_empty());
    assert_eq!(query::position(&world), Position::new(1, 1));
}
