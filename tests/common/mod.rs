#![allow(dead_code)]

use vault::lang::Dialect;
use vault::mach::{Halt, Interpreter, Options};
use vault::world::{Heading, Map, Robot, Tile, World};

/// Floor, key, door and exit in a row, west to east.
pub fn key_door_exit() -> World {
    vec![
        ((0, 0), Tile::Floor),
        ((1, 0), Tile::Key),
        ((2, 0), Tile::Door),
        ((3, 0), Tile::Exit),
    ]
    .into_iter()
    .collect()
}

pub fn line_robot() -> Robot {
    Robot::new(key_door_exit(), (0, 0), Heading::East)
}

pub fn map_robot(map: &str) -> Robot {
    let map: Map = map.parse().unwrap();
    let (position, heading) = map.start.unwrap();
    Robot::new(map.world, position, heading)
}

/// Instructions separated by `/`.
pub fn interpreter(src: &str) -> Interpreter {
    Interpreter::new(src.split('/')).unwrap()
}

pub fn extended(src: &str) -> Interpreter {
    let options = Options {
        dialect: Dialect::Extended,
        ..Options::default()
    };
    Interpreter::with_options(src.split('/'), options).unwrap()
}

pub fn exec(interpreter: &mut Interpreter, robot: &mut Robot) -> Halt {
    interpreter.execute(robot).unwrap()
}
