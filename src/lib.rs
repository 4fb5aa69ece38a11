//! # Vault Runner
//!
//! A robot is locked in a vault. Write it a program, at most twenty
//! distinct words long, that gets it out.
//!
//! ```
//! use vault::mach::Interpreter;
//! use vault::world::{Heading, Robot, Tile, World};
//!
//! let world: World = vec![
//!     ((0, 0), Tile::Floor),
//!     ((1, 0), Tile::Key),
//!     ((2, 0), Tile::Door),
//!     ((3, 0), Tile::Exit),
//! ]
//! .into_iter()
//! .collect();
//! let mut robot = Robot::new(world, (0, 0), Heading::East);
//! let mut interpreter = Interpreter::new(vec!["MOVE", "PICK", "MOVE", "OPEN", "MOVE"]).unwrap();
//! assert!(interpreter.run(&mut robot).unwrap());
//! assert_eq!(robot.position(), (3, 0));
//! ```
//!
//! The `vault` executable runs a program file against one of the built-in
//! worlds or a text map.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

pub mod lang;
pub mod mach;
pub mod term;
pub mod world;
