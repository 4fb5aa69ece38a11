use super::{Heading, Pos, Tile, World};
use crate::lang::token::Sensor;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EscapeVia {
    Exit,
    Door,
}

/// Which key tiles actually unlock the door.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRule {
    /// Every key works.
    Any,
    /// Keys elsewhere are picked up and lost; only this one works.
    Only(Pos),
}

/// Everything about the robot that a program can change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RobotState {
    pub position: Pos,
    pub heading: Heading,
    pub has_key: bool,
    pub door_opened: bool,
    pub escaped: bool,
    pub escape_via: Option<EscapeVia>,
}

impl RobotState {
    fn new(position: Pos, heading: Heading) -> RobotState {
        RobotState {
            position,
            heading,
            has_key: false,
            door_opened: false,
            escaped: false,
            escape_via: None,
        }
    }
}

/// A saved copy of the robot and its world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub state: RobotState,
    pub world: World,
}

/// ## The robot and the world it owns
///
/// All changes to the world go through the action methods here.

#[derive(Debug, Clone)]
pub struct Robot {
    state: RobotState,
    start: (Pos, Heading),
    world: World,
    original_world: World,
    key_rule: KeyRule,
    rng: StdRng,
}

impl Robot {
    pub fn new(world: World, position: Pos, heading: Heading) -> Robot {
        Robot {
            state: RobotState::new(position, heading),
            start: (position, heading),
            original_world: world.clone(),
            world,
            key_rule: KeyRule::Any,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_key_rule(mut self, key_rule: KeyRule) -> Robot {
        self.key_rule = key_rule;
        self
    }

    /// Make `RTURN` repeatable.
    pub fn with_seed(mut self, seed: u64) -> Robot {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn state(&self) -> &RobotState {
        &self.state
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn position(&self) -> Pos {
        self.state.position
    }

    pub fn heading(&self) -> Heading {
        self.state.heading
    }

    pub fn has_key(&self) -> bool {
        self.state.has_key
    }

    pub fn door_opened(&self) -> bool {
        self.state.door_opened
    }

    pub fn escaped(&self) -> bool {
        self.state.escaped
    }

    pub fn escape_via(&self) -> Option<EscapeVia> {
        self.state.escape_via
    }

    pub fn front_position(&self) -> Pos {
        self.state.heading.ahead(self.state.position)
    }

    pub fn front_clear(&self) -> bool {
        self.clear_toward(self.state.heading)
    }

    /// Would a step toward `heading` succeed.
    pub fn clear_toward(&self, heading: Heading) -> bool {
        self.world.ahead(heading.ahead(self.state.position)) != Tile::Wall
    }

    fn standing_on(&self) -> Tile {
        self.world.underfoot(self.state.position)
    }

    pub fn on_key(&self) -> bool {
        self.standing_on() == Tile::Key
    }

    pub fn at_door(&self) -> bool {
        self.standing_on() == Tile::Door
    }

    pub fn at_exit(&self) -> bool {
        self.standing_on() == Tile::Exit
    }

    pub fn sense(&self, sensor: Sensor) -> bool {
        match sensor {
            Sensor::Front => self.front_clear(),
            Sensor::Key => self.on_key(),
            Sensor::Door => self.at_door(),
            Sensor::Exit => self.at_exit(),
        }
    }

    /// Key, door and exit tiles in the 3x3 area around the robot.
    pub fn count_nearby(&self) -> usize {
        let (x, y) = self.state.position;
        let mut count = 0;
        for dx in -1..=1 {
            for dy in -1..=1 {
                if let Some(Tile::Key) | Some(Tile::Door) | Some(Tile::Exit) =
                    self.world.get((x + dx, y + dy))
                {
                    count += 1;
                }
            }
        }
        count
    }

    pub fn move_forward(&mut self) -> bool {
        if self.front_clear() {
            self.state.position = self.front_position();
            debug!(position = ?self.state.position, "moved");
            true
        } else {
            debug!(position = ?self.state.position, "blocked");
            false
        }
    }

    pub fn turn_left(&mut self) {
        self.state.heading = self.state.heading.left();
        debug!(heading = %self.state.heading, "turned left");
    }

    pub fn turn_right(&mut self) {
        self.state.heading = self.state.heading.right();
        debug!(heading = %self.state.heading, "turned right");
    }

    pub fn random_turn(&mut self) {
        if self.rng.gen_bool(0.5) {
            self.turn_left()
        } else {
            self.turn_right()
        }
    }

    pub fn pick_key(&mut self) -> bool {
        if !self.on_key() || self.state.has_key {
            debug!("nothing to pick");
            return false;
        }
        let position = self.state.position;
        self.world.insert(position, Tile::Floor);
        match self.key_rule {
            KeyRule::Only(correct) if correct != position => {
                debug!(?position, "picked a wrong key");
                false
            }
            _ => {
                self.state.has_key = true;
                debug!(?position, "picked key");
                true
            }
        }
    }

    pub fn open_door(&mut self) -> bool {
        if self.at_door() && self.state.has_key {
            self.state.door_opened = true;
            debug!("opened door");
            true
        } else {
            debug!("door stays shut");
            false
        }
    }

    /// Exit tiles always release the robot, door tiles once opened.
    pub fn check_escape(&mut self) -> bool {
        if self.at_exit() {
            self.escape(EscapeVia::Exit);
        } else if self.at_door() && self.state.door_opened {
            self.escape(EscapeVia::Door);
        }
        self.state.escaped
    }

    fn escape(&mut self, via: EscapeVia) {
        self.state.escaped = true;
        self.state.escape_via = Some(via);
        debug!(position = ?self.state.position, ?via, "escaped");
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state.clone(),
            world: self.world.clone(),
        }
    }

    pub fn restore(&mut self, snapshot: Snapshot) {
        self.state = snapshot.state;
        self.world = snapshot.world;
    }

    /// Back to the start pose in the world as it was constructed.
    pub fn reset(&mut self) {
        let (position, heading) = self.start;
        self.state = RobotState::new(position, heading);
        self.world = self.original_world.clone();
    }
}
