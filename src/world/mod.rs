/*!
## Rust World Module

The grid the robot escapes from and the robot itself.

*/

mod map;
mod robot;

pub use map::corridor;
pub use map::multi_key;
pub use map::render;
pub use map::room;
pub use map::Map;
pub use robot::EscapeVia;
pub use robot::KeyRule;
pub use robot::Robot;
pub use robot::RobotState;
pub use robot::Snapshot;

use std::collections::BTreeMap;

/// Grid coordinate. `y` grows to the north.
pub type Pos = (i32, i32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Wall,
    Floor,
    Key,
    Door,
    Exit,
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Tile::*;
        match self {
            Wall => write!(f, "WALL"),
            Floor => write!(f, "FLOOR"),
            Key => write!(f, "KEY"),
            Door => write!(f, "DOOR"),
            Exit => write!(f, "EXIT"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Heading {
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    pub fn from_index(index: usize) -> Heading {
        Heading::ALL[index % 4]
    }

    pub fn delta(self) -> Pos {
        match self {
            Heading::North => (0, 1),
            Heading::East => (1, 0),
            Heading::South => (0, -1),
            Heading::West => (-1, 0),
        }
    }

    pub fn left(self) -> Heading {
        Heading::from_index(self as usize + 3)
    }

    pub fn right(self) -> Heading {
        Heading::from_index(self as usize + 1)
    }

    pub fn ahead(self, pos: Pos) -> Pos {
        let (dx, dy) = self.delta();
        (pos.0 + dx, pos.1 + dy)
    }
}

impl std::fmt::Display for Heading {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Heading::*;
        match self {
            North => write!(f, "NORTH"),
            East => write!(f, "EAST"),
            South => write!(f, "SOUTH"),
            West => write!(f, "WEST"),
        }
    }
}

/// ## Sparse tile map
///
/// Coordinates not in the map have no tile. How a missing tile reads depends
/// on the question: it blocks movement like a wall but stands in for plain
/// floor when the robot asks what it is standing on.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct World {
    tiles: BTreeMap<Pos, Tile>,
}

impl World {
    pub fn new() -> World {
        World::default()
    }

    pub fn insert(&mut self, pos: Pos, tile: Tile) -> Option<Tile> {
        self.tiles.insert(pos, tile)
    }

    pub fn get(&self, pos: Pos) -> Option<Tile> {
        self.tiles.get(&pos).copied()
    }

    /// Tile as seen when moving into `pos`. Missing tiles are walls.
    pub fn ahead(&self, pos: Pos) -> Tile {
        self.get(pos).unwrap_or(Tile::Wall)
    }

    /// Tile as seen when standing on `pos`. Missing tiles are floor.
    pub fn underfoot(&self, pos: Pos) -> Tile {
        self.get(pos).unwrap_or(Tile::Floor)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Pos, Tile)> + '_ {
        self.tiles.iter().map(|(pos, tile)| (*pos, *tile))
    }

    /// Smallest and largest corner of the occupied area.
    pub fn bounds(&self) -> Option<(Pos, Pos)> {
        let mut iter = self.tiles.keys();
        let first = *iter.next()?;
        Some(iter.fold((first, first), |(min, max), &(x, y)| {
            ((min.0.min(x), min.1.min(y)), (max.0.max(x), max.1.max(y)))
        }))
    }
}

impl std::iter::FromIterator<(Pos, Tile)> for World {
    fn from_iter<T: IntoIterator<Item = (Pos, Tile)>>(iter: T) -> Self {
        World {
            tiles: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turns_wrap() {
        assert_eq!(Heading::North.left(), Heading::West);
        assert_eq!(Heading::West.right(), Heading::North);
        assert_eq!(Heading::East.right(), Heading::South);
        assert_eq!(Heading::South.left(), Heading::East);
    }

    #[test]
    fn test_missing_tiles() {
        let world: World = vec![((0, 0), Tile::Key)].into_iter().collect();
        assert_eq!(world.ahead((5, 5)), Tile::Wall);
        assert_eq!(world.underfoot((5, 5)), Tile::Floor);
        assert_eq!(world.ahead((0, 0)), Tile::Key);
        assert_eq!(world.underfoot((0, 0)), Tile::Key);
    }

    #[test]
    fn test_bounds() {
        let world: World = vec![
            ((0, 0), Tile::Floor),
            ((5, 3), Tile::Wall),
            ((-2, -1), Tile::Floor),
        ]
        .into_iter()
        .collect();
        assert_eq!(world.bounds(), Some(((-2, -1), (5, 3))));
        assert_eq!(World::new().bounds(), None);
    }
}
