use super::{Heading, Pos, Robot, Tile, World};
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Text maps
///
/// One character per cell. The last row is `y = 0` and rows above it count
/// up; the first column is `x = 0`.
///
/// ```text
/// #####
/// #.KDE
/// #>..#
/// #####
/// ```
///
/// `#` wall, `.` floor, `K` key, `D` door, `E` exit, and a space for no tile.
/// One of `^ > v <` places the robot, facing that way, on a floor tile.

#[derive(Debug, Clone, PartialEq)]
pub struct Map {
    pub world: World,
    pub start: Option<(Pos, Heading)>,
}

fn tile_char(tile: Tile) -> char {
    match tile {
        Tile::Wall => '#',
        Tile::Floor => '.',
        Tile::Key => 'K',
        Tile::Door => 'D',
        Tile::Exit => 'E',
    }
}

fn robot_char(heading: Heading) -> char {
    match heading {
        Heading::North => '^',
        Heading::East => '>',
        Heading::South => 'v',
        Heading::West => '<',
    }
}

enum Cell {
    Empty,
    Tile(Tile),
    Robot(Heading),
}

fn parse_cell(ch: char) -> Option<Cell> {
    Some(match ch {
        ' ' => Cell::Empty,
        '#' => Cell::Tile(Tile::Wall),
        '.' => Cell::Tile(Tile::Floor),
        'K' | 'k' => Cell::Tile(Tile::Key),
        'D' | 'd' => Cell::Tile(Tile::Door),
        'E' | 'e' => Cell::Tile(Tile::Exit),
        '^' => Cell::Robot(Heading::North),
        '>' => Cell::Robot(Heading::East),
        'v' | 'V' => Cell::Robot(Heading::South),
        '<' => Cell::Robot(Heading::West),
        _ => return None,
    })
}

impl std::str::FromStr for Map {
    type Err = Error;

    fn from_str(s: &str) -> Result<Map> {
        let lines: Vec<(usize, &str)> = s
            .lines()
            .enumerate()
            .skip_while(|(_, l)| l.trim().is_empty())
            .collect();
        let rows = match lines.iter().rposition(|(_, l)| !l.trim().is_empty()) {
            Some(last) => &lines[..=last],
            None => return Err(error!(InvalidMap; "EMPTY MAP")),
        };
        let top = rows.len() as i32 - 1;
        let mut world = World::new();
        let mut start = None;
        for (row, (index, line)) in rows.iter().enumerate() {
            let y = top - row as i32;
            for (x, ch) in line.trim_end().chars().enumerate() {
                let pos = (x as i32, y);
                match parse_cell(ch) {
                    Some(Cell::Empty) => {}
                    Some(Cell::Tile(tile)) => {
                        world.insert(pos, tile);
                    }
                    Some(Cell::Robot(heading)) => {
                        if start.is_some() {
                            return Err(error!(InvalidMap, Some(index + 1); "MORE THAN ONE ROBOT"));
                        }
                        start = Some((pos, heading));
                        world.insert(pos, Tile::Floor);
                    }
                    None => {
                        return Err(error!(InvalidMap, Some(index + 1); format!(
                            "UNKNOWN CELL '{}'",
                            ch
                        )))
                    }
                }
            }
        }
        Ok(Map { world, start })
    }
}

/// Draw the robot's world in the text map format, robot included.
pub fn render(robot: &Robot) -> String {
    let world = robot.world();
    let position = robot.position();
    let ((min_x, min_y), (max_x, max_y)) = match world.bounds() {
        Some(((min_x, min_y), (max_x, max_y))) => (
            (min_x.min(position.0), min_y.min(position.1)),
            (max_x.max(position.0), max_y.max(position.1)),
        ),
        None => (position, position),
    };
    let mut s = String::new();
    for y in (min_y..=max_y).rev() {
        let mut row = String::new();
        for x in min_x..=max_x {
            if (x, y) == position {
                row.push(robot_char(robot.heading()));
            } else {
                row.push(world.get((x, y)).map_or(' ', tile_char));
            }
        }
        s.push_str(row.trim_end());
        s.push('\n');
    }
    s
}

fn walled_room(width: i32, height: i32) -> World {
    let mut world = World::new();
    for x in 0..width {
        for y in 0..height {
            world.insert((x, y), Tile::Floor);
        }
    }
    for x in -1..=width {
        world.insert((x, -1), Tile::Wall);
        world.insert((x, height), Tile::Wall);
    }
    for y in -1..=height {
        world.insert((-1, y), Tile::Wall);
        world.insert((width, y), Tile::Wall);
    }
    world
}

/// A corridor east from the origin that turns north through a door.
/// Start at `(0, 0)` facing east.
pub fn corridor() -> World {
    let mut world = World::new();
    for x in 0..5 {
        world.insert((x, 0), Tile::Floor);
        world.insert((x, 1), Tile::Wall);
    }
    for x in -1..6 {
        world.insert((x, -1), Tile::Wall);
    }
    world.insert((5, 0), Tile::Key);
    world.insert((5, 1), Tile::Floor);
    world.insert((5, 2), Tile::Door);
    world.insert((5, 3), Tile::Floor);
    world.insert((5, 4), Tile::Exit);
    for y in 1..5 {
        world.insert((4, y), Tile::Wall);
        world.insert((6, y), Tile::Wall);
    }
    for &pos in &[(-1, 0), (-1, 1), (6, 0), (4, 5), (5, 5), (6, 5)] {
        world.insert(pos, Tile::Wall);
    }
    world
}

/// A walled 6x4 room with a key, a door and an exit.
pub fn room() -> World {
    let mut world = walled_room(6, 4);
    world.insert((4, 2), Tile::Key);
    world.insert((5, 1), Tile::Door);
    world.insert((2, 3), Tile::Exit);
    world
}

/// A walled 8x6 room holding three keys. Only the returned position holds
/// the key that works, see [`KeyRule::Only`](super::KeyRule::Only).
pub fn multi_key() -> (World, Pos) {
    let mut world = walled_room(8, 6);
    world.insert((1, 1), Tile::Key);
    world.insert((3, 4), Tile::Key);
    world.insert((6, 2), Tile::Key);
    world.insert((7, 4), Tile::Door);
    world.insert((4, 5), Tile::Exit);
    (world, (6, 2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_parse() {
        let map: Map = "\n#####\n#.KDE\n#>..#\n#####\n".parse().unwrap();
        assert_eq!(map.start, Some(((1, 1), Heading::East)));
        assert_eq!(map.world.get((0, 0)), Some(Tile::Wall));
        assert_eq!(map.world.get((1, 1)), Some(Tile::Floor));
        assert_eq!(map.world.get((2, 2)), Some(Tile::Key));
        assert_eq!(map.world.get((3, 2)), Some(Tile::Door));
        assert_eq!(map.world.get((4, 2)), Some(Tile::Exit));
        assert_eq!(map.world.get((4, 3)), Some(Tile::Wall));
        assert_eq!(map.world.get((5, 2)), None);
    }

    #[test]
    fn test_spaces_are_missing_tiles() {
        let map: Map = ". .".parse().unwrap();
        assert_eq!(map.world.len(), 2);
        assert_eq!(map.world.get((1, 0)), None);
        assert_eq!(map.start, None);
    }

    #[test]
    fn test_bad_maps() {
        let err = "#.\n#?".parse::<Map>().unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidMap);
        assert_eq!(err.line_number(), Some(2));
        let err = "><".parse::<Map>().unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidMap);
        let err = "  \n".parse::<Map>().unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidMap);
    }

    #[test]
    fn test_render_matches_parse() {
        let text = "#####\n#.KDE\n#>..#\n#####\n";
        let map: Map = text.parse().unwrap();
        let (pos, heading) = map.start.unwrap();
        let robot = Robot::new(map.world, pos, heading);
        assert_eq!(render(&robot), text);
    }

    #[test]
    fn test_presets() {
        let world = corridor();
        assert_eq!(world.get((5, 0)), Some(Tile::Key));
        assert_eq!(world.get((5, 4)), Some(Tile::Exit));
        let world = room();
        assert_eq!(world.bounds(), Some(((-1, -1), (6, 4))));
        let (world, key) = multi_key();
        assert_eq!(world.get(key), Some(Tile::Key));
        assert_eq!(world.iter().filter(|(_, t)| *t == Tile::Key).count(), 3);
    }
}
