//! Cardinal directions on the cave grid.

use std::fmt;
use wumpus_core::Cell;

/// Cardinal direction of a single-cell move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// One cell east (x + 1).
    East,
    /// One cell west (x - 1).
    West,
    /// One cell north (y + 1).
    North,
    /// One cell south (y - 1).
    South,
}

impl Direction {
    /// All directions in neighbour-enumeration order.
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::West,
        Direction::North,
        Direction::South,
    ];

    /// Returns the `(dx, dy)` offset for this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::North => (0, 1),
            Direction::South => (0, -1),
        }
    }

    /// The cell one step from `cell` in this direction, unclipped.
    pub fn step(self, cell: Cell) -> Cell {
        let (dx, dy) = self.offset();
        cell.offset(dx, dy)
    }

    /// Map a WASD key to a direction, ignoring case.
    ///
    /// `w` is north, `s` south, `a` west and `d` east.
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'w' => Some(Direction::North),
            's' => Some(Direction::South),
            'a' => Some(Direction::West),
            'd' => Some(Direction::East),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::East => "east",
            Direction::West => "west",
            Direction::North => "north",
            Direction::South => "south",
        };
        f.write_str(name)
    }
}
