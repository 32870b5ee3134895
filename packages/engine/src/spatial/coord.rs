//! Coordinates and compass directions

use std::ops::Add;

/// Grid address or relative offset. `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Coordinate {
    type Output = Coordinate;

    #[inline]
    fn add(self, other: Coordinate) -> Coordinate {
        Coordinate::new(self.x + other.x, self.y + other.y)
    }
}

impl From<(i32, i32)> for Coordinate {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// The 8 neighbor directions. Declaration order is the resolver order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Unit offset; y grows downwards.
    #[inline]
    pub const fn offset(self) -> Coordinate {
        match self {
            Direction::North => Coordinate::new(0, -1),
            Direction::NorthEast => Coordinate::new(1, -1),
            Direction::East => Coordinate::new(1, 0),
            Direction::SouthEast => Coordinate::new(1, 1),
            Direction::South => Coordinate::new(0, 1),
            Direction::SouthWest => Coordinate::new(-1, 1),
            Direction::West => Coordinate::new(-1, 0),
            Direction::NorthWest => Coordinate::new(-1, -1),
        }
    }
}
