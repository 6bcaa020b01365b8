//! Hex directions and grid coordinates.
//!
//! ## Geometry
//!
//! The grid uses axial hex coordinates: each of the six directions moves by a
//! fixed `(dx, dy)` and opposite directions move by negated offsets.
//!
//! ```text
//!            UP (0,-1)
//! TOP_LEFT (-1,0)   TOP_RIGHT (1,-1)
//! BOTTOM_LEFT (-1,1) BOTTOM_RIGHT (1,0)
//!            DOWN (0,1)
//! ```
//!
//! ## Per-player view
//!
//! Player 1 sits on the far edge, so every direction they name is first
//! flipped through [`Direction::inverted`] (UP/DOWN, TOP_RIGHT/BOTTOM_RIGHT,
//! TOP_LEFT/BOTTOM_LEFT). Effects written as "the cell in front of me" work
//! for both sides without branching.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// A cell coordinate on the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: u8,
    pub y: u8,
}

impl Coord {
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Step by a signed offset. `None` if either axis underflows or overflows.
    #[must_use]
    pub fn offset(self, dx: i8, dy: i8) -> Option<Coord> {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        Some(Coord::new(x, y))
    }

    /// Hex distance between two cells in axial coordinates.
    #[must_use]
    pub fn distance(self, other: Coord) -> u8 {
        let dx = i16::from(other.x) - i16::from(self.x);
        let dy = i16::from(other.y) - i16::from(self.y);
        ((dx.abs() + dy.abs() + (dx + dy).abs()) / 2) as u8
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the six hex directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Up = 0,
    TopRight = 1,
    BottomRight = 2,
    Down = 3,
    BottomLeft = 4,
    TopLeft = 5,
}

impl Direction {
    /// All six directions, clockwise from `Up`.
    pub const ALL: [Direction; 6] = [
        Direction::Up,
        Direction::TopRight,
        Direction::BottomRight,
        Direction::Down,
        Direction::BottomLeft,
        Direction::TopLeft,
    ];

    /// `(dx, dy)` step for this direction.
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::TopRight => (1, -1),
            Direction::BottomRight => (1, 0),
            Direction::Down => (0, 1),
            Direction::BottomLeft => (-1, 1),
            Direction::TopLeft => (-1, 0),
        }
    }

    /// The direction as seen from the far side of the board.
    #[must_use]
    pub const fn inverted(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::TopRight => Direction::BottomRight,
            Direction::BottomRight => Direction::TopRight,
            Direction::TopLeft => Direction::BottomLeft,
            Direction::BottomLeft => Direction::TopLeft,
        }
    }

    /// The geometrically opposite direction: stepping `d` then `d.opposite()`
    /// returns to the starting cell.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::TopRight => Direction::BottomLeft,
            Direction::BottomLeft => Direction::TopRight,
            Direction::BottomRight => Direction::TopLeft,
            Direction::TopLeft => Direction::BottomRight,
        }
    }

    /// Map a player-relative direction to an absolute one.
    #[must_use]
    pub const fn for_player(self, player: PlayerId) -> Self {
        if player.is_inverted() {
            self.inverted()
        } else {
            self
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::TopRight => "top right",
            Direction::BottomRight => "bottom right",
            Direction::Down => "down",
            Direction::BottomLeft => "bottom left",
            Direction::TopLeft => "top left",
        };
        f.write_str(name)
    }
}
