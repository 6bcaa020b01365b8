//! The fixed 5x7 battle map.
//!
//! Built once from a static template: a walkable corridor down the middle
//! column that widens into the lower half, with one spawn cell at the centre
//! of each short edge. Cells store at most one occupant as a `CardId`; the
//! card itself lives in the `CardRegistry`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardId;
use crate::core::PlayerId;

use super::direction::{Coord, Direction};

/// Map width (x axis).
pub const MAP_WIDTH: u8 = 5;
/// Map height (y axis).
pub const MAP_HEIGHT: u8 = 7;

/// Floor classification of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FloorType {
    #[default]
    None,
    Walkable,
    Spawn,
}

/// A single map cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MapCell {
    pub floor: FloorType,
    occupant: Option<CardId>,
}

impl MapCell {
    #[must_use]
    pub fn occupant(&self) -> Option<CardId> {
        self.occupant
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }
}

/// Hex battle map.
///
/// ## Example
///
/// ```
/// use hex_legends::core::PlayerId;
/// use hex_legends::map::{Coord, Direction, HexMap};
///
/// let map = HexMap::new();
/// let cell = Coord::new(2, 3);
///
/// // Player 1 sees "up" as the map's down.
/// assert_eq!(map.neighbor(Direction::Up, cell, PlayerId::new(0)), Some(Coord::new(2, 2)));
/// assert_eq!(map.neighbor(Direction::Up, cell, PlayerId::new(1)), Some(Coord::new(2, 4)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexMap {
    cells: [[MapCell; MAP_WIDTH as usize]; MAP_HEIGHT as usize],
}

impl Default for HexMap {
    fn default() -> Self {
        Self::new()
    }
}

impl HexMap {
    /// Build the map from the static template.
    #[must_use]
    pub fn new() -> Self {
        let mut cells = [[MapCell::default(); MAP_WIDTH as usize]; MAP_HEIGHT as usize];
        for (y, row) in cells.iter_mut().enumerate() {
            for (x, cell) in row.iter_mut().enumerate() {
                cell.floor = template_floor(x as u8, y as u8);
            }
        }
        Self { cells }
    }

    #[must_use]
    pub const fn width(&self) -> u8 {
        MAP_WIDTH
    }

    #[must_use]
    pub const fn height(&self) -> u8 {
        MAP_HEIGHT
    }

    /// Whether (x, y) lies on the map. Accepts signed input so callers can
    /// probe off-edge cells without wrapping.
    #[must_use]
    pub fn contains(&self, x: i16, y: i16) -> bool {
        (0..i16::from(MAP_WIDTH)).contains(&x) && (0..i16::from(MAP_HEIGHT)).contains(&y)
    }

    /// Bounds-checked cell access.
    #[must_use]
    pub fn at(&self, x: u8, y: u8) -> Option<&MapCell> {
        self.cells.get(y as usize)?.get(x as usize)
    }

    fn at_mut(&mut self, coord: Coord) -> Option<&mut MapCell> {
        self.cells.get_mut(coord.y as usize)?.get_mut(coord.x as usize)
    }

    #[must_use]
    pub fn cell(&self, coord: Coord) -> Option<&MapCell> {
        self.at(coord.x, coord.y)
    }

    /// Occupant of a cell; `None` if empty or off-map.
    #[must_use]
    pub fn occupant(&self, coord: Coord) -> Option<CardId> {
        self.cell(coord).and_then(MapCell::occupant)
    }

    /// Whether the cell is on the map and has no occupant.
    #[must_use]
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.cell(coord).is_some_and(MapCell::is_empty)
    }

    /// The neighbor of `coord` in `direction` as seen by `player`.
    ///
    /// Returns `None` when the step leaves the map.
    #[must_use]
    pub fn neighbor(&self, direction: Direction, coord: Coord, player: PlayerId) -> Option<Coord> {
        let (dx, dy) = direction.for_player(player).delta();
        let x = i16::from(coord.x) + i16::from(dx);
        let y = i16::from(coord.y) + i16::from(dy);
        if !self.contains(x, y) {
            return None;
        }
        Some(Coord::new(x as u8, y as u8))
    }

    /// All in-bounds neighbors of `coord`.
    ///
    /// Ordered by the player's view of `Direction::ALL`.
    #[must_use]
    pub fn neighbors(&self, coord: Coord, player: PlayerId) -> SmallVec<[Coord; 6]> {
        Direction::ALL
            .iter()
            .filter_map(|&d| self.neighbor(d, coord, player))
            .collect()
    }

    /// Fixed spawn cell for the two seats; `None` for any other player.
    #[must_use]
    pub fn spawn_position(&self, player: PlayerId) -> Option<Coord> {
        match player.0 {
            0 => Some(Coord::new(MAP_WIDTH / 2, 0)),
            1 => Some(Coord::new(MAP_WIDTH / 2, MAP_HEIGHT - 1)),
            _ => None,
        }
    }

    /// Put `card` on an empty cell. Returns `false` if off-map or occupied.
    pub fn place(&mut self, coord: Coord, card: CardId) -> bool {
        match self.at_mut(coord) {
            Some(cell) if cell.occupant.is_none() => {
                cell.occupant = Some(card);
                true
            }
            _ => false,
        }
    }

    /// Clear a cell, returning whatever stood on it.
    pub fn take(&mut self, coord: Coord) -> Option<CardId> {
        self.at_mut(coord).and_then(|cell| cell.occupant.take())
    }

    /// Find the cell holding `card` by scanning the whole map.
    #[must_use]
    pub fn find(&self, card: CardId) -> Option<Coord> {
        self.occupied().find(|&(_, c)| c == card).map(|(coord, _)| coord)
    }

    /// Iterate over all occupied cells in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Coord, CardId)> + '_ {
        self.cells.iter().enumerate().flat_map(|(y, row)| {
            row.iter().enumerate().filter_map(move |(x, cell)| {
                cell.occupant.map(|card| (Coord::new(x as u8, y as u8), card))
            })
        })
    }

    /// Iterate over every coordinate on the map in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        (0..MAP_HEIGHT).flat_map(|y| (0..MAP_WIDTH).map(move |x| Coord::new(x, y)))
    }
}

fn template_floor(x: u8, y: u8) -> FloorType {
    let mid = MAP_WIDTH / 2;
    if x == mid && (y == 0 || y == MAP_HEIGHT - 1) {
        FloorType::Spawn
    } else if (3..MAP_HEIGHT - 1).contains(&y) || x == mid || (y == 2 && (1..MAP_WIDTH - 1).contains(&x)) {
        FloorType::Walkable
    } else {
        FloorType::None
    }
}

impl std::fmt::Display for HexMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (y, row) in self.cells.iter().enumerate() {
            // Odd rows are shifted half a cell to suggest the hex layout.
            if y % 2 == 1 {
                f.write_str(" ")?;
            }
            for cell in row {
                let glyph = match (cell.occupant, cell.floor) {
                    (Some(_), _) => '@',
                    (None, FloorType::Spawn) => 'S',
                    (None, FloorType::Walkable) => 'o',
                    (None, FloorType::None) => '.',
                };
                write!(f, "{glyph} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
