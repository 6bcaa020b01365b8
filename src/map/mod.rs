//! Hex map: coordinates, directions, and the fixed battle grid.

pub mod direction;
pub mod grid;

pub use direction::{Coord, Direction};
pub use grid::{FloorType, HexMap, MapCell, MAP_HEIGHT, MAP_WIDTH};
