//! Numeric types used for cell coordinates and related quantities.

use euclid::{Point2D, Size2D, Vector2D};

/// Unit type for [`euclid`] types locked to the maze's cell grid.
///
/// One unit is one cell, regardless of how large a cell is when drawn.
#[expect(clippy::exhaustive_enums)]
#[derive(Debug, Eq, PartialEq)]
pub enum Cell {}

/// Coordinates that are locked to the cell grid.
pub type CellCoordinate = i32;

/// Positions of cells. `x` increases eastward and `y` increases northward.
pub type CellPoint = Point2D<CellCoordinate, Cell>;

/// Offsets between cells.
pub type CellVector = Vector2D<CellCoordinate, Cell>;

/// Sizes of grids, in cells.
///
/// This is signed so that a non-positive size can be reported as an error instead of being
/// unrepresentable.
pub type CellSize = Size2D<CellCoordinate, Cell>;
