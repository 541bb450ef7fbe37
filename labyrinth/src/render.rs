//! Text drawing of a [`MazeGrid`], for tests and debugging.

use alloc::string::String;
use core::fmt;

use crate::math::{CellPoint, Direction};
use crate::MazeGrid;

/// Draws the maze as text, with north at the top.
///
/// Each cell is three characters wide, with `+` at the corners, `---` for closed north or
/// south walls, and `|` for closed east or west walls. If `highlight` is a cell of the grid,
/// it is marked with `@`. Every line, including the last, ends with `\n`.
///
/// ```
/// use labyrinth::{MazeGrid, render};
/// use labyrinth::math::{CellPoint, CellSize};
///
/// let grid = MazeGrid::new(CellSize::new(2, 1))?;
/// assert_eq!(
///     render(&grid, Some(CellPoint::new(1, 0))),
///     "+---+---+\n\
///      |   | @ |\n\
///      +---+---+\n",
/// );
/// # Ok::<(), labyrinth::MazeError>(())
/// ```
#[allow(clippy::missing_inline_in_public_items)]
#[must_use]
pub fn render(grid: &MazeGrid, highlight: Option<CellPoint>) -> String {
    let mut output = String::new();
    // Writing to a String cannot fail.
    let _ = write_maze(&mut output, grid, highlight);
    output
}

fn write_maze(
    f: &mut dyn fmt::Write,
    grid: &MazeGrid,
    highlight: Option<CellPoint>,
) -> fmt::Result {
    let width = grid.width();
    for y in (0..grid.height()).rev() {
        write_wall_line(f, grid, y, Direction::North)?;
        for x in 0..width {
            let openings = grid.get(CellPoint::new(x, y)).map_err(|_| fmt::Error)?;
            f.write_char(if openings.is_open(Direction::West) { ' ' } else { '|' })?;
            f.write_str(if highlight == Some(CellPoint::new(x, y)) {
                " @ "
            } else {
                "   "
            })?;
            if x == width - 1 {
                f.write_char(if openings.is_open(Direction::East) { ' ' } else { '|' })?;
            }
        }
        f.write_char('\n')?;
    }
    write_wall_line(f, grid, 0, Direction::South)
}

/// Writes the horizontal walls on the `side` (north or south) of row `y`.
fn write_wall_line(
    f: &mut dyn fmt::Write,
    grid: &MazeGrid,
    y: i32,
    side: Direction,
) -> fmt::Result {
    f.write_char('+')?;
    for x in 0..grid.width() {
        let openings = grid.get(CellPoint::new(x, y)).map_err(|_| fmt::Error)?;
        f.write_str(if openings.is_open(side) { "   " } else { "---" })?;
        f.write_char('+')?;
    }
    f.write_char('\n')
}

impl fmt::Display for MazeGrid {
    /// Equivalent to [`render()`] with no highlight.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_maze(f, self, None)
    }
}
