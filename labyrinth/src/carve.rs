//! Randomized depth-first carving of a [`MazeGrid`] into a perfect maze.

use alloc::vec::Vec;
use core::fmt;

use bitvec::vec::BitVec;
use rand::Rng;

use crate::math::{CellPoint, CellSize, Direction};
use crate::{MazeError, MazeGrid, render};


/// Allocates a grid of the given size and carves a perfect maze into it, starting from
/// `start`.
///
/// The result depends only on `size`, `start`, and the values drawn from `rng`, so a seeded
/// generator produces the same maze every time.
///
/// Returns [`MazeError::InvalidDimension`] if either dimension is not positive, and
/// [`MazeError::OutOfBounds`] if `start` is not inside the grid.
///
/// ```
/// use labyrinth::{Direction, generate_maze};
/// use labyrinth::math::{CellPoint, CellSize};
/// use rand::SeedableRng as _;
///
/// let mut rng = rand_xoshiro::Xoshiro256Plus::seed_from_u64(0);
/// let maze = generate_maze(CellSize::new(2, 1), CellPoint::new(0, 0), &mut rng)?;
/// assert_eq!(maze.is_open(CellPoint::new(0, 0), Direction::East), Ok(true));
/// assert_eq!(maze.is_open(CellPoint::new(1, 0), Direction::West), Ok(true));
/// # Ok::<(), labyrinth::MazeError>(())
/// ```
#[allow(clippy::missing_inline_in_public_items, reason = "is generic already")]
pub fn generate_maze<R: Rng + ?Sized>(
    size: CellSize,
    start: CellPoint,
    rng: &mut R,
) -> Result<MazeGrid, MazeError> {
    let mut grid = MazeGrid::new(size)?;
    carve(&mut grid, start, rng)?;
    Ok(grid)
}

/// Carves a perfect maze into `grid`, which must not have any openings yet, starting from
/// `start`.
///
/// This is a depth-first traversal with backtracking, driven by an explicit stack rather
/// than recursion, so its memory use is on the heap and proportional to the longest
/// corridor. Each cell's neighbors are tried in an order given by
/// [`shuffle_directions()`], drawn from `rng` when the cell is first entered; the sequence
/// of draws, and hence the maze, is the same as a recursive implementation would produce.
///
/// On success every cell has been visited, and the passages opened form a spanning tree
/// with every passage open from both sides.
///
/// Returns [`MazeError::OutOfBounds`] if `start` is not a cell of `grid`, or
/// [`MazeError::AlreadyCarved`] if `grid` has any openings. In either case `grid` is
/// unchanged.
#[allow(clippy::missing_inline_in_public_items, reason = "is generic already")]
pub fn carve<R: Rng + ?Sized>(
    grid: &mut MazeGrid,
    start: CellPoint,
    rng: &mut R,
) -> Result<CarveInfo, MazeError> {
    let Some(start_index) = grid.index(start) else {
        return Err(MazeError::OutOfBounds {
            point: start,
            size: grid.size(),
        });
    };
    if !grid.is_uncarved() {
        return Err(MazeError::AlreadyCarved);
    }

    let tracing = log::log_enabled!(target: "labyrinth::carve", log::Level::Trace);
    if tracing {
        log::trace!(target: "labyrinth::carve", "carving {grid:?} from ({}, {})", start.x, start.y);
    }

    let mut visited: BitVec = BitVec::repeat(false, grid.cell_count());
    visited.set(start_index, true);

    let mut info = CarveInfo {
        cells_visited: 1,
        passages_opened: 0,
        max_stack_depth: 1,
    };
    let mut stack: Vec<Frame> = vec![Frame::enter(start, rng)];

    while let Some(frame) = stack.last_mut() {
        let Some(direction) = frame.next_direction() else {
            let finished = frame.cell;
            stack.pop();
            if tracing {
                if let Some(parent) = stack.last() {
                    log::trace!(
                        target: "labyrinth::carve",
                        "backtrack from ({}, {}) to ({}, {})\n{}",
                        finished.x,
                        finished.y,
                        parent.cell.x,
                        parent.cell.y,
                        render(grid, Some(parent.cell)),
                    );
                }
            }
            continue;
        };
        let cell = frame.cell;

        let Some(neighbor) = grid.neighbor(cell, direction) else {
            continue;
        };
        let Some(neighbor_index) = grid.index(neighbor) else {
            continue;
        };
        if visited[neighbor_index] {
            continue;
        }

        grid.open_between(cell, direction);
        visited.set(neighbor_index, true);
        info.cells_visited += 1;
        info.passages_opened += 1;

        stack.push(Frame::enter(neighbor, rng));
        info.max_stack_depth = info.max_stack_depth.max(stack.len());

        if tracing {
            log::trace!(
                target: "labyrinth::carve",
                "carve {direction:?} from ({}, {}) to ({}, {})\n{}",
                cell.x,
                cell.y,
                neighbor.x,
                neighbor.y,
                render(grid, Some(neighbor)),
            );
        }
    }

    debug_assert_eq!(info.cells_visited, grid.cell_count());
    log::debug!(target: "labyrinth::carve", "carved {grid:?}: {info}");
    Ok(info)
}

/// Returns a uniformly random permutation of [`Direction::ALL`].
///
/// The permutation is made by a Fisher–Yates shuffle of `[North, East, South, West]` which
/// draws exactly three values: for each position `i` from 0 to 2, an index `j` uniformly
/// from `i..4` whose direction is swapped into position `i`.
#[allow(clippy::missing_inline_in_public_items, reason = "is generic already")]
pub fn shuffle_directions<R: Rng + ?Sized>(rng: &mut R) -> [Direction; 4] {
    let mut directions = Direction::ALL;
    for i in 0..directions.len() - 1 {
        let j = rng.random_range(i..directions.len());
        directions.swap(i, j);
    }
    directions
}

/// One cell on the carver's stack, with the neighbors it has yet to try.
#[derive(Debug)]
struct Frame {
    cell: CellPoint,
    directions: [Direction; 4],
    /// Index into `directions` of the next direction to try.
    next: usize,
}

impl Frame {
    fn enter<R: Rng + ?Sized>(cell: CellPoint, rng: &mut R) -> Self {
        Frame {
            cell,
            directions: shuffle_directions(rng),
            next: 0,
        }
    }

    fn next_direction(&mut self) -> Option<Direction> {
        let direction = *self.directions.get(self.next)?;
        self.next += 1;
        Some(direction)
    }
}

/// Statistics about a completed [`carve()`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub struct CarveInfo {
    /// Number of cells entered, including the start cell.
    /// Always equal to the number of cells in the grid.
    pub cells_visited: usize,
    /// Number of passages opened. Always one less than `cells_visited`.
    pub passages_opened: usize,
    /// Greatest number of cells that were on the backtracking stack at once;
    /// the length of the longest path from the start that was carved in one run.
    pub max_stack_depth: usize,
}

impl fmt::Display for CarveInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let &Self {
            cells_visited,
            passages_opened,
            max_stack_depth,
        } = self;
        write!(
            f,
            "{cells_visited} cells, {passages_opened} passages, stack depth {max_stack_depth}"
        )
    }
}
