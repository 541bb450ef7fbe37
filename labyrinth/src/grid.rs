//! [`MazeGrid`], the per-cell record of which passages are open, and [`MazeError`].

use alloc::boxed::Box;
use core::fmt;

use crate::math::{CellCoordinate, CellPoint, CellSize, Direction, Openings};

mod connectivity;

/// A rectangular grid of cells, each of which records the [`Openings`] leading out of it.
///
/// Cells are addressed by [`CellPoint`]s with `0 ≤ x < width` and `0 ≤ y < height`.
///
/// A [`MazeGrid`] produced by [`generate_maze()`](crate::generate_maze) is a perfect maze:
/// every passage is open from both sides, and the passages form a spanning tree.
/// A grid under construction is only guaranteed the first of those properties if its
/// mutator (normally the carver) always opens passages in reciprocal pairs;
/// [`MazeGrid::open()`] by itself opens only one side.
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct MazeGrid {
    size: CellSize,
    /// Row-major: the cell at `(x, y)` is at index `y * width + x`.
    /// Invariant: the length is `size.width * size.height`.
    cells: Box<[Openings]>,
}

impl MazeGrid {
    /// Constructs a grid of the given size in which no cell has any openings.
    ///
    /// Returns [`MazeError::InvalidDimension`] if either dimension is zero or negative,
    /// and [`MazeError::TooLarge`] if the number of cells would not fit in [`usize`].
    ///
    /// ```
    /// use labyrinth::{MazeError, MazeGrid};
    /// use labyrinth::math::CellSize;
    ///
    /// let grid = MazeGrid::new(CellSize::new(4, 3))?;
    /// assert_eq!(grid.cell_count(), 12);
    /// assert!(grid.is_uncarved());
    ///
    /// assert!(matches!(
    ///     MazeGrid::new(CellSize::new(0, 5)),
    ///     Err(MazeError::InvalidDimension { .. })
    /// ));
    /// # Ok::<(), MazeError>(())
    /// ```
    #[allow(clippy::missing_inline_in_public_items, reason = "is generic already")]
    pub fn new(size: impl Into<CellSize>) -> Result<Self, MazeError> {
        let size = size.into();
        let count = Self::checked_cell_count(size)?;
        Ok(MazeGrid {
            size,
            cells: vec![Openings::empty(); count].into_boxed_slice(),
        })
    }

    fn checked_cell_count(size: CellSize) -> Result<usize, MazeError> {
        if size.width <= 0 || size.height <= 0 {
            return Err(MazeError::InvalidDimension { size });
        }
        let width = usize::try_from(size.width).map_err(|_| MazeError::TooLarge { size })?;
        let height = usize::try_from(size.height).map_err(|_| MazeError::TooLarge { size })?;
        width
            .checked_mul(height)
            .ok_or(MazeError::TooLarge { size })
    }

    /// Returns the size of the grid, in cells.
    #[inline]
    pub fn size(&self) -> CellSize {
        self.size
    }

    /// Returns the number of columns.
    #[inline]
    pub fn width(&self) -> CellCoordinate {
        self.size.width
    }

    /// Returns the number of rows.
    #[inline]
    pub fn height(&self) -> CellCoordinate {
        self.size.height
    }

    /// Returns the total number of cells, `width * height`.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns whether `point` is a cell of this grid.
    #[inline]
    pub fn contains(&self, point: CellPoint) -> bool {
        self.index(point).is_some()
    }

    /// Converts a point to its index in `self.cells`, or [`None`] if out of bounds.
    #[inline]
    pub(crate) fn index(&self, point: CellPoint) -> Option<usize> {
        // Negative coordinates become huge when reinterpreted as unsigned, so one unsigned
        // comparison per axis suffices.
        if (point.x as u32 >= self.size.width as u32) | (point.y as u32 >= self.size.height as u32)
        {
            return None;
        }
        Some(point.y as usize * self.size.width as usize + point.x as usize)
    }

    /// Inverse of [`Self::index()`]. `index` must be in bounds.
    #[inline]
    #[allow(clippy::cast_possible_wrap, reason = "in-bounds coordinates fit in i32")]
    pub(crate) fn point_at(&self, index: usize) -> CellPoint {
        let width = self.size.width as usize;
        CellPoint::new((index % width) as CellCoordinate, (index / width) as CellCoordinate)
    }

    fn checked_index(&self, point: CellPoint) -> Result<usize, MazeError> {
        self.index(point).ok_or(MazeError::OutOfBounds {
            point,
            size: self.size,
        })
    }

    /// Returns the openings of the cell at `point`.
    ///
    /// Returns [`MazeError::OutOfBounds`] if `point` is not a cell of this grid.
    #[inline]
    pub fn get(&self, point: CellPoint) -> Result<Openings, MazeError> {
        Ok(self.cells[self.checked_index(point)?])
    }

    /// Returns whether the cell at `point` has a passage leading out in `direction`.
    ///
    /// Returns [`MazeError::OutOfBounds`] if `point` is not a cell of this grid.
    ///
    /// ```
    /// use labyrinth::{Direction, MazeError, MazeGrid};
    /// use labyrinth::math::{CellPoint, CellSize};
    ///
    /// let grid = MazeGrid::new(CellSize::new(2, 2))?;
    /// assert_eq!(grid.is_open(CellPoint::new(1, 1), Direction::North), Ok(false));
    /// assert!(matches!(
    ///     grid.is_open(CellPoint::new(-1, 0), Direction::North),
    ///     Err(MazeError::OutOfBounds { .. })
    /// ));
    /// # Ok::<(), MazeError>(())
    /// ```
    #[inline]
    pub fn is_open(&self, point: CellPoint, direction: Direction) -> Result<bool, MazeError> {
        Ok(self.get(point)?.is_open(direction))
    }

    /// Opens a passage leading out of the cell at `point` in `direction`.
    ///
    /// This affects only that one cell; the neighbor's reciprocal opening is *not* set.
    /// Callers which want the grid to stay consistent must also open
    /// `direction.opposite()` on the neighbor.
    ///
    /// Returns [`MazeError::OutOfBounds`] if `point` is not a cell of this grid.
    #[inline]
    pub fn open(&mut self, point: CellPoint, direction: Direction) -> Result<(), MazeError> {
        let index = self.checked_index(point)?;
        self.cells[index] |= Openings::from(direction);
        Ok(())
    }

    /// Returns the neighbor of `point` in `direction`, or [`None`] if that neighbor would be
    /// outside the grid.
    ///
    /// This does not consider whether there is a passage to that neighbor.
    #[inline]
    pub fn neighbor(&self, point: CellPoint, direction: Direction) -> Option<CellPoint> {
        let step = direction.step();
        let neighbor = CellPoint::new(
            point.x.checked_add(step.x)?,
            point.y.checked_add(step.y)?,
        );
        self.contains(neighbor).then_some(neighbor)
    }

    /// Returns whether no cell has any openings.
    #[inline]
    pub fn is_uncarved(&self) -> bool {
        self.cells.iter().all(|o| o.is_empty())
    }

    /// Iterates over every cell and its openings, in row-major order starting from
    /// `(0, 0)`.
    #[inline]
    pub fn cells(&self) -> impl Iterator<Item = (CellPoint, Openings)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, &openings)| (self.point_at(index), openings))
    }

    /// Opens the passage between `point` and its neighbor in `direction`, from both sides.
    ///
    /// The caller must have checked that the neighbor exists.
    pub(crate) fn open_between(&mut self, point: CellPoint, direction: Direction) -> CellPoint {
        let neighbor = point + direction.step();
        let (Some(here), Some(there)) = (self.index(point), self.index(neighbor)) else {
            panic!("open_between({point:?}, {direction:?}) out of bounds");
        };
        self.cells[here] |= Openings::from(direction);
        self.cells[there] |= Openings::from(direction.opposite());
        neighbor
    }
}

impl fmt::Debug for MazeGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { size, cells: _ } = self;
        // The cell data is better examined with `Display`.
        f.debug_struct("MazeGrid")
            .field("width", &size.width)
            .field("height", &size.height)
            .finish_non_exhaustive()
    }
}

/// Ways that constructing, carving, or querying a [`MazeGrid`] can fail.
///
/// All of these are detected before any modification is made.
#[derive(Clone, Debug, Eq, Hash, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum MazeError {
    /// The requested grid has zero or negative width or height.
    #[error("maze dimensions {}×{} must both be positive", .size.width, .size.height)]
    InvalidDimension {
        /// The rejected size.
        size: CellSize,
    },

    /// The requested grid has more cells than can be addressed.
    #[error("maze dimensions {}×{} are too large", .size.width, .size.height)]
    TooLarge {
        /// The rejected size.
        size: CellSize,
    },

    /// A coordinate was outside the grid.
    #[error(
        "cell ({}, {}) is out of bounds of the {}×{} maze",
        .point.x, .point.y, .size.width, .size.height
    )]
    OutOfBounds {
        /// The rejected coordinate.
        point: CellPoint,
        /// Size of the grid that was being accessed.
        size: CellSize,
    },

    /// Carving was requested on a grid which already has openings.
    #[error("cannot carve a maze into a grid that already has openings")]
    AlreadyCarved,
}
