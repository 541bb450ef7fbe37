//! Read-only traversals of the passages of a [`MazeGrid`].

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use bitvec::vec::BitVec;

use crate::math::{CellPoint, Direction};
use crate::{MazeError, MazeGrid};

impl MazeGrid {
    /// Returns whether there is a passage, open from both sides, between `point` and its
    /// neighbor in `direction`.
    ///
    /// Out-of-bounds points and neighbors are never connected.
    #[inline]
    pub fn is_connected(&self, point: CellPoint, direction: Direction) -> bool {
        match (self.get(point), self.neighbor(point, direction)) {
            (Ok(here), Some(neighbor)) => {
                here.is_open(direction)
                    && self
                        .get(neighbor)
                        .is_ok_and(|there| there.is_open(direction.opposite()))
            }
            _ => false,
        }
    }

    /// Returns the number of passages between pairs of cells, counting each passage once.
    ///
    /// Only passages open from both sides are counted. In a perfect maze, this is always
    /// one less than [`cell_count()`](Self::cell_count).
    #[allow(clippy::missing_inline_in_public_items)]
    pub fn passage_count(&self) -> usize {
        self.cells()
            .map(|(point, _)| {
                usize::from(self.is_connected(point, Direction::North))
                    + usize::from(self.is_connected(point, Direction::East))
            })
            .sum()
    }

    /// Performs a breadth-first traversal of the passages starting at `start`, and returns
    /// the set of visited cells as bits indexed in the same row-major order as
    /// [`cells()`](Self::cells).
    ///
    /// Only passages open from both sides are followed.
    ///
    /// Returns [`MazeError::OutOfBounds`] if `start` is not a cell of this grid.
    #[allow(clippy::missing_inline_in_public_items)]
    pub fn reachable_from(&self, start: CellPoint) -> Result<BitVec, MazeError> {
        let mut visited = self.traverse(start, |_, _| {})?;
        visited.shrink_to_fit();
        Ok(visited)
    }

    /// Returns the number of cells reachable from `start`, including `start` itself.
    ///
    /// Returns [`MazeError::OutOfBounds`] if `start` is not a cell of this grid.
    #[inline]
    pub fn reachable_count(&self, start: CellPoint) -> Result<usize, MazeError> {
        Ok(self.reachable_from(start)?.count_ones())
    }

    /// Returns the path through the maze from `from` to `to`, including both endpoints,
    /// or [`None`] if `to` is not reachable from `from`.
    ///
    /// In a perfect maze there is always exactly one simple path, so this is that path.
    /// Otherwise, this is one of the shortest paths.
    ///
    /// Returns [`MazeError::OutOfBounds`] if either point is not a cell of this grid.
    ///
    /// ```
    /// use labyrinth::{MazeError, generate_maze};
    /// use labyrinth::math::{CellPoint, CellSize};
    /// use rand::SeedableRng as _;
    ///
    /// let mut rng = rand_xoshiro::Xoshiro256Plus::seed_from_u64(7);
    /// let maze = generate_maze(CellSize::new(5, 1), CellPoint::new(0, 0), &mut rng)?;
    ///
    /// let path = maze.path_between(CellPoint::new(1, 0), CellPoint::new(3, 0))?.unwrap();
    /// assert_eq!(path, [CellPoint::new(1, 0), CellPoint::new(2, 0), CellPoint::new(3, 0)]);
    /// # Ok::<(), MazeError>(())
    /// ```
    #[allow(clippy::missing_inline_in_public_items)]
    pub fn path_between(
        &self,
        from: CellPoint,
        to: CellPoint,
    ) -> Result<Option<Vec<CellPoint>>, MazeError> {
        let to_index = self.index(to).ok_or(MazeError::OutOfBounds {
            point: to,
            size: self.size(),
        })?;

        // For each reached cell, the index of the cell it was reached from.
        let mut came_from: Vec<Option<usize>> = vec![None; self.cell_count()];
        let visited = self.traverse(from, |parent, child| {
            came_from[child] = Some(parent);
        })?;
        if !visited[to_index] {
            return Ok(None);
        }

        let mut path = vec![to];
        let mut current = to_index;
        while let Some(parent) = came_from[current] {
            path.push(self.point_at(parent));
            current = parent;
        }
        path.reverse();
        Ok(Some(path))
    }

    /// Breadth-first traversal shared by the public queries.
    ///
    /// `on_discover(parent, child)` is called with cell indices the first time each cell
    /// other than `start` is reached.
    fn traverse(
        &self,
        start: CellPoint,
        mut on_discover: impl FnMut(usize, usize),
    ) -> Result<BitVec, MazeError> {
        let start_index = self.index(start).ok_or(MazeError::OutOfBounds {
            point: start,
            size: self.size(),
        })?;

        let mut visited: BitVec = BitVec::repeat(false, self.cell_count());
        let mut queue: VecDeque<usize> = VecDeque::new();
        visited.set(start_index, true);
        queue.push_back(start_index);

        while let Some(index) = queue.pop_front() {
            let point = self.point_at(index);
            for direction in Direction::ALL {
                if !self.is_connected(point, direction) {
                    continue;
                }
                let neighbor = point + direction.step();
                let Some(neighbor_index) = self.index(neighbor) else {
                    continue;
                };
                if !visited[neighbor_index] {
                    visited.set(neighbor_index, true);
                    on_discover(index, neighbor_index);
                    queue.push_back(neighbor_index);
                }
            }
        }

        Ok(visited)
    }

    /// Returns the first opening, in row-major then [`Direction::ALL`] order, which either
    /// leads out of the grid or is not matched by the reciprocal opening in its neighbor.
    #[allow(clippy::missing_inline_in_public_items)]
    pub fn find_inconsistency(&self) -> Option<(CellPoint, Direction)> {
        self.cells().find_map(|(point, openings)| {
            openings
                .directions()
                .find(|&direction| !self.is_connected(point, direction))
                .map(|direction| (point, direction))
        })
    }

    /// Returns whether this grid is a perfect maze: every opening is reciprocated, every
    /// cell is reachable from `start`, and there are no loops.
    ///
    /// Returns [`MazeError::OutOfBounds`] if `start` is not a cell of this grid.
    #[allow(clippy::missing_inline_in_public_items)]
    pub fn is_perfect(&self, start: CellPoint) -> Result<bool, MazeError> {
        let reachable = self.reachable_count(start)?;
        Ok(self.find_inconsistency().is_none()
            && reachable == self.cell_count()
            && self.passage_count() == self.cell_count() - 1)
    }

    /// Panics if any opening is not reciprocated by its neighbor or leads out of the grid.
    ///
    /// This is intended for use in tests and fuzzing.
    #[track_caller]
    #[allow(clippy::missing_inline_in_public_items)]
    pub fn consistency_check(&self) {
        if let Some((point, direction)) = self.find_inconsistency() {
            panic!(
                "MazeGrid consistency check failed: cell ({x}, {y}) is open to the \
                    {direction:?} but {problem}\n{self}",
                x = point.x,
                y = point.y,
                problem = match self.neighbor(point, direction) {
                    Some(_) => "the neighbor is not open in return",
                    None => "that leads out of the grid",
                },
            );
        }
    }
}
