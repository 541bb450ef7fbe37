//! Generation of perfect mazes on rectangular grids.
//!
//! A *perfect maze* is one in which every pair of cells is connected by exactly one simple
//! path; equivalently, its passages form a spanning tree of the grid. This library produces
//! such mazes by randomized depth-first carving with backtracking, and stores the result as a
//! [`MazeGrid`]: one [`Openings`] bitmask per cell recording which of the four
//! [`Direction`]s have a passage leading out of that cell.
//!
//! The usual entry point is [`generate_maze()`]:
//!
//! ```
//! use labyrinth::{Direction, generate_maze};
//! use labyrinth::math::{CellPoint, CellSize};
//! use rand::SeedableRng as _;
//!
//! let mut rng = rand_xoshiro::Xoshiro256Plus::seed_from_u64(1234);
//! let maze = generate_maze(CellSize::new(8, 5), CellPoint::new(0, 0), &mut rng)?;
//!
//! // Every cell is reachable, and there are no loops.
//! assert_eq!(maze.passage_count(), 8 * 5 - 1);
//! assert_eq!(maze.reachable_count(CellPoint::new(0, 0))?, 8 * 5);
//!
//! // A single corridor cell at the corner of the maze has at most two openings.
//! let corner = maze.get(CellPoint::new(7, 4))?;
//! assert!(!corner.contains(Direction::North.into()));
//! # Ok::<(), labyrinth::MazeError>(())
//! ```
//!
//! The finished grid can be printed for debugging with [`render()`] or its [`Display`]
//! implementation.
//!
//! [`Display`]: core::fmt::Display
//!
//! # Package features
//!
//! * `std` (default): Use [`std`] rather than only [`core`] and [`alloc`].
//!   This currently only enables the [`util::MultiFailure`] test helper.
//! * `arbitrary`: Adds implementations of [`arbitrary::Arbitrary`] for [`Direction`].

#![no_std]
// Crate-specific lint settings. (General settings can be found in the workspace manifest.)
#![cfg_attr(
    not(test),
    warn(clippy::std_instead_of_core, clippy::std_instead_of_alloc)
)]
#![warn(clippy::missing_inline_in_public_items)]

#[cfg(any(feature = "std", test))]
#[cfg_attr(test, macro_use)]
extern crate std;
#[macro_use]
extern crate alloc;

pub mod math;
pub use math::{Direction, Openings, opposite, step};

mod grid;
pub use grid::*;

mod carve;
pub use carve::*;

mod render;
pub use render::render;

pub mod util;

// reexport for convenience of callers naming coordinate types
#[doc(hidden)]
pub use euclid;
