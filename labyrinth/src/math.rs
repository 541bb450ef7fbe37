//! Coordinates, directions, and per-cell opening masks.

mod coord;
pub use coord::*;
mod direction;
pub use direction::*;
mod openings;
pub use openings::*;
