//! The four compass directions: the [`Direction`] type.
//! This module is private but reexported by its parent.

use core::ops;

use crate::math::{CellCoordinate, CellVector};

/// One of the four directions in which a passage may leave a cell.
///
/// Each direction has a distinct power-of-two discriminant, so that `direction as u8`
/// is also the bit which represents that direction in an [`Openings`](crate::Openings) mask.
#[expect(clippy::exhaustive_enums)]
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, exhaust::Exhaust)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[repr(u8)]
pub enum Direction {
    /// Toward positive Y; unit step `(0, 1)`.
    North = 1,
    /// Toward positive X; unit step `(1, 0)`.
    East = 2,
    /// Toward negative Y; unit step `(0, -1)`.
    South = 4,
    /// Toward negative X; unit step `(-1, 0)`.
    West = 8,
}

impl Direction {
    /// All the values of [`Direction`], in clockwise order starting from north.
    ///
    /// This is also the order that the carver shuffles from, so changing it changes which
    /// maze a given random seed produces.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Inverse function of `direction as u8`, converting the bit to [`Direction`].
    ///
    /// Returns [`None`] for any value that is not exactly one of the four direction bits.
    #[inline]
    pub const fn from_bit(bit: u8) -> Option<Self> {
        match bit {
            1 => Some(Self::North),
            2 => Some(Self::East),
            4 => Some(Self::South),
            8 => Some(Self::West),
            _ => None,
        }
    }

    /// Returns the opposite direction (maps [`North`](Self::North) to
    /// [`South`](Self::South) and so on).
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Returns the offset from a cell to its neighbor in this direction.
    ///
    /// ```
    /// use labyrinth::Direction;
    /// use labyrinth::math::CellVector;
    ///
    /// assert_eq!(Direction::North.step(), CellVector::new(0, 1));
    /// assert_eq!(Direction::West.step(), CellVector::new(-1, 0));
    /// ```
    #[inline]
    #[must_use]
    pub const fn step(self) -> CellVector {
        let (dx, dy): (CellCoordinate, CellCoordinate) = match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
        };
        CellVector::new(dx, dy)
    }

    /// Returns the direction rotated a quarter turn clockwise (as seen with north up).
    #[inline]
    #[must_use]
    pub const fn clockwise(self) -> Direction {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }
}

/// Returns the opposite of `direction`. Equivalent to [`Direction::opposite()`].
#[inline]
#[must_use]
pub const fn opposite(direction: Direction) -> Direction {
    direction.opposite()
}

/// Returns the unit step `(dx, dy)` of `direction`. Equivalent to [`Direction::step()`].
#[inline]
#[must_use]
pub const fn step(direction: Direction) -> (CellCoordinate, CellCoordinate) {
    let v = direction.step();
    (v.x, v.y)
}

impl ops::Neg for Direction {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        self.opposite()
    }
}

impl TryFrom<CellVector> for Direction {
    /// Returns the original vector on failure.
    type Error = CellVector;

    /// Recovers a [`Direction`] from its unit step vector. All other vectors are rejected.
    ///
    /// ```
    /// use labyrinth::Direction;
    /// use labyrinth::math::CellVector;
    ///
    /// for direction in Direction::ALL {
    ///     assert_eq!(Direction::try_from(direction.step()), Ok(direction));
    /// }
    ///
    /// let v = CellVector::new(1, 1);
    /// assert_eq!(Direction::try_from(v), Err(v));
    /// ```
    #[inline]
    fn try_from(value: CellVector) -> Result<Self, Self::Error> {
        match (value.x, value.y) {
            (0, 1) => Ok(Direction::North),
            (1, 0) => Ok(Direction::East),
            (0, -1) => Ok(Direction::South),
            (-1, 0) => Ok(Direction::West),
            _ => Err(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use exhaust::Exhaust;
    use pretty_assertions::assert_eq;

    #[test]
    fn all_matches_exhaust() {
        assert_eq!(Direction::ALL.to_vec(), Direction::exhaust().collect::<Vec<_>>());
    }

    #[test]
    fn bits_are_distinct_and_cover_nibble() {
        let mut union = 0u8;
        for direction in Direction::ALL {
            let bit = direction as u8;
            assert_eq!(bit.count_ones(), 1, "{direction:?}");
            assert_eq!(union & bit, 0, "{direction:?} overlaps");
            union |= bit;
            assert_eq!(Direction::from_bit(bit), Some(direction));
        }
        assert_eq!(union, 0b1111);
        assert_eq!(Direction::from_bit(0), None);
        assert_eq!(Direction::from_bit(3), None);
        assert_eq!(Direction::from_bit(16), None);
    }

    #[test]
    fn opposite_is_involution_and_distinct() {
        for direction in Direction::ALL {
            assert_ne!(direction.opposite(), direction);
            assert_eq!(direction.opposite().opposite(), direction);
            assert_eq!(-direction, opposite(direction));
        }
    }

    #[test]
    fn opposite_steps_cancel() {
        for direction in Direction::ALL {
            assert_eq!(
                direction.step() + direction.opposite().step(),
                CellVector::zero(),
                "{direction:?}"
            );
            assert_eq!(direction.step().x.abs() + direction.step().y.abs(), 1);
        }
    }

    #[test]
    fn step_tuple_matches_vector() {
        assert_eq!(step(Direction::North), (0, 1));
        assert_eq!(step(Direction::East), (1, 0));
        assert_eq!(step(Direction::South), (0, -1));
        assert_eq!(step(Direction::West), (-1, 0));
    }

    #[test]
    fn clockwise_visits_all() {
        let mut d = Direction::North;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(d);
            d = d.clockwise();
        }
        assert_eq!(d, Direction::North);
        assert_eq!(seen, Direction::ALL.to_vec());
        assert_eq!(Direction::East.clockwise().clockwise(), Direction::East.opposite());
    }
}
