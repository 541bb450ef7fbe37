use core::fmt;

use bitflags::bitflags;

use crate::math::Direction;

bitflags! {
    /// The set of [`Direction`]s in which a cell has a passage leading out of it.
    ///
    /// The bit for each direction equals that direction's discriminant, so
    /// `Openings::from(d).bits() == d as u8`.
    #[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
    pub struct Openings: u8 {
        /// A passage leads north.
        const NORTH = Direction::North as u8;
        /// A passage leads east.
        const EAST = Direction::East as u8;
        /// A passage leads south.
        const SOUTH = Direction::South as u8;
        /// A passage leads west.
        const WEST = Direction::West as u8;
    }
}

impl Openings {
    /// Returns whether a passage leads out in `direction`.
    #[inline]
    pub const fn is_open(self, direction: Direction) -> bool {
        self.bits() & (direction as u8) != 0
    }

    /// Iterates over the open directions, in the order of [`Direction::ALL`].
    #[inline]
    pub fn directions(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |&d| self.is_open(d))
    }

    /// Returns the number of open directions, from 0 to 4.
    #[inline]
    pub const fn count(self) -> u32 {
        self.bits().count_ones()
    }
}

impl From<Direction> for Openings {
    #[inline]
    fn from(direction: Direction) -> Self {
        Openings::from_bits_retain(direction as u8)
    }
}

impl FromIterator<Direction> for Openings {
    #[inline]
    fn from_iter<T: IntoIterator<Item = Direction>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Openings::empty(), |acc, d| acc | Openings::from(d))
    }
}

impl fmt::Debug for Openings {
    /// Formats as the list of letters of the open directions, e.g. `Openings(NS)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Openings(")?;
        for direction in self.directions() {
            f.write_str(match direction {
                Direction::North => "N",
                Direction::East => "E",
                Direction::South => "S",
                Direction::West => "W",
            })?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use alloc::vec::Vec;
    use pretty_assertions::assert_eq;

    #[test]
    fn from_direction_matches_discriminant() {
        for direction in Direction::ALL {
            let openings = Openings::from(direction);
            assert_eq!(openings.bits(), direction as u8);
            assert!(openings.is_open(direction));
            assert_eq!(openings.count(), 1);
        }
    }

    #[test]
    fn directions_in_canonical_order() {
        let openings: Openings = [Direction::West, Direction::North].into_iter().collect();
        assert_eq!(
            openings.directions().collect::<Vec<_>>(),
            vec![Direction::North, Direction::West]
        );
        assert_eq!(openings.bits(), 0b1001);
    }

    #[test]
    fn debug_format() {
        assert_eq!(format!("{:?}", Openings::empty()), "Openings()");
        assert_eq!(format!("{:?}", Openings::all()), "Openings(NESW)");
        assert_eq!(
            format!("{:?}", Openings::EAST | Openings::SOUTH),
            String::from("Openings(ES)")
        );
    }
}
