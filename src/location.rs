use serde::*;

/// A battlefield cell coordinate, packed into a single u16 as
/// `(row << 8) | col`. Cheap to copy, hash, and serialize.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(transparent)]
pub struct Location {
    packed: u16,
}

impl Location {
    pub fn from_coords(row: u32, col: u32) -> Self {
        Location {
            packed: ((row << 8) | col) as u16,
        }
    }

    pub fn from_rc(row: u8, col: u8) -> Self {
        Self::from_coords(row as u32, col as u32)
    }

    #[inline]
    pub fn row(self) -> u8 {
        ((self.packed >> 8) & 0xFF) as u8
    }

    #[inline]
    pub fn col(self) -> u8 {
        (self.packed & 0xFF) as u8
    }

    #[inline]
    pub fn packed_repr(self) -> u16 {
        self.packed
    }

    #[inline]
    pub fn from_packed(packed: u16) -> Self {
        Location { packed }
    }

    /// Chebyshev distance: max(|Δrow|, |Δcol|).
    pub fn distance_to(self, other: Self) -> u8 {
        let dr = (self.row() as i16) - (other.row() as i16);
        let dc = (self.col() as i16) - (other.col() as i16);

        dr.abs().max(dc.abs()) as u8
    }
}

impl Serialize for Location {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.packed_repr().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Location {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        u16::deserialize(deserializer).map(Location::from_packed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_and_unpacks_coordinates() {
        let loc = Location::from_rc(4, 7);
        assert_eq!(loc.row(), 4);
        assert_eq!(loc.col(), 7);
        assert_eq!(Location::from_packed(loc.packed_repr()), loc);
    }

    #[test]
    fn chebyshev_distance() {
        let a = Location::from_rc(2, 3);
        let b = Location::from_rc(5, 4);
        assert_eq!(a.distance_to(b), 3);
        assert_eq!(b.distance_to(a), 3);
        assert_eq!(a.distance_to(a), 0);
    }
}
