use std::ops::BitOr;

use crate::error::Error;

const LOWER: u8 = 0b10;
const UPPER: u8 = 0b01;

/// Which endpoints of an interval are inclusive, as a 2-bit tag.
///
/// Bit 1 marks the lower endpoint inclusive, bit 0 the upper one. OR-ing two
/// tags never leaves the four valid values and is at least as inclusive as
/// either side.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Bounds {
    /// `(lower, upper)`
    BothExclusive = 0b00,
    /// `(lower, upper]`
    UpperInclusive = 0b01,
    /// `[lower, upper)`
    LowerInclusive = 0b10,
    /// `[lower, upper]`
    BothInclusive = 0b11,
}

impl Bounds {
    pub const fn from_inclusion(lower: bool, upper: bool) -> Self {
        match (lower, upper) {
            (false, false) => Bounds::BothExclusive,
            (false, true) => Bounds::UpperInclusive,
            (true, false) => Bounds::LowerInclusive,
            (true, true) => Bounds::BothInclusive,
        }
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn lower_inclusive(self) -> bool {
        self.bits() & LOWER != 0
    }

    #[inline]
    pub const fn upper_inclusive(self) -> bool {
        self.bits() & UPPER != 0
    }
}

impl TryFrom<u8> for Bounds {
    type Error = Error;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        match bits {
            0b00 => Ok(Bounds::BothExclusive),
            0b01 => Ok(Bounds::UpperInclusive),
            0b10 => Ok(Bounds::LowerInclusive),
            0b11 => Ok(Bounds::BothInclusive),
            other => Err(Error::InvalidBounds(other)),
        }
    }
}

impl From<Bounds> for u8 {
    fn from(bounds: Bounds) -> u8 {
        bounds.bits()
    }
}

impl BitOr for Bounds {
    type Output = Bounds;

    fn bitor(self, rhs: Bounds) -> Bounds {
        let bits = self.bits() | rhs.bits();
        Bounds::from_inclusion(bits & LOWER != 0, bits & UPPER != 0)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Bounds {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.bits())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Bounds {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Bounds::try_from(bits).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Bounds; 4] = [
        Bounds::BothExclusive,
        Bounds::UpperInclusive,
        Bounds::LowerInclusive,
        Bounds::BothInclusive,
    ];

    #[test]
    fn test_bits_layout() {
        assert!(!Bounds::BothExclusive.lower_inclusive());
        assert!(!Bounds::BothExclusive.upper_inclusive());
        assert!(!Bounds::UpperInclusive.lower_inclusive());
        assert!(Bounds::UpperInclusive.upper_inclusive());
        assert!(Bounds::LowerInclusive.lower_inclusive());
        assert!(!Bounds::LowerInclusive.upper_inclusive());
        assert!(Bounds::BothInclusive.lower_inclusive());
        assert!(Bounds::BothInclusive.upper_inclusive());
    }

    #[test]
    fn test_try_from_u8() {
        for bounds in ALL.iter() {
            assert_eq!(Bounds::try_from(bounds.bits()), Ok(*bounds));
        }
        assert_eq!(Bounds::try_from(0b100), Err(Error::InvalidBounds(0b100)));
        assert_eq!(Bounds::try_from(0xff), Err(Error::InvalidBounds(0xff)));
    }

    #[test]
    fn test_or_is_bitwise_and_monotone() {
        for a in ALL.iter() {
            for b in ALL.iter() {
                let c = *a | *b;
                assert_eq!(c.bits(), a.bits() | b.bits());
                assert!(c.lower_inclusive() >= a.lower_inclusive());
                assert!(c.upper_inclusive() >= b.upper_inclusive());
            }
        }
    }

    #[test]
    fn test_from_inclusion() {
        for bounds in ALL.iter() {
            let rebuilt = Bounds::from_inclusion(
                bounds.lower_inclusive(),
                bounds.upper_inclusive(),
            );
            assert_eq!(rebuilt, *bounds);
        }
    }
}
