use log::trace;

use crate::bounds::Bounds;
use crate::error::{Error, Result};
use crate::instant::{Instant, Timestamp};
use crate::sequence::Sequence;

/// An immutable time interval `lower..upper` whose endpoint inclusion is
/// given by a [`Bounds`] tag.
///
/// `lower` never follows `upper`. Equal endpoints are allowed: with
/// [`Bounds::BothInclusive`] the interval is a single point, with any other
/// tag it admits no point at all.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval<T = Timestamp> {
    lower: T,
    upper: T,
    bounds: Bounds,
}

/// How one interval reaches into another, ignoring contact at an endpoint.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Overlap {
    /// Both endpoints of the receiver lie strictly inside the other
    /// interval. Only reported when the upper check did not already match.
    Lower = -1,
    /// Neither of the above: no overlap, contact at an endpoint, or an
    /// overlap on the receiver's lower side.
    Neither = 0,
    /// The receiver's upper endpoint lies strictly inside the other interval.
    Upper = 1,
}

impl From<Overlap> for i8 {
    fn from(overlap: Overlap) -> i8 {
        overlap as i8
    }
}

impl<T> Interval<T>
where
    T: Instant,
{
    pub fn new(lower: T, upper: T, bounds: Bounds) -> Result<Self> {
        if lower.after(&upper) {
            return Err(Error::InvalidOrdering);
        }
        Ok(Interval {
            lower,
            upper,
            bounds,
        })
    }

    /// Builds an interval from a raw 2-bit bounds tag, rejecting any value
    /// above `0b11`.
    pub fn from_bits(lower: T, upper: T, bits: u8) -> Result<Self> {
        let bounds = Bounds::try_from(bits);
        // InvalidOrdering takes precedence over InvalidBounds.
        let interval = Interval::new(lower, upper, Bounds::BothExclusive)?;
        Ok(Interval {
            bounds: bounds?,
            ..interval
        })
    }

    #[inline]
    pub fn lower(&self) -> T {
        self.lower
    }

    #[inline]
    pub fn upper(&self) -> T {
        self.upper
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    pub fn lower_inclusive(&self) -> bool {
        self.bounds.lower_inclusive()
    }

    #[inline]
    pub fn upper_inclusive(&self) -> bool {
        self.bounds.upper_inclusive()
    }

    /// Returns `true` if every point admitted by `other` is admitted by
    /// `self`.
    ///
    /// A shared endpoint only counts when `self` is at least as inclusive
    /// there as `other`, so `[a, b)` and `(a, b]` do not contain each other.
    pub fn contains(&self, other: &Self) -> bool {
        if self.lower.after(&other.lower) || self.upper.before(&other.upper) {
            return false;
        }

        if self.lower.equal(&other.lower)
            && self.lower_inclusive() < other.lower_inclusive()
        {
            return false;
        }

        if self.upper.equal(&other.upper)
            && self.upper_inclusive() < other.upper_inclusive()
        {
            return false;
        }

        true
    }

    /// Reports strict interior overlap with `other`. Intervals that only
    /// touch at an endpoint give [`Overlap::Neither`].
    ///
    /// The check is one-sided: `self` reaching into `other` from below gives
    /// [`Overlap::Upper`], while `self` reaching in from above gives
    /// [`Overlap::Neither`]. When `self` sits strictly inside `other` the
    /// upper check matches first.
    pub fn overlaps(&self, other: &Self) -> Overlap {
        if self.upper.after(&other.lower) && self.upper.before(&other.upper) {
            Overlap::Upper
        } else if self.lower.after(&other.lower)
            && self.upper.before(&other.upper)
        {
            Overlap::Lower
        } else {
            Overlap::Neither
        }
    }

    /// Fuses `self` and `other` into one connected interval, or returns
    /// `None` when a gap separates them.
    ///
    /// Equality, containment and endpoint contact are symmetric, but interior
    /// overlap is only found when `self` reaches into `other` from below:
    /// `[0, 30)` fuses with `[20, 60)` while `[20, 60)` does not fuse with
    /// `[0, 30)`. Intervals with the same endpoints and incomparable bounds,
    /// such as `[a, b)` and `(a, b]`, do not fuse either. The result's bounds
    /// are the OR of both tags.
    pub fn union(&self, other: &Self) -> Option<Self> {
        if self == other {
            trace!("union of equal intervals {}", self);
            return Some(*self);
        }

        if self.contains(other) {
            trace!("{} contains {}", self, other);
            return Some(*self);
        } else if other.contains(self) {
            trace!("{} contains {}", other, self);
            return Some(*other);
        }

        let bounds = self.bounds | other.bounds;

        match self.overlaps(other) {
            Overlap::Upper => {
                trace!("{} overlaps the start of {}", self, other);
                return Interval::new(self.lower, other.upper, bounds).ok();
            }
            Overlap::Lower => {
                trace!("{} lies inside {}", self, other);
                return Interval::new(other.lower, self.upper, bounds).ok();
            }
            Overlap::Neither => {}
        }

        if self.lower.equal(&other.upper)
            && (self.lower_inclusive() || other.upper_inclusive())
        {
            trace!("{} touches the end of {}", self, other);
            Interval::new(other.lower, self.upper, bounds).ok()
        } else if self.upper.equal(&other.lower)
            && (self.upper_inclusive() || other.lower_inclusive())
        {
            trace!("{} touches the start of {}", self, other);
            Interval::new(self.lower, other.upper, bounds).ok()
        } else {
            trace!("{} and {} are disjoint", self, other);
            None
        }
    }

    /// Returns `true` when the two intervals cannot be fused into one in
    /// either argument order.
    #[inline]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.union(other).is_none() && other.union(self).is_none()
    }

    /// Combines two intervals into their union when one exists, otherwise
    /// into both intervals sorted by lower endpoint.
    pub fn merge(&self, other: &Self) -> Sequence<T> {
        match self.union(other) {
            Some(union) => Sequence::from(vec![union]),
            None => {
                let mut intervals = vec![*self, *other];
                intervals.sort_by(|a, b| a.lower.cmp(&b.lower));
                Sequence::from(intervals)
            }
        }
    }
}

impl<T> TryFrom<(T, T, u8)> for Interval<T>
where
    T: Instant,
{
    type Error = Error;

    fn try_from(i: (T, T, u8)) -> Result<Self> {
        Interval::from_bits(i.0, i.1, i.2)
    }
}

impl<T> From<&Interval<T>> for Interval<T>
where
    T: Copy,
{
    fn from(interval: &Interval<T>) -> Interval<T> {
        *interval
    }
}
