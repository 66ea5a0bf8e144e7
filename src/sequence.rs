use std::ops::Index;
use std::slice::Iter;
use std::vec::IntoIter;

use crate::instant::{Instant, Timestamp};
use crate::interval::Interval;

/// An ordered list of intervals, ascending by lower endpoint, then upper
/// endpoint, then bounds.
///
/// [`Interval::merge`] returns one of these with one or two elements.
/// [`Sequence::insert`] keeps a longer sequence coalesced, so that no two of
/// its intervals could be fused by [`Interval::union`] in either order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Sequence<T = Timestamp> {
    intervals: Vec<Interval<T>>,
}

impl<T> Sequence<T>
where
    T: Instant,
{
    pub fn new() -> Self {
        Sequence { intervals: vec![] }
    }

    /// Builds a coalesced sequence out of arbitrary intervals.
    pub fn coalesce<I>(intervals: I) -> Self
    where
        I: IntoIterator<Item = Interval<T>>,
    {
        let mut sequence = Sequence::new();
        for interval in intervals {
            sequence.insert(interval);
        }
        sequence
    }

    /// Adds `interval`, fusing it with every interval it can be united with,
    /// trying both argument orders of [`Interval::union`].
    pub fn insert(&mut self, interval: Interval<T>) {
        let mut fused = interval;

        // A wider interval may reach neighbours that the original did not.
        loop {
            let before = self.intervals.len();
            self.intervals.retain(|other| {
                match fused.union(other).or_else(|| other.union(&fused)) {
                    Some(union) => {
                        fused = union;
                        false
                    }
                    None => true,
                }
            });
            if self.intervals.len() == before {
                break;
            }
        }

        let at = self.intervals.partition_point(|other| *other < fused);
        self.intervals.insert(at, fused);
    }

    /// Restores the ordering after intervals were added out of order.
    pub fn sort(&mut self) {
        self.intervals.sort();
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn first(&self) -> Option<&Interval<T>> {
        self.intervals.first()
    }

    pub fn last(&self) -> Option<&Interval<T>> {
        self.intervals.last()
    }

    pub fn iter(&self) -> Iter<'_, Interval<T>> {
        self.intervals.iter()
    }

    pub fn as_slice(&self) -> &[Interval<T>] {
        &self.intervals
    }

    pub fn into_vec(self) -> Vec<Interval<T>> {
        self.intervals
    }
}

impl<T> From<Vec<Interval<T>>> for Sequence<T> {
    fn from(intervals: Vec<Interval<T>>) -> Sequence<T> {
        Sequence { intervals }
    }
}

impl<T> FromIterator<Interval<T>> for Sequence<T>
where
    T: Instant,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Interval<T>>,
    {
        Sequence::coalesce(iter)
    }
}

impl<T> Index<usize> for Sequence<T> {
    type Output = Interval<T>;

    fn index(&self, index: usize) -> &Interval<T> {
        &self.intervals[index]
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = Interval<T>;
    type IntoIter = IntoIter<Interval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a Interval<T>;
    type IntoIter = Iter<'a, Interval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}
