use crate::instant::{Instant, Timestamp};
use crate::interval::Interval;
use crate::sequence::Sequence;

/// A flat list of intervals with an attached value each, kept sorted by
/// lower endpoint.
pub struct RangeIndex<V, T = Timestamp> {
    intervals: Vec<Interval<T>>,
    values: Vec<V>,
}

impl<V, T> RangeIndex<V, T>
where
    T: Instant,
{
    pub fn new() -> Self {
        Self {
            intervals: vec![],
            values: vec![],
        }
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn push<I>(&mut self, interval: I, value: V)
    where
        I: Into<Interval<T>>,
    {
        let interval = interval.into();
        // Equal lower endpoints keep insertion order.
        let at = self
            .intervals
            .partition_point(|other| !other.lower().after(&interval.lower()));
        self.intervals.insert(at, interval);
        self.values.insert(at, value);
    }

    /// Values whose interval is not disjoint from `window`, that is, could be
    /// fused with it.
    pub fn query<I>(&self, window: I) -> Vec<&V>
    where
        I: Into<Interval<T>>,
    {
        let window = window.into();
        self.scan(&window, |interval| !interval.is_disjoint(&window))
    }

    /// Values whose interval lies entirely within `window`.
    pub fn within<I>(&self, window: I) -> Vec<&V>
    where
        I: Into<Interval<T>>,
    {
        let window = window.into();
        self.scan(&window, |interval| window.contains(interval))
    }

    fn scan<F>(&self, window: &Interval<T>, matches: F) -> Vec<&V>
    where
        F: Fn(&Interval<T>) -> bool,
    {
        let mut output = vec![];

        for (i, interval) in self.intervals.iter().enumerate() {
            if interval.lower().after(&window.upper()) {
                break;
            }
            if matches(interval) {
                output.push(&self.values[i]);
            }
        }

        output
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Interval<T>, &V)> {
        self.intervals.iter().zip(self.values.iter())
    }

    /// The time covered by all intervals, coalesced.
    pub fn coverage(&self) -> Sequence<T> {
        self.intervals.iter().copied().collect()
    }
}

impl<V, T> Default for RangeIndex<V, T>
where
    T: Instant,
{
    fn default() -> Self {
        Self::new()
    }
}
