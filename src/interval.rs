use std::{cmp::Ordering, fmt, ops::Range};

use thiserror::Error;

/// The error returned when constructing an [`Interval`] whose `end` precedes
/// its `start`.
///
/// An inverted interval is never clamped or swapped; construction is the
/// single validation surface, and it fails loudly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid interval: end cannot be before start")]
pub struct InvalidInterval;

/// A totally-ordered interval `[start, end]` over a totally-ordered point
/// type `T`.
///
/// An [`Interval`] is ordered by its start point, tie-broken with its end
/// point. Two intervals are equal only when both endpoints are equal. This
/// (start, end) lexicographic order, not containment or overlap, is what a
/// [`TemporalTree`] keys on.
///
/// Construction enforces `start <= end`; a zero-length interval
/// (`start == end`) is valid.
///
/// [`TemporalTree`]: crate::TemporalTree
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Interval<T> {
    start: T,
    end: T,
}

impl<T> Interval<T>
where
    T: Ord,
{
    /// Construct an interval spanning `start` to `end`, inclusive of both
    /// endpoints.
    ///
    /// Returns [`InvalidInterval`] if `end` precedes `start`.
    pub fn new(start: T, end: T) -> Result<Self, InvalidInterval> {
        if start > end {
            return Err(InvalidInterval);
        }

        Ok(Self { start, end })
    }

    /// The inclusive lower bound of this interval.
    pub fn start(&self) -> &T {
        &self.start
    }

    /// The inclusive upper bound of this interval.
    pub fn end(&self) -> &T {
        &self.end
    }

    /// Destructure this interval into its `(start, end)` endpoints.
    pub fn into_parts(self) -> (T, T) {
        (self.start, self.end)
    }

    /// Returns true if this interval ends strictly before `other` starts.
    ///
    /// This is whole-interval order, stricter than the (start, end)
    /// lexicographic order: two overlapping intervals are neither before nor
    /// after each other.
    pub fn is_before(&self, other: &Self) -> bool {
        self.end < other.start
    }

    /// Returns true if this interval starts strictly after `other` ends.
    pub fn is_after(&self, other: &Self) -> bool {
        self.start > other.end
    }

    /// Returns true if `other` lies entirely within this interval, endpoints
    /// inclusive.
    pub fn contains(&self, other: &Self) -> bool {
        self.start <= other.start && self.end >= other.end
    }

    /// Returns true if `point` lies within this interval, endpoints
    /// inclusive.
    pub fn contains_point(&self, point: &T) -> bool {
        self.start <= *point && self.end >= *point
    }

    /// Returns true if this interval and `other` share more than a single
    /// point.
    ///
    /// Intervals that merely touch at an endpoint do not overlap; use
    /// [`Interval::overlaps_inclusive`] to count those as overlapping.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// Returns true if this interval and `other` share at least one point,
    /// endpoints inclusive.
    pub fn overlaps_inclusive(&self, other: &Self) -> bool {
        self.start <= other.end && self.end >= other.start
    }
}

impl<T> PartialOrd for Interval<T>
where
    T: Ord,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Interval<T>
where
    T: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        // The lower bound is the primary ordering value, falling back to the
        // upper bound when the lower bounds are equal.
        match self.start.cmp(&other.start) {
            Ordering::Equal => self.end.cmp(&other.end),
            v => v,
        }
    }
}

impl<T> TryFrom<(T, T)> for Interval<T>
where
    T: Ord,
{
    type Error = InvalidInterval;

    fn try_from((start, end): (T, T)) -> Result<Self, Self::Error> {
        Self::new(start, end)
    }
}

impl<T> TryFrom<Range<T>> for Interval<T>
where
    T: Ord,
{
    type Error = InvalidInterval;

    /// Convert from a [`Range`], using the range endpoints verbatim.
    ///
    /// Note the resulting interval is endpoint-inclusive, unlike the
    /// half-open `Range`.
    fn try_from(value: Range<T>) -> Result<Self, Self::Error> {
        Self::new(value.start, value.end)
    }
}

impl<T> fmt::Display for Interval<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}
