use std::fmt::{Debug, Display};
use std::ops::RangeInclusive;
use std::str::FromStr;

use num_traits::PrimInt;

use crate::RangeError;

/// Written between start and end of a span, e.g. `1~10`
pub const SPAN_SEPARATOR: char = '~';

/// A single point (`end` is `None`) or a closed span of integers.
///
/// `start <= end` is checked by [`PointRange::span`] and [`FromStr`], not when the fields are set directly.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "rkyv",
    derive(rkyv::Archive, rkyv::Serialize, rkyv::Deserialize)
)]
pub struct PointRange<T> {
    pub start: T,
    pub end: Option<T>,
}

impl<T: Debug> Debug for PointRange<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.end {
            Some(end) => f.write_fmt(format_args!("{:?}..={:?}", self.start, end)),
            None => f.write_fmt(format_args!("{:?}", self.start)),
        }
    }
}

impl<T: PrimInt> PointRange<T> {
    pub fn single(value: T) -> Self {
        Self {
            start: value,
            end: None,
        }
    }

    /// `start..=end`, collapsed to a single point if both are equal
    pub fn span(start: T, end: T) -> Result<Self, RangeError<T>>
    where
        T: Debug,
    {
        if start > end {
            Err(RangeError::Reversed { start, end })
        } else {
            Ok(Self::from_bounds(start, end))
        }
    }

    pub(crate) fn from_bounds(start: T, end: T) -> Self {
        Self {
            start,
            end: (start != end).then_some(end),
        }
    }

    /// Inclusive end, which is `start` for single points
    pub fn last(&self) -> T {
        self.end.unwrap_or(self.start)
    }

    pub fn is_single(&self) -> bool {
        self.end.is_none()
    }

    pub fn contains(&self, value: T) -> bool {
        self.start <= value && value <= self.last()
    }

    /// Touching endpoints overlap, `1~5` and `5~8` share the 5
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.last() && other.start <= self.last()
    }

    /// Number of integers covered, saturating at `usize::MAX`
    pub fn len(&self) -> usize {
        let (start, last) = (self.start, self.last());
        if start > last {
            return 0;
        }
        last.checked_sub(&start)
            .and_then(|distance| distance.to_usize())
            .map_or(usize::MAX, |distance| distance.saturating_add(1))
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Display> Display for PointRange<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.start)?;
        if let Some(end) = &self.end {
            write!(f, "{SPAN_SEPARATOR}{end}")?;
        }
        Ok(())
    }
}

impl<T: PrimInt + FromStr + Debug> FromStr for PointRange<T> {
    type Err = RangeError<T>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |part: &str| {
            part.trim()
                .parse::<T>()
                .map_err(|_| RangeError::Parse(s.to_owned()))
        };
        match s.split_once(SPAN_SEPARATOR) {
            Some((start, end)) => Self::span(parse(start)?, parse(end)?),
            None => parse(s).map(Self::single),
        }
    }
}

impl<T: PrimInt + Debug> TryFrom<RangeInclusive<T>> for PointRange<T> {
    type Error = RangeError<T>;

    fn try_from(value: RangeInclusive<T>) -> Result<Self, Self::Error> {
        let (start, end) = value.into_inner();
        Self::span(start, end)
    }
}

impl<T: PrimInt> From<PointRange<T>> for RangeInclusive<T> {
    fn from(value: PointRange<T>) -> Self {
        value.start..=value.last()
    }
}

/// Normalized form of a [`PointRange`] with both bounds present
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct InclusiveRange<T> {
    pub start: T,
    pub end: T,
}

impl<T: Debug> Debug for InclusiveRange<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{:?}..={:?}", self.start, self.end))
    }
}

impl<T: PrimInt> From<PointRange<T>> for InclusiveRange<T> {
    fn from(value: PointRange<T>) -> Self {
        Self {
            start: value.start,
            end: value.last(),
        }
    }
}

impl<T: PrimInt> InclusiveRange<T> {
    pub fn intersects(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// What is left of `self` after removing `cut`: the part before it and the part after it.
    /// A range not touched by `cut` is returned unchanged.
    pub fn carve(&self, cut: &Self) -> impl Iterator<Item = Self> + use<T> {
        let (before, after) = if self.intersects(cut) {
            // The comparisons guarantee cut.start > MIN and cut.end < MAX
            let before = (self.start < cut.start).then(|| Self {
                start: self.start,
                end: cut.start - T::one(),
            });
            let after = (self.end > cut.end).then(|| Self {
                start: cut.end + T::one(),
                end: self.end,
            });
            (before, after)
        } else {
            (Some(*self), None)
        };
        [before, after]
            .into_iter()
            .flatten()
            .filter(|piece| piece.start <= piece.end)
    }
}
