use std::fmt::Debug;

use itertools::Itertools;
use num_traits::PrimInt;
use tracing::{debug, trace};

use super::{DebugAssertSortedIter, InclusiveRange, PointRange, PrioritizedRange};

/// A piece of an input range which survived [`resolve_conflicts`].
///
/// `order` is the index of the input range it was cut from. A range split by later ranges
/// yields several pieces with the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "rkyv",
    derive(rkyv::Archive, rkyv::Serialize, rkyv::Deserialize)
)]
pub struct ResolvedRange<T> {
    pub start: T,
    /// `None` if the piece is a single point
    pub end: Option<T>,
    pub order: usize,
}

impl<T: PrimInt> ResolvedRange<T> {
    pub fn is_single(&self) -> bool {
        self.end.is_none()
    }

    pub fn last(&self) -> T {
        self.end.unwrap_or(self.start)
    }

    pub fn into_point_range(self) -> PointRange<T> {
        PointRange {
            start: self.start,
            end: self.end,
        }
    }
}

impl<T: PrimInt> From<ResolvedRange<T>> for PointRange<T> {
    fn from(value: ResolvedRange<T>) -> Self {
        value.into_point_range()
    }
}

impl<T: PrimInt> From<PrioritizedRange<T>> for ResolvedRange<T> {
    fn from(value: PrioritizedRange<T>) -> Self {
        let PointRange { start, end } =
            PointRange::from_bounds(value.range.start, value.range.end);
        ResolvedRange {
            start,
            end,
            order: value.order,
        }
    }
}

///
/// Removes overlaps, where later ranges win over earlier ones.
///
/// Each range keeps only the points none of the ranges after it covers, which may split it into
/// several pieces. The result is ordered by the index of the range a piece was cut from.
/// Ranges with `start > end` are not rejected and give meaningless results.
///
pub fn resolve_conflicts<T: PrimInt + Debug>(ranges: &[PointRange<T>]) -> Vec<ResolvedRange<T>> {
    let by_priority = ranges
        .iter()
        .enumerate()
        .rev()
        .map(|(order, range)| PrioritizedRange {
            order,
            range: InclusiveRange::from(*range),
        });

    // Disjoint, in the order they were resolved
    let mut resolved: Vec<PrioritizedRange<T>> = Vec::with_capacity(ranges.len());
    for next in DebugAssertSortedIter::new(by_priority, PrioritizedRange::comparator) {
        let pieces = carve_out(next, &resolved);
        if pieces.is_empty() {
            trace!(order = next.order, range = ?next.range, "range is covered by later ranges");
        }
        resolved.extend(pieces);
    }
    resolved.sort_by_key(|item| item.order);

    let result = DebugAssertSortedIter::new(resolved.into_iter(), |x: &PrioritizedRange<T>| {
        x.order
    })
    .map(ResolvedRange::from)
    .collect_vec();
    debug!(
        input = ranges.len(),
        output = result.len(),
        "resolved range conflicts"
    );
    result
}

/// Cuts every range in `winners` out of `item`, in the order of `winners`
fn carve_out<T: PrimInt>(
    item: PrioritizedRange<T>,
    winners: &[PrioritizedRange<T>],
) -> Vec<PrioritizedRange<T>> {
    let mut segments = vec![item.range];
    for winner in winners {
        if segments.is_empty() {
            break;
        }
        segments = segments
            .iter()
            .flat_map(|segment| segment.carve(&winner.range))
            .collect();
    }
    segments
        .into_iter()
        .map(|range| PrioritizedRange {
            order: item.order,
            range,
        })
        .collect()
}
