use std::fmt::Debug;

use itertools::Itertools;
use num_traits::PrimInt;

use super::{DebugAssertSortedIter, InclusiveRange, PointRange};

/// True if any two ranges share at least one point.
///
/// Sorted by start, a range can only overlap its predecessor unless an earlier pair overlapped
/// already, so checking neighbours is enough.
pub fn has_conflict<T: PrimInt + Debug>(ranges: &[PointRange<T>]) -> bool {
    let by_start = ranges
        .iter()
        .map(|range| InclusiveRange::from(*range))
        .sorted_by_key(|range| range.start);
    DebugAssertSortedIter::new(by_start, |x: &InclusiveRange<T>| x.start)
        .tuple_windows()
        .any(|(previous, current)| current.start <= previous.end)
}
