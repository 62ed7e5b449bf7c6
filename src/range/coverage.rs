use range_set_blaze_0_5::RangeSetBlaze;

use super::PointRange;

/// All points covered by at least one of `ranges`
pub fn covered_points(ranges: &[PointRange<i64>]) -> RangeSetBlaze<i64> {
    ranges.iter().map(|range| range.start..=range.last()).collect()
}
