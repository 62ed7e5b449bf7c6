use std::collections::{BTreeMap, BTreeSet};

use proptest::prelude::*;
use rangecarve::{PointRange, ResolvedRange, has_conflict, resolve_conflicts};

fn arb_range() -> impl Strategy<Value = PointRange<i64>> {
    (0..60i64, prop::option::of(0..8i64)).prop_map(|(start, len)| PointRange {
        start,
        end: len.map(|len| start + len),
    })
}

fn arb_ranges() -> impl Strategy<Value = Vec<PointRange<i64>>> {
    prop::collection::vec(arb_range(), 0..12)
}

/// Ranges laid out left to right with gaps, then shuffled
fn arb_disjoint_ranges() -> impl Strategy<Value = Vec<PointRange<i64>>> {
    prop::collection::vec((1..5i64, prop::option::of(1..6i64)), 0..12)
        .prop_map(|layout| {
            let mut next_start = 0;
            layout
                .into_iter()
                .map(|(gap, len)| {
                    let start = next_start + gap;
                    let range = PointRange {
                        start,
                        end: len.map(|len| start + len),
                    };
                    next_start = range.last() + 1;
                    range
                })
                .collect::<Vec<_>>()
        })
        .prop_shuffle()
}

fn points(start: i64, last: i64) -> impl Iterator<Item = i64> {
    start..=last
}

/// For every covered point, the index of the last input range covering it
fn expected_owners(ranges: &[PointRange<i64>]) -> BTreeMap<i64, usize> {
    let mut owners = BTreeMap::new();
    for (order, range) in ranges.iter().enumerate() {
        for point in points(range.start, range.last()) {
            owners.insert(point, order);
        }
    }
    owners
}

fn resolved_owners(resolved: &[ResolvedRange<i64>]) -> BTreeMap<i64, Vec<usize>> {
    let mut owners: BTreeMap<i64, Vec<usize>> = BTreeMap::new();
    for range in resolved {
        for point in points(range.start, range.last()) {
            owners.entry(point).or_default().push(range.order);
        }
    }
    owners
}

proptest! {
    #[test]
    fn resolved_ranges_are_disjoint(ranges in arb_ranges()) {
        let resolved = resolve_conflicts(&ranges)
            .into_iter()
            .map(PointRange::from)
            .collect::<Vec<_>>();
        prop_assert!(!has_conflict(&resolved));
    }

    #[test]
    fn every_point_belongs_to_the_last_range_covering_it(ranges in arb_ranges()) {
        let expected = expected_owners(&ranges)
            .into_iter()
            .map(|(point, order)| (point, vec![order]))
            .collect::<BTreeMap<_, _>>();
        prop_assert_eq!(expected, resolved_owners(&resolve_conflicts(&ranges)));
    }

    #[test]
    fn covered_points_are_kept(ranges in arb_ranges()) {
        let before: BTreeSet<i64> = expected_owners(&ranges).into_keys().collect();
        let after: BTreeSet<i64> = resolved_owners(&resolve_conflicts(&ranges)).into_keys().collect();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn disjoint_input_is_unchanged(ranges in arb_disjoint_ranges()) {
        prop_assert!(!has_conflict(&ranges));
        let normalize = |ranges: &[PointRange<i64>]| {
            ranges
                .iter()
                .map(|range| (range.start, range.last()))
                .collect::<BTreeSet<_>>()
        };
        let resolved = resolve_conflicts(&ranges)
            .into_iter()
            .map(PointRange::from)
            .collect::<Vec<_>>();
        prop_assert_eq!(normalize(&ranges), normalize(&resolved));
    }

    #[test]
    fn output_is_ordered_by_input_index(ranges in arb_ranges()) {
        let resolved = resolve_conflicts(&ranges);
        prop_assert!(resolved.windows(2).all(|pair| pair[0].order <= pair[1].order));
        prop_assert!(resolved.iter().all(|range| range.order < ranges.len()));
    }

    #[test]
    fn single_points_carry_no_end(ranges in arb_ranges()) {
        for range in resolve_conflicts(&ranges) {
            prop_assert_eq!(range.is_single(), range.end.is_none());
            prop_assert!(range.end.is_none_or(|end| end > range.start));
        }
    }
}

#[test]
fn unsplit_point_survives_without_end() {
    let resolved = resolve_conflicts(&[PointRange::span(1, 3).unwrap(), PointRange::single(5)]);
    assert_eq!(
        vec![
            ResolvedRange {
                start: 1,
                end: Some(3),
                order: 0
            },
            ResolvedRange {
                start: 5,
                end: None,
                order: 1
            }
        ],
        resolved
    );
}
