use std::fmt::Debug;
use std::str::FromStr;

use num_traits::PrimInt;
use tracing::{debug, trace};

use super::{PointRange, ValueBounds, has_conflict, resolve_conflicts};
use crate::RangeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeEntry<T> {
    pub id: usize,
    pub range: PointRange<T>,
}

/// Ranges in the order they were entered, each with an id to remove it by
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeList<T> {
    entries: Vec<RangeEntry<T>>,
}

impl<T> Default for RangeList<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T: PrimInt + Debug> RangeList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `range` and returns its id, which is one more than the largest id in use
    pub fn push(&mut self, range: PointRange<T>) -> usize {
        let id = self
            .entries
            .iter()
            .map(|entry| entry.id)
            .max()
            .map_or(1, |max| max + 1);
        trace!(id, ?range, "range added");
        self.entries.push(RangeEntry { id, range });
        id
    }

    pub fn push_span(
        &mut self,
        bounds: &ValueBounds<T>,
        start: T,
        end: T,
    ) -> Result<usize, RangeError<T>> {
        let range = bounds.span(start, end)?;
        Ok(self.push(range))
    }

    /// Adds every value of a list like `1, 5, 8` as a single point
    pub fn push_individual(&mut self, bounds: &ValueBounds<T>, text: &str) -> Vec<usize>
    where
        T: FromStr,
    {
        bounds
            .parse_individual(text)
            .into_iter()
            .map(|value| self.push(PointRange::single(value)))
            .collect()
    }

    pub fn remove(&mut self, id: usize) -> Option<PointRange<T>> {
        let idx = self.entries.iter().position(|entry| entry.id == id)?;
        Some(self.entries.remove(idx).range)
    }

    pub fn get(&self, id: usize) -> Option<&PointRange<T>> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.range)
    }

    pub fn ranges(&self) -> Vec<PointRange<T>> {
        self.entries.iter().map(|entry| entry.range).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RangeEntry<T>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has_conflict(&self) -> bool {
        has_conflict(&self.ranges())
    }

    /// Replaces the ranges by their conflict free version. Ids are reassigned from 0.
    pub fn resolve_conflicts(&mut self) {
        let resolved = resolve_conflicts(&self.ranges());
        debug!(
            before = self.entries.len(),
            after = resolved.len(),
            "range list resolved"
        );
        self.entries = resolved
            .into_iter()
            .enumerate()
            .map(|(id, range)| RangeEntry {
                id,
                range: range.into(),
            })
            .collect();
    }
}

impl<T: PrimInt + Debug> FromIterator<PointRange<T>> for RangeList<T> {
    fn from_iter<I: IntoIterator<Item = PointRange<T>>>(iter: I) -> Self {
        let mut list = Self::new();
        for range in iter {
            list.push(range);
        }
        list
    }
}

impl<'a, T> IntoIterator for &'a RangeList<T> {
    type Item = &'a RangeEntry<T>;
    type IntoIter = std::slice::Iter<'a, RangeEntry<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
