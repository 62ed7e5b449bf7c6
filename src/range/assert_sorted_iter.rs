use std::fmt::Debug;
use std::iter::FusedIterator;

/// Yields the items of `iter` unchanged. With debug assertions enabled it panics as soon as `key`
/// of an item is smaller than the key of the item before.
#[cfg_attr(not(debug_assertions), allow(dead_code))]
pub struct DebugAssertSortedIter<TIter, TFn, TOrd> {
    iter: TIter,
    last_key: Option<TOrd>,
    key: TFn,
}

impl<TIter, TFn, TOrd> DebugAssertSortedIter<TIter, TFn, TOrd> {
    pub fn new(iter: TIter, key: TFn) -> Self {
        Self {
            iter,
            last_key: None,
            key,
        }
    }
}

impl<TIter: Iterator, TFn: Fn(&TIter::Item) -> TOrd, TOrd: Ord + Debug> Iterator
    for DebugAssertSortedIter<TIter, TFn, TOrd>
{
    type Item = TIter::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next()?;
        #[cfg(debug_assertions)]
        {
            let key = (self.key)(&item);
            if let Some(last_key) = self.last_key.take() {
                assert!(key >= last_key, "{key:?} after {last_key:?}");
            }
            self.last_key = Some(key);
        }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<TIter: FusedIterator, TFn: Fn(&TIter::Item) -> TOrd, TOrd: Ord + Debug> FusedIterator
    for DebugAssertSortedIter<TIter, TFn, TOrd>
{
}
