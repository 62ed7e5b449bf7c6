///
/// Integer ranges as entered for study sessions, and resolving overlaps between them
///
mod assert_sorted_iter;
mod bounds;
mod conflict;
#[cfg(feature = "range-set-blaze-0_5")]
mod coverage;
mod list;
mod point;
mod resolve;
mod sequence;

pub use assert_sorted_iter::*;
pub use bounds::*;
pub use conflict::*;
#[cfg(feature = "range-set-blaze-0_5")]
pub use coverage::*;
pub use list::*;
pub use point::*;
pub use resolve::*;
pub use sequence::*;

/// A normalized range tagged with the index of the input it came from.
/// Higher orders win overlaps.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct PrioritizedRange<T> {
    pub order: usize,
    pub range: InclusiveRange<T>,
}

impl<T> PrioritizedRange<T> {
    /// Ascending in processing order, which is the highest order first
    pub fn comparator(&self) -> usize {
        usize::MAX - self.order
    }
}
