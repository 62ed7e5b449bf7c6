//! Integer ranges like `5` or `1~10`, as picked for a study session, and resolving overlaps
//! between them where the range entered last wins.
//!
//! ```
//! use rangecarve::{PointRange, has_conflict, resolve_conflicts};
//!
//! let ranges = [PointRange::span(1, 10)?, PointRange::span(5, 15)?];
//! assert!(has_conflict(&ranges));
//!
//! let resolved: Vec<PointRange<i64>> = resolve_conflicts(&ranges)
//!     .into_iter()
//!     .map(PointRange::from)
//!     .collect();
//! assert_eq!(vec![PointRange::span(1, 4)?, PointRange::span(5, 15)?], resolved);
//! assert!(!has_conflict(&resolved));
//! # Ok::<(), rangecarve::RangeError<i64>>(())
//! ```
mod error;
pub mod range;

pub use error::RangeError;
pub use range::{
    InclusiveRange, PointRange, RangeEntry, RangeList, ResolvedRange, StepRange, ValueBounds,
    has_conflict, resolve_conflicts, step_range, up_to,
};
