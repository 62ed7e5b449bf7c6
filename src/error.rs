#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError<T> {
    #[error("{0:?} is neither a number nor a `start~end` range")]
    Parse(String),
    #[error("{start:?}~{end:?} starts after it ends")]
    Reversed { start: T, end: T },
    #[error("{value:?} is outside of {min:?}..={max:?}")]
    OutOfBounds { value: T, min: T, max: T },
    #[error("step cannot be zero")]
    ZeroStep,
}
