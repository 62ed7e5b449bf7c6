use std::fmt::{Debug, Display};
use std::iter::FusedIterator;

use num_traits::PrimInt;

use crate::RangeError;

/// Lazy arithmetic sequence `start, start + step, ...` stopping before `stop`.
///
/// Ends early instead of overflowing `T`.
#[derive(Debug, Clone)]
pub struct StepRange<T> {
    current: T,
    stop: T,
    step: T,
    done: bool,
}

/// Values from `start` towards `stop` (exclusive). A negative `step` counts down.
pub fn step_range<T: PrimInt + Debug>(
    start: T,
    stop: T,
    step: T,
) -> Result<StepRange<T>, RangeError<T>> {
    if step.is_zero() {
        return Err(RangeError::ZeroStep);
    }
    Ok(StepRange {
        current: start,
        stop,
        step,
        done: false,
    })
}

/// `0, 1, ..., stop - 1`
pub fn up_to<T: PrimInt>(stop: T) -> StepRange<T> {
    StepRange {
        current: T::zero(),
        stop,
        step: T::one(),
        done: false,
    }
}

impl<T: PrimInt> StepRange<T> {
    pub fn to_strings(self) -> Vec<String>
    where
        T: Display,
    {
        self.map(|value| value.to_string()).collect()
    }
}

impl<T: PrimInt> Iterator for StepRange<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let ascending = self.step > T::zero();
        if (ascending && self.current >= self.stop) || (!ascending && self.current <= self.stop) {
            self.done = true;
            return None;
        }
        let value = self.current;
        match self.current.checked_add(&self.step) {
            Some(next) => self.current = next,
            None => self.done = true,
        }
        Some(value)
    }
}

impl<T: PrimInt> FusedIterator for StepRange<T> {}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn counts_up_from_zero() {
        assert_eq!(vec![0, 1, 2, 3], up_to(4).collect_vec());
        assert_eq!(0, up_to(0).count());
        assert_eq!(0, up_to(-3).count());
    }

    #[test]
    fn steps_up_and_down() -> TestResult {
        assert_eq!(vec![1, 4, 7], step_range(1, 10, 3)?.collect_vec());
        assert_eq!(vec![10, 8, 6, 4, 2], step_range(10, 0, -2)?.collect_vec());
        assert_eq!(0, step_range(1, 10, -1)?.count());
        Ok(())
    }

    #[test]
    fn zero_step_is_rejected() {
        assert_eq!(Some(RangeError::ZeroStep), step_range(1, 10, 0).err());
    }

    #[test]
    fn stops_before_overflow() -> TestResult {
        assert_eq!(vec![250, 253], step_range(250u8, u8::MAX, 3)?.collect_vec());
        assert_eq!(vec![120, 125], step_range(120i8, i8::MAX, 5)?.collect_vec());
        assert_eq!(vec![-120, -125], step_range(-120i8, i8::MIN, -5)?.collect_vec());
        Ok(())
    }

    #[test]
    fn strings() -> TestResult {
        assert_eq!(vec!["3", "5"], step_range(3, 7, 2)?.to_strings());
        Ok(())
    }
}
