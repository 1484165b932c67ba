//! Fully-closed time intervals and stepped iteration over them.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::iter::FusedIterator;
use thiserror::Error;

/// Error when a range's lower bound would exceed its upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid time range: start {start} is after end {end}")]
pub struct InvalidRangeError {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Error when a stepped iteration is requested with a non-positive step.
///
/// A zero or negative step would never advance past the end of the range,
/// so it is rejected up front instead of looping forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("iteration step must be positive (got {step})")]
pub struct InvalidStepError {
    pub step: TimeDelta,
}

#[derive(Deserialize)]
struct RawInclusiveRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

/// A time interval closed on both ends: `[start, end]`.
///
/// Invariant: `start <= end` (enforced via `#[serde(try_from)]` at the
/// deserialization boundary and by the constructors). A zero-width range
/// where `start == end` is valid and represents a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawInclusiveRange")]
pub struct InclusiveRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TryFrom<RawInclusiveRange> for InclusiveRange {
    type Error = InvalidRangeError;

    fn try_from(raw: RawInclusiveRange) -> Result<Self, Self::Error> {
        Self::try_new(raw.start, raw.end)
    }
}

impl InclusiveRange {
    /// Create a closed range, failing if `start` is after `end`.
    pub fn try_new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, InvalidRangeError> {
        if start > end {
            return Err(InvalidRangeError { start, end });
        }
        Ok(Self { start, end })
    }

    /// Create a closed range, treating an inverted pair as a logic bug.
    ///
    /// # Panics
    ///
    /// Panics if `start` is after `end`. Use [`InclusiveRange::try_new`]
    /// when the bounds come from input you do not control.
    #[must_use]
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        match Self::try_new(start, end) {
            Ok(range) => range,
            Err(err) => panic!("{err}"),
        }
    }

    #[must_use]
    pub const fn start(self) -> DateTime<Utc> {
        self.start
    }

    #[must_use]
    pub const fn end(self) -> DateTime<Utc> {
        self.end
    }

    /// Whether `t` lies inside the range. Both boundary instants count.
    #[must_use]
    pub fn contains(self, t: DateTime<Utc>) -> bool {
        self.start <= t && t <= self.end
    }

    /// Whether `t` is strictly before the start.
    ///
    /// Boundary instants satisfy [`InclusiveRange::contains`] and neither
    /// this nor [`InclusiveRange::is_after_end`]; the three are not
    /// complements at the boundary because the range is fully closed.
    #[must_use]
    pub fn is_before_start(self, t: DateTime<Utc>) -> bool {
        t < self.start
    }

    /// Whether `t` is strictly after the end.
    #[must_use]
    pub fn is_after_end(self, t: DateTime<Utc>) -> bool {
        t > self.end
    }

    /// Iterate `start, start + step, start + 2*step, ...` up to and
    /// including the last instant `<= end`.
    ///
    /// Rejects `step <= 0`, which would never terminate. Each call returns
    /// a fresh, independent iterator; dropping it early is the only
    /// cancellation needed.
    pub fn iter_by(self, step: TimeDelta) -> Result<InclusiveRangeIter, InvalidStepError> {
        if step <= TimeDelta::zero() {
            return Err(InvalidStepError { step });
        }
        Ok(InclusiveRangeIter {
            next: Some(self.start),
            end: self.end,
            step,
        })
    }
}

/// Lazy stepped iterator over an [`InclusiveRange`].
///
/// Owns its cursor; cloning yields an independent iterator positioned at
/// the same instant.
#[derive(Debug, Clone)]
pub struct InclusiveRangeIter {
    next: Option<DateTime<Utc>>,
    end: DateTime<Utc>,
    step: TimeDelta,
}

impl Iterator for InclusiveRangeIter {
    type Item = DateTime<Utc>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        if current > self.end {
            self.next = None;
            return None;
        }
        // An unrepresentable next instant ends iteration instead of panicking.
        self.next = current.checked_add_signed(self.step);
        Some(current)
    }
}

impl FusedIterator for InclusiveRangeIter {}
