//! Time intervals with independently configurable boundary inclusivity.
//!
//! A [`BoundedRange`] normalizes an open endpoint by nudging it inward by
//! one tick (1 nanosecond), so validation and every containment query
//! reduce to closed-interval comparisons against the nudged values. The
//! raw endpoints are kept verbatim for the accessors.

use crate::range::{InclusiveRange, InvalidRangeError};
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Smallest representable time increment; an open endpoint sits one tick
/// outside the range.
const TICK: TimeDelta = TimeDelta::nanoseconds(1);

/// Whether an endpoint itself belongs to the range.
///
/// An enum rather than a bool so a future boundary kind (e.g. an unbounded
/// side) turns every match site into a compile error instead of a silent
/// misread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoundKind {
    /// The endpoint is inside the range.
    Closed,
    /// The endpoint is excluded; the range starts or ends one tick inside.
    Open,
}

impl BoundKind {
    #[must_use]
    pub const fn is_closed(self) -> bool {
        matches!(self, BoundKind::Closed)
    }

    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, BoundKind::Open)
    }
}

#[derive(Deserialize)]
struct RawBoundedRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    start_bound: BoundKind,
    end_bound: BoundKind,
}

/// A time interval whose endpoints are independently open or closed.
///
/// Invariant: after nudging each open side inward by one tick, the
/// effective lower bound is `<=` the effective upper bound and both nudged
/// instants are representable. Enforced by the constructors and via
/// `#[serde(try_from)]` at the deserialization boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoundedRange")]
pub struct BoundedRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    start_bound: BoundKind,
    end_bound: BoundKind,
}

impl TryFrom<RawBoundedRange> for BoundedRange {
    type Error = InvalidRangeError;

    fn try_from(raw: RawBoundedRange) -> Result<Self, Self::Error> {
        Self::try_new(raw.start, raw.end, raw.start_bound, raw.end_bound)
    }
}

/// Earliest instant inside a range starting at `start` with `bound`.
/// `None` when the nudge leaves the representable domain.
fn effective_start(start: DateTime<Utc>, bound: BoundKind) -> Option<DateTime<Utc>> {
    match bound {
        BoundKind::Closed => Some(start),
        BoundKind::Open => start.checked_add_signed(TICK),
    }
}

/// Latest instant inside a range ending at `end` with `bound`.
fn effective_end(end: DateTime<Utc>, bound: BoundKind) -> Option<DateTime<Utc>> {
    match bound {
        BoundKind::Closed => Some(end),
        BoundKind::Open => end.checked_sub_signed(TICK),
    }
}

impl BoundedRange {
    /// Create a range, failing if it would contain no instant.
    ///
    /// A range is empty when the effective lower bound (after nudging an
    /// open start inward) exceeds the effective upper bound, or when a
    /// nudge falls outside the representable time domain.
    pub fn try_new(
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        start_bound: BoundKind,
        end_bound: BoundKind,
    ) -> Result<Self, InvalidRangeError> {
        match (effective_start(start, start_bound), effective_end(end, end_bound)) {
            (Some(lo), Some(hi)) if lo <= hi => Ok(Self {
                start,
                end,
                start_bound,
                end_bound,
            }),
            _ => Err(InvalidRangeError { start, end }),
        }
    }

    /// Create a range, treating emptiness as a logic bug.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions [`BoundedRange::try_new`] fails.
    #[must_use]
    pub fn new(
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        start_bound: BoundKind,
        end_bound: BoundKind,
    ) -> Self {
        match Self::try_new(start, end, start_bound, end_bound) {
            Ok(range) => range,
            Err(err) => panic!("{err}"),
        }
    }

    /// The raw start endpoint, exactly as supplied.
    #[must_use]
    pub const fn start(self) -> DateTime<Utc> {
        self.start
    }

    /// The raw end endpoint, exactly as supplied.
    #[must_use]
    pub const fn end(self) -> DateTime<Utc> {
        self.end
    }

    /// The earliest instant actually inside the range.
    #[must_use]
    pub fn inclusive_start(self) -> DateTime<Utc> {
        match self.start_bound {
            BoundKind::Closed => self.start,
            // The nudge was proven representable at construction.
            BoundKind::Open => self.start + TICK,
        }
    }

    /// The latest instant actually inside the range.
    #[must_use]
    pub fn inclusive_end(self) -> DateTime<Utc> {
        match self.end_bound {
            BoundKind::Closed => self.end,
            BoundKind::Open => self.end - TICK,
        }
    }

    #[must_use]
    pub const fn start_bound(self) -> BoundKind {
        self.start_bound
    }

    #[must_use]
    pub const fn end_bound(self) -> BoundKind {
        self.end_bound
    }

    #[must_use]
    pub const fn is_start_inclusive(self) -> bool {
        self.start_bound.is_closed()
    }

    #[must_use]
    pub const fn is_end_inclusive(self) -> bool {
        self.end_bound.is_closed()
    }

    /// Whether `t` falls outside the range on the start side.
    ///
    /// With an open start the boundary instant itself counts as outside.
    #[must_use]
    pub fn is_before_start(self, t: DateTime<Utc>) -> bool {
        match self.start_bound {
            BoundKind::Closed => t < self.start,
            BoundKind::Open => t <= self.start,
        }
    }

    /// Whether `t` falls outside the range on the end side.
    #[must_use]
    pub fn is_after_end(self, t: DateTime<Utc>) -> bool {
        match self.end_bound {
            BoundKind::Closed => t > self.end,
            BoundKind::Open => t >= self.end,
        }
    }

    /// Whether `t` lies inside the range, honoring each side's bound.
    ///
    /// Defined as `!is_before_start && !is_after_end` so the predicate can
    /// never disagree with the two classification queries.
    #[must_use]
    pub fn contains(self, t: DateTime<Utc>) -> bool {
        !self.is_before_start(t) && !self.is_after_end(t)
    }

    /// Convert to the closed range with identical membership.
    ///
    /// The failure arm is unreachable for a validated range, but the
    /// constructor's check is propagated rather than assumed away.
    pub fn to_inclusive(self) -> Result<InclusiveRange, InvalidRangeError> {
        InclusiveRange::try_new(self.inclusive_start(), self.inclusive_end())
    }
}

impl TryFrom<BoundedRange> for InclusiveRange {
    type Error = InvalidRangeError;

    fn try_from(range: BoundedRange) -> Result<Self, Self::Error> {
        range.to_inclusive()
    }
}
