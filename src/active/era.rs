// Copyright (c) 2025 - Cowboy AI, Inc.
//! Era - Bounded Time Intervals
//!
//! An `Era` is the span of time over which a dynamic active value is
//! meaningful. Eras combine by taking their bounding span:
//!
//! ```text
//! Era(s1, e1) <> Era(s2, e2) = Era(min(s1, s2), max(e1, e2))
//!
//!   [s1 ──── e1]
//!                    [s2 ──── e2]
//!   [s1 ───────────────────── e2]      (gap is covered)
//! ```
//!
//! There is no era representing "no time", so eras form a semigroup and not
//! a monoid. `start <= end` is not enforced at construction; the sampler
//! rejects inverted eras when asked to walk them.

use super::monoid::Semigroup;
use super::{Duration, Time};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Time interval from `start` to `end`, sampled as `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Era {
    pub start: Time,
    pub end: Time,
}

impl Era {
    /// Create an era without validating the bounds
    pub fn new(start: Time, end: Time) -> Self {
        Self { start, end }
    }

    /// `end - start`; negative for an inverted era
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// True when `end < start`
    pub fn is_inverted(&self) -> bool {
        self.end < self.start
    }

    /// True when `t` lies in the half-open span `[start, end)`
    pub fn contains(&self, t: Time) -> bool {
        self.start <= t && t < self.end
    }

    /// Same duration, moved by `offset`
    pub fn shifted(&self, offset: Duration) -> Self {
        Self::new(self.start + offset, self.end + offset)
    }
}

impl Semigroup for Era {
    fn combine(self, other: Self) -> Self {
        Self::new(self.start.min(other.start), self.end.max(other.end))
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Combine two optional eras; an absent era contributes nothing
pub(crate) fn combine_optional(a: Option<Era>, b: Option<Era>) -> Option<Era> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.combine(b)),
        (Some(era), None) | (None, Some(era)) => Some(era),
        (None, None) => None,
    }
}
