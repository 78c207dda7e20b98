// Copyright (c) 2025 - Cowboy AI, Inc.
//! Time Transformations
//!
//! Operations that reparametrize or restrict the time domain of an active.
//! Constants have no era and pass through every transformation unchanged.
//!
//! ```text
//! shift(a, d):    era [s, e]   →  [s + d, e + d]       sample t → a(t - d)
//! stretch(a, k):  era [s, e]   →  [s, s + k(e - s)]    sample t → a(s + (t - s) / k)
//! trim_before(a): sample t → empty  for t < s
//! trim_after(a):  sample t → empty  for t > e
//! at_time(a, t):  shift(a, t - s)
//! after(a, b):    at_time(a, end(b))
//! ```

use super::core::{Active, Dynamic};
use super::era::Era;
use super::monoid::Monoid;
use super::{Duration, Time};
use crate::errors::{ActiveError, ActiveResult};
use tracing::warn;

impl<A: Clone + Send + Sync + 'static> Active<A> {
    /// Move the active `offset` later in time
    pub fn shift(self, offset: Duration) -> Self {
        self.on_active(Active::Constant, |dynamic| {
            Active::Dynamic(dynamic.shifted(offset))
        })
    }

    /// Dilate time around the era's start by `factor`
    ///
    /// # Errors
    ///
    /// `InvalidStretchFactor` when `factor` is zero or not finite.
    pub fn stretch(self, factor: f64) -> ActiveResult<Self> {
        if factor == 0.0 || !factor.is_finite() {
            warn!("Rejecting stretch factor {}", factor);
            return Err(ActiveError::InvalidStretchFactor(factor));
        }

        Ok(self.on_active(Active::Constant, |dynamic| {
            let era = dynamic.era();
            let start = era.start;
            let stretched = Era::new(start, start + factor * era.duration());
            let sample = dynamic.sample_fn();
            Active::Dynamic(Dynamic::new(stretched, move |t| {
                sample(start + (t - start) / factor)
            }))
        }))
    }

    /// Move the active so its era starts at `t`
    pub fn at_time(self, t: Time) -> Self {
        match self.era() {
            Some(era) => self.shift(t - era.start),
            None => self,
        }
    }

    /// Move the active so it starts where `other` ends
    ///
    /// `other` only supplies the timing reference and is not part of the
    /// result. A constant `other` has no end, so `self` is returned as is.
    pub fn after<B>(self, other: &Active<B>) -> Self {
        match other.era() {
            Some(era) => self.at_time(era.end),
            None => self,
        }
    }
}

impl<M: Monoid + Clone + Send + Sync + 'static> Active<M> {
    /// Replace every value before the era's start with `empty()`
    pub fn trim_before(self) -> Self {
        self.on_active(Active::Constant, |dynamic| {
            let start = dynamic.era().start;
            let sample = dynamic.sample_fn();
            Active::Dynamic(Dynamic::new(dynamic.era(), move |t| {
                if t < start {
                    M::empty()
                } else {
                    sample(t)
                }
            }))
        })
    }

    /// Replace every value after the era's end with `empty()`
    pub fn trim_after(self) -> Self {
        self.on_active(Active::Constant, |dynamic| {
            let end = dynamic.era().end;
            let sample = dynamic.sample_fn();
            Active::Dynamic(Dynamic::new(dynamic.era(), move |t| {
                if t > end {
                    M::empty()
                } else {
                    sample(t)
                }
            }))
        })
    }

    /// Both trims: `empty()` everywhere outside the era
    pub fn trim(self) -> Self {
        self.trim_before().trim_after()
    }
}
