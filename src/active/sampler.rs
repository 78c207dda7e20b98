// Copyright (c) 2025 - Cowboy AI, Inc.
//! Sampler - Actives to Frames
//!
//! Turns an active into a finite, ordered list of values at a fixed rate.
//!
//! ```text
//! Constant v          →  [v]
//! Dynamic [s, e) f    →  [f(s), f(s + 1/r), f(s + 2/r), ...]   (every time < e)
//! ```
//!
//! Results are fully materialized and deterministic: sampling the same
//! active at the same rate twice yields the same list. Samples are
//! independent of each other, so [`simulate_par`] evaluates them on the
//! rayon pool and returns the same list as [`simulate`].

use super::core::{Active, Dynamic};
use super::era::Era;
use super::Time;
use crate::config::{validate_rate, SamplerConfig};
use crate::errors::{ActiveError, ActiveResult};
use rayon::prelude::*;
use tracing::{debug, warn};

/// Most frames a single sampling pass will produce
pub const MAX_FRAMES: usize = 1 << 26;

/// Sample `active` at `rate` samples per unit of time
///
/// # Errors
///
/// - `InvalidRate` when `rate` is not finite and positive
/// - `InvertedEra` when the era ends before it starts
/// - `UnboundedEra` when an era bound is not finite
/// - `TooManyFrames` when the era holds more than [`MAX_FRAMES`] samples
pub fn simulate<A>(rate: f64, active: &Active<A>) -> ActiveResult<Vec<A>>
where
    A: Clone + Send + Sync + 'static,
{
    sample_with(rate, active, |dynamic, times| {
        times.into_iter().map(|t| dynamic.sample(t)).collect()
    })
}

/// Like [`simulate`], evaluating samples in parallel
pub fn simulate_par<A>(rate: f64, active: &Active<A>) -> ActiveResult<Vec<A>>
where
    A: Clone + Send + Sync + 'static,
{
    sample_with(rate, active, |dynamic, times| {
        times.into_par_iter().map(|t| dynamic.sample(t)).collect()
    })
}

/// Times at which [`simulate`] evaluates `active`
///
/// A constant is sampled once, at `t = 0`.
pub fn sample_times<A>(rate: f64, active: &Active<A>) -> ActiveResult<Vec<Time>> {
    check_rate(rate)?;
    match active.era() {
        Some(era) => era_times(era, rate),
        None => Ok(vec![0.0]),
    }
}

fn sample_with<A, F>(rate: f64, active: &Active<A>, evaluate: F) -> ActiveResult<Vec<A>>
where
    A: Clone + Send + Sync + 'static,
    F: FnOnce(&Dynamic<A>, Vec<Time>) -> Vec<A>,
{
    check_rate(rate)?;
    match active {
        Active::Constant(value) => Ok(vec![value.clone()]),
        Active::Dynamic(dynamic) => {
            let times = era_times(dynamic.era(), rate)?;
            debug!("Sampling {} at rate {} ({} frames)", dynamic.era(), rate, times.len());
            let frames = evaluate(dynamic, times);
            debug!("Sampled {} frames", frames.len());
            Ok(frames)
        }
    }
}

fn check_rate(rate: f64) -> ActiveResult<()> {
    validate_rate(rate).inspect_err(|_| warn!("Rejecting sampling rate {}", rate))
}

/// `start, start + 1/rate, ...` strictly below `end`
fn era_times(era: Era, rate: f64) -> ActiveResult<Vec<Time>> {
    if !era.start.is_finite() || !era.end.is_finite() {
        warn!("Refusing to sample unbounded era {}", era);
        return Err(ActiveError::UnboundedEra {
            start: era.start,
            end: era.end,
        });
    }
    if era.is_inverted() {
        warn!("Refusing to sample inverted era {}", era);
        return Err(ActiveError::InvertedEra {
            start: era.start,
            end: era.end,
        });
    }

    let frames = (era.duration() * rate).ceil();
    if frames > MAX_FRAMES as f64 {
        warn!("Refusing to sample {} at rate {}: {} frames", era, rate, frames);
        return Err(ActiveError::TooManyFrames {
            frames,
            limit: MAX_FRAMES,
        });
    }

    let step = 1.0 / rate;
    let mut times = Vec::with_capacity(frames as usize);
    times.extend(
        (0u64..)
            .map(|i| era.start + i as f64 * step)
            .take_while(|&t| t < era.end),
    );
    Ok(times)
}

/// Samples actives according to a [`SamplerConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sampler {
    config: SamplerConfig,
}

impl Sampler {
    /// Create a sampler, rejecting an unusable rate up front
    pub fn new(config: SamplerConfig) -> ActiveResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Sample `active` sequentially or in parallel, as configured
    pub fn run<A>(&self, active: &Active<A>) -> ActiveResult<Vec<A>>
    where
        A: Clone + Send + Sync + 'static,
    {
        if self.config.parallel {
            simulate_par(self.config.rate, active)
        } else {
            simulate(self.config.rate, active)
        }
    }

    /// Times the sampler would evaluate `active` at
    pub fn times<A>(&self, active: &Active<A>) -> ActiveResult<Vec<Time>> {
        sample_times(self.config.rate, active)
    }
}
