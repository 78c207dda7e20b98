// Copyright (c) 2025 - Cowboy AI, Inc.
//! Render Pipeline Seams
//!
//! The crate does not rasterize or encode anything. It samples an active and
//! hands each value to a [`FrameRenderer`], then passes the ordered frames and
//! the rate to a [`FrameEncoder`]:
//!
//! ```text
//! Active<A> ──simulate──> [A] ──render──> [Frame] ──encode──> artifact
//! ```
//!
//! # Example
//!
//! ```rust
//! use cim_active::active::{interval, Sampler};
//! use cim_active::config::SamplerConfig;
//! use cim_active::render::{render_animation, FrameEncoder};
//! use cim_active::ActiveResult;
//!
//! #[derive(Default)]
//! struct Collect(Vec<String>);
//!
//! impl FrameEncoder<String> for Collect {
//!     fn encode(&mut self, frames: Vec<String>, _rate: f64) -> ActiveResult<()> {
//!         self.0 = frames;
//!         Ok(())
//!     }
//! }
//!
//! let sampler = Sampler::new(SamplerConfig::new(2.0)).unwrap();
//! let mut renderer = |t: &f64| -> ActiveResult<String> { Ok(format!("t={t}")) };
//! let mut encoder = Collect::default();
//!
//! let count = render_animation(&interval(0.0, 1.0), &sampler, &mut renderer, &mut encoder).unwrap();
//! assert_eq!(count, 2);
//! assert_eq!(encoder.0, vec!["t=0", "t=0.5"]);
//! ```

use crate::active::{Active, Sampler};
use crate::errors::ActiveResult;
use tracing::{debug, info};

/// Turns one sampled value into a frame
pub trait FrameRenderer<A> {
    type Frame;

    fn render(&mut self, value: &A) -> ActiveResult<Self::Frame>;
}

impl<A, T, F> FrameRenderer<A> for F
where
    F: FnMut(&A) -> ActiveResult<T>,
{
    type Frame = T;

    fn render(&mut self, value: &A) -> ActiveResult<T> {
        self(value)
    }
}

/// Writes an ordered list of frames played back at `rate`
pub trait FrameEncoder<F> {
    fn encode(&mut self, frames: Vec<F>, rate: f64) -> ActiveResult<()>;
}

/// Sample, render and encode an active; returns the number of frames
///
/// Stops at the first render or encode failure.
pub fn render_animation<A, R, E>(
    active: &Active<A>,
    sampler: &Sampler,
    renderer: &mut R,
    encoder: &mut E,
) -> ActiveResult<usize>
where
    A: Clone + Send + Sync + 'static,
    R: FrameRenderer<A>,
    E: FrameEncoder<R::Frame>,
{
    let values = sampler.run(active)?;
    debug!("Rendering {} sampled values", values.len());

    let frames = values
        .iter()
        .map(|value| renderer.render(value))
        .collect::<ActiveResult<Vec<_>>>()?;

    let count = frames.len();
    let rate = sampler.config().rate;
    encoder.encode(frames, rate)?;

    info!("Encoded {} frames at rate {}", count, rate);
    Ok(count)
}
