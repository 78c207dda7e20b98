// Copyright (c) 2025 - Cowboy AI, Inc.
//! Active Values - Compositional Time-Varying Values
//!
//! This module provides a small combinator algebra for values that change
//! over time. Complex animations are built by nesting combinators, then
//! sampled into a list of frames at a fixed rate.
//!
//! # Core Concepts
//!
//! ## Era
//!
//! A bounded interval `[start, end)` with bounding-span combination.
//!
//! ## Active<A>
//!
//! Either a constant for all time, or a pure sampling function meaningful
//! within an era:
//!
//! ```text
//! Constant:  ≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈  (no era)
//! Dynamic:          [≈≈≈≈≈≈≈≈≈≈)              (era [s, e))
//! ```
//!
//! # Component Map
//!
//! ```text
//! era          Era, bounding-span semigroup
//! monoid       Semigroup / Monoid capabilities for values
//! core         Active, Dynamic, constructors, map, on_active
//! combinators  combine (+), product, zip_with
//! time         shift, stretch, trims, at_time, after
//! sequence     sequence_add, splice, movie_add, movie
//! sampler      simulate, simulate_par, Sampler
//! ```
//!
//! # Laws
//!
//! ```text
//! map (g . f)                = map g . map f
//! (a <> b) <> c              = a <> (b <> c)          (eras and samples)
//! shift (shift a d) (-d)     = a
//! stretch (stretch a k) (1/k) = a                     (k ≠ 0)
//! trim_before . trim_before  = trim_before
//! ```
//!
//! # Example
//!
//! ```rust
//! use cim_active::active::{movie, simulate, Active};
//!
//! let fade_in = Active::animation(|t| t);
//! let hold = Active::animation(|_| 1.0);
//! let fade_out = Active::animation(|t| 1.0 - t);
//!
//! let opacity = movie(vec![fade_in, hold, fade_out]).unwrap();
//! let frames = simulate(2.0, &opacity).unwrap();
//!
//! assert_eq!(frames, vec![0.0, 0.5, 1.0, 1.0, 1.0, 0.5]);
//! ```

pub mod combinators;
pub mod core;
pub mod era;
pub mod monoid;
pub mod sampler;
pub mod sequence;
pub mod time;

pub use self::core::{interval, make_active, on_active, ui, Active, Dynamic, SampleFn};
pub use combinators::{apply2, apply3, combine, product};
pub use era::Era;
pub use monoid::{concat, Monoid, Semigroup};
pub use sampler::{sample_times, simulate, simulate_par, Sampler, MAX_FRAMES};
pub use sequence::{movie, movie_add, sequence_add, splice};

/// Time, in arbitrary units (frames are sampled at `rate` per unit)
pub type Time = f64;

/// Difference between two times
pub type Duration = f64;
