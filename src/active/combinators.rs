// Copyright (c) 2025 - Cowboy AI, Inc.
//! Value Combinators
//!
//! Pointwise operations lifted over pairs of actives. They all share one
//! four-way case split on the variants of their inputs:
//!
//! ```text
//! Constant a , Constant b  →  Constant (f a b)
//! Constant a , Dynamic e g →  Dynamic e         (t → f a (g t))
//! Dynamic e g, Constant b  →  Dynamic e         (t → f (g t) b)
//! Dynamic e g, Dynamic d h →  Dynamic (e <> d)  (t → f (g t) (h t))
//! ```
//!
//! When both sides are dynamic, both sampling functions are called at the
//! same `t`, including times outside their own eras.
//!
//! # Examples
//!
//! ```rust
//! use cim_active::active::{interval, Active, Era};
//!
//! let background = Active::constant(10.0);
//! let overlay = background + interval(0.0, 1.0);
//!
//! assert_eq!(overlay.era(), Some(Era::new(0.0, 1.0)));
//! assert_eq!(overlay.sample_at(0.5), 10.5);
//! ```

use super::core::{Active, Dynamic};
use super::monoid::{Monoid, Semigroup};
use std::ops::Add;

/// Combine two actives pointwise with `f`
///
/// Free-function form of [`Active::zip_with`].
pub fn apply2<A, B, C, F>(a: Active<A>, b: Active<B>, f: F) -> Active<C>
where
    A: Clone + Send + Sync + 'static,
    B: Clone + Send + Sync + 'static,
    F: Fn(A, B) -> C + Send + Sync + 'static,
{
    a.zip_with(b, f)
}

/// Overlay two actives, combining values where both are live
pub fn combine<M>(a: Active<M>, b: Active<M>) -> Active<M>
where
    M: Monoid + Clone + Send + Sync + 'static,
{
    a.combine(b)
}

/// Pair the values of two actives
pub fn product<A, B>(a: Active<A>, b: Active<B>) -> Active<(A, B)>
where
    A: Clone + Send + Sync + 'static,
    B: Clone + Send + Sync + 'static,
{
    a.product(b)
}

impl<A: Clone + Send + Sync + 'static> Active<A> {
    /// Combine with another active pointwise using `f`
    pub fn zip_with<B, C, F>(self, other: Active<B>, f: F) -> Active<C>
    where
        B: Clone + Send + Sync + 'static,
        F: Fn(A, B) -> C + Send + Sync + 'static,
    {
        match (self, other) {
            (Active::Constant(a), Active::Constant(b)) => Active::Constant(f(a, b)),
            (Active::Constant(a), Active::Dynamic(dynamic)) => {
                let sample = dynamic.sample_fn();
                Active::Dynamic(Dynamic::new(dynamic.era(), move |t| {
                    f(a.clone(), sample(t))
                }))
            }
            (Active::Dynamic(dynamic), Active::Constant(b)) => {
                let sample = dynamic.sample_fn();
                Active::Dynamic(Dynamic::new(dynamic.era(), move |t| {
                    f(sample(t), b.clone())
                }))
            }
            (Active::Dynamic(first), Active::Dynamic(second)) => {
                let era = first.era().combine(second.era());
                let sample1 = first.sample_fn();
                let sample2 = second.sample_fn();
                Active::Dynamic(Dynamic::new(era, move |t| f(sample1(t), sample2(t))))
            }
        }
    }

    /// Pair values with another active
    ///
    /// Same era rules as [`combine`](Self::combine); the value type needs no
    /// combination capability.
    pub fn product<B>(self, other: Active<B>) -> Active<(A, B)>
    where
        B: Clone + Send + Sync + 'static,
    {
        self.zip_with(other, |a, b| (a, b))
    }
}

impl<M: Monoid + Clone + Send + Sync + 'static> Active<M> {
    /// Overlay another active, combining values with the value type's
    /// `combine`
    ///
    /// Associative whenever the value combination is. `Constant(empty())` is
    /// an identity on the values; combining with it never narrows the era.
    pub fn combine(self, other: Self) -> Self {
        self.zip_with(other, M::combine)
    }
}

impl<M: Monoid + Clone + Send + Sync + 'static> Semigroup for Active<M> {
    fn combine(self, other: Self) -> Self {
        Active::combine(self, other)
    }
}

impl<M: Monoid + Clone + Send + Sync + 'static> Monoid for Active<M> {
    fn empty() -> Self {
        Active::Constant(M::empty())
    }
}

impl<M: Monoid + Clone + Send + Sync + 'static> Add for Active<M> {
    type Output = Active<M>;

    fn add(self, other: Self) -> Self::Output {
        self.combine(other)
    }
}

/// Combine three actives pointwise with `f`
pub fn apply3<A, B, C, D, F>(a: Active<A>, b: Active<B>, c: Active<C>, f: F) -> Active<D>
where
    A: Clone + Send + Sync + 'static,
    B: Clone + Send + Sync + 'static,
    C: Clone + Send + Sync + 'static,
    F: Fn(A, B, C) -> D + Send + Sync + 'static,
{
    a.product(b).zip_with(c, move |(x, y), z| f(x, y, z))
}
