// Copyright (c) 2025 - Cowboy AI, Inc.
//! Sequencing Combinators
//!
//! Chain actives end-to-start in time. Each argument occupies its own era;
//! the next one is moved (with [`Active::after`]) to begin where the chain
//! so far ends.
//!
//! ```text
//! sequence_add(a, b) = a <> after(b, a)      values overlap and combine
//! splice(a, b)       = a until end(a), then after(b, a)   hard cut
//! movie_add([a..])   = foldl1 sequence_add
//! movie([a..])       = foldl1 splice
//! ```
//!
//! # Flat movies
//!
//! A left fold builds one closure per element, so sampling a long movie
//! would recurse once per element. [`movie`] and [`movie_add`] instead
//! collect the shifted elements into a flat table and sample it with a loop
//! (or a binary search over cut points), giving exactly the eras and values
//! of the fold.

use super::core::{Active, Dynamic, SampleFn};
use super::era::{combine_optional, Era};
use super::monoid::{Monoid, Semigroup};
use super::Time;
use crate::errors::{ActiveError, ActiveResult};
use std::sync::Arc;
use tracing::{debug, warn};

impl<A: Clone + Send + Sync + 'static> Active<A> {
    /// Play `self`, then cut hard to `other` where `self`'s era ends
    ///
    /// No combination capability is required. A constant never ends, so a
    /// constant `self` holds over the whole of a dynamic `other`'s era, and a
    /// constant `other` holds from the end of `self` onwards.
    pub fn splice(self, other: Self) -> Self {
        match (self, other) {
            (Active::Constant(value), Active::Constant(_)) => Active::Constant(value),
            (Active::Constant(value), Active::Dynamic(second)) => {
                Active::Dynamic(Dynamic::new(second.era(), move |_| value.clone()))
            }
            (Active::Dynamic(first), Active::Constant(value)) => {
                let cut = first.era().end;
                let sample = first.sample_fn();
                Active::Dynamic(Dynamic::new(first.era(), move |t| {
                    if t < cut {
                        sample(t)
                    } else {
                        value.clone()
                    }
                }))
            }
            (Active::Dynamic(first), Active::Dynamic(second)) => {
                let cut = first.era().end;
                let second = second.shifted(cut - second.era().start);
                let era = first.era().combine(second.era());
                let sample1 = first.sample_fn();
                let sample2 = second.sample_fn();
                Active::Dynamic(Dynamic::new(era, move |t| {
                    if t < cut {
                        sample1(t)
                    } else {
                        sample2(t)
                    }
                }))
            }
        }
    }
}

impl<M: Monoid + Clone + Send + Sync + 'static> Active<M> {
    /// Play `self`, then overlay `other` starting where `self`'s era ends
    ///
    /// `self` is not truncated, so anything it produces past its era is
    /// combined with `other`.
    pub fn sequence_add(self, other: Self) -> Self {
        let other = other.after(&self);
        self.combine(other)
    }
}

/// Free-function form of [`Active::sequence_add`]
pub fn sequence_add<M>(a: Active<M>, b: Active<M>) -> Active<M>
where
    M: Monoid + Clone + Send + Sync + 'static,
{
    a.sequence_add(b)
}

/// Free-function form of [`Active::splice`]
pub fn splice<A>(a: Active<A>, b: Active<A>) -> Active<A>
where
    A: Clone + Send + Sync + 'static,
{
    a.splice(b)
}

/// Splice actives end-to-start, left to right
///
/// # Errors
///
/// `EmptyMovie` when `actives` yields nothing.
pub fn movie<A, I>(actives: I) -> ActiveResult<Active<A>>
where
    A: Clone + Send + Sync + 'static,
    I: IntoIterator<Item = Active<A>>,
{
    let mut actives = actives.into_iter();
    let mut head = match actives.next() {
        Some(head) => head,
        None => {
            warn!("Rejecting movie with no actives");
            return Err(ActiveError::EmptyMovie);
        }
    };

    // leading constants collapse onto the era of the first dynamic
    let first = loop {
        match head {
            Active::Dynamic(first) => break first,
            Active::Constant(value) => match actives.next() {
                None => return Ok(Active::Constant(value)),
                Some(Active::Constant(_)) => head = Active::Constant(value),
                Some(Active::Dynamic(next)) => {
                    break Dynamic::new(next.era(), move |_| value.clone());
                }
            },
        }
    };

    let mut era = first.era();
    // (end of the chain after this segment, segment sampler)
    let mut segments: Vec<(Time, SampleFn<A>)> = vec![(era.end, first.sample_fn())];

    for active in actives {
        match active {
            Active::Constant(value) => {
                segments.push((era.end, Arc::new(move |_: Time| value.clone())));
            }
            Active::Dynamic(next) => {
                let next = next.shifted(era.end - next.era().start);
                era = era.combine(next.era());
                segments.push((era.end, next.sample_fn()));
            }
        }
    }

    debug!("Assembled movie of {} segments over {}", segments.len(), era);

    if segments.len() == 1 {
        return Ok(Active::Dynamic(first));
    }

    let cuts: Vec<Time> = segments[..segments.len() - 1]
        .iter()
        .map(|(end, _)| *end)
        .collect();
    let samplers: Vec<SampleFn<A>> = segments.into_iter().map(|(_, sample)| sample).collect();

    Ok(Active::Dynamic(Dynamic::from_shared(
        era,
        Arc::new(move |t: Time| {
            // chain ends never decrease, so the live segment is the first
            // one whose end lies beyond t
            let index = cuts.partition_point(|&end| end <= t);
            samplers[index](t)
        }),
    )))
}

/// Sequence actives end-to-start with overlap, left to right
///
/// # Errors
///
/// `EmptyMovie` when `actives` yields nothing.
pub fn movie_add<M, I>(actives: I) -> ActiveResult<Active<M>>
where
    M: Monoid + Clone + Send + Sync + 'static,
    I: IntoIterator<Item = Active<M>>,
{
    let mut era: Option<Era> = None;
    let mut parts: Vec<Active<M>> = Vec::new();

    for active in actives {
        let shifted = match era {
            Some(chain) => active.at_time(chain.end),
            None => active,
        };
        era = combine_optional(era, shifted.era());
        parts.push(shifted);
    }

    if parts.is_empty() {
        warn!("Rejecting movie_add with no actives");
        return Err(ActiveError::EmptyMovie);
    }

    debug!("Assembled additive movie of {} parts", parts.len());

    match era {
        None => Ok(parts
            .into_iter()
            .reduce(Active::combine)
            .unwrap_or_else(Active::empty)),
        Some(_) if parts.len() == 1 => Ok(parts.remove(0)),
        Some(era) => Ok(Active::dynamic(era, move |t| {
            parts
                .iter()
                .map(|part| part.sample_at(t))
                .reduce(M::combine)
                .unwrap_or_else(M::empty)
        })),
    }
}
