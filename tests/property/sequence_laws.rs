// Copyright (c) 2025 - Cowboy AI, Inc.
//! Laws of the sequencing combinators

use super::strategies::{dynamic_active, grid_times, int_active, time_active};
use cim_active::active::{movie, movie_add, Active, Semigroup, Time};
use proptest::prelude::*;

fn chain_era(actives: &[Active<Time>]) -> Option<cim_active::Era> {
    let mut eras = actives.iter().filter_map(|a| a.era());
    let first = eras.next()?;
    Some(eras.fold(first, |chain, era| {
        let length = era.duration();
        chain.combine(cim_active::Era::new(chain.end, chain.end + length))
    }))
}

proptest! {
    /// Property: A flat movie equals the left fold of splice
    #[test]
    fn prop_movie_equals_splice_fold(actives in prop::collection::vec(time_active(), 1..8)) {
        let flat = movie(actives.clone()).unwrap();
        let folded = actives.into_iter().reduce(Active::splice).unwrap();

        prop_assert_eq!(flat.era(), folded.era());
        for t in grid_times() {
            prop_assert_eq!(flat.sample_at(t), folded.sample_at(t));
        }
    }

    /// Property: A flat additive movie equals the left fold of sequence_add
    #[test]
    fn prop_movie_add_equals_sequence_add_fold(
        actives in prop::collection::vec(int_active(), 1..8)
    ) {
        let flat = movie_add(actives.clone()).unwrap();
        let folded = actives.into_iter().reduce(Active::sequence_add).unwrap();

        prop_assert_eq!(flat.era(), folded.era());
        for t in grid_times() {
            prop_assert_eq!(flat.sample_at(t), folded.sample_at(t));
        }
    }

    /// Property: Movies glue eras end to start, left to right
    #[test]
    fn prop_movie_era_is_chain(actives in prop::collection::vec(dynamic_active(), 1..8)) {
        let expected = chain_era(&actives);
        let result = movie(actives).unwrap();

        prop_assert_eq!(result.era(), expected);
    }

    /// Property: A leading constant holds over the era of what follows
    #[test]
    fn prop_constant_splice_keeps_era(v in -8i32..8, b in dynamic_active()) {
        let value = v as f64;
        let spliced = Active::constant(value).splice(b.clone());

        prop_assert_eq!(spliced.era(), b.era());
        for t in grid_times() {
            prop_assert_eq!(spliced.sample_at(t), value);
        }
    }

    /// Property: Splice is a hard cut at the first era's end
    #[test]
    fn prop_splice_hard_cut(a in dynamic_active(), b in dynamic_active()) {
        let cut = a.era().unwrap().end;
        let shifted = b.clone().after(&a);
        let spliced = a.clone().splice(b);

        for t in grid_times() {
            let expected = if t < cut { a.sample_at(t) } else { shifted.sample_at(t) };
            prop_assert_eq!(spliced.sample_at(t), expected);
        }
    }
}
