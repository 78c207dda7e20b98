// Copyright (c) 2025 - Cowboy AI, Inc.
//! Laws of the value combinators and time transformations

use super::strategies::{dynamic_active, factor, grid_times, int_active, time};
use cim_active::active::{simulate, Active, Monoid};
use proptest::prelude::*;

proptest! {
    /// Property: map g . map f = map (g . f)
    #[test]
    fn prop_map_composition(a in int_active(), k in -5i64..5) {
        let chained = a.clone().map(move |x| x + k).map(|x| x * 3);
        let fused = a.map(move |x| (x + k) * 3);

        prop_assert_eq!(chained.era(), fused.era());
        for t in grid_times() {
            prop_assert_eq!(chained.sample_at(t), fused.sample_at(t));
        }
    }

    /// Property: Mapping a constant maps its value
    #[test]
    fn prop_map_constant(v in -1000i64..1000) {
        let mapped = Active::constant(v).map(|x| x * 2 + 1);

        prop_assert!(mapped.is_constant());
        prop_assert_eq!(mapped.sample_at(0.0), v * 2 + 1);
    }

    /// Property: Overlay is associative on eras and samples
    #[test]
    fn prop_combine_associative(a in int_active(), b in int_active(), c in int_active()) {
        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));

        prop_assert_eq!(left.era(), right.era());
        for t in grid_times() {
            prop_assert_eq!(left.sample_at(t), right.sample_at(t));
        }
    }

    /// Property: Constant(empty) is an identity for overlay
    #[test]
    fn prop_combine_empty_identity(a in int_active()) {
        let left = Active::<i64>::empty().combine(a.clone());
        let right = a.clone().combine(Active::empty());

        prop_assert_eq!(left.era(), a.era());
        prop_assert_eq!(right.era(), a.era());
        for t in grid_times() {
            prop_assert_eq!(left.sample_at(t), a.sample_at(t));
            prop_assert_eq!(right.sample_at(t), a.sample_at(t));
        }
    }

    /// Property: Product projects back to its inputs
    #[test]
    fn prop_product_projections(a in int_active(), b in int_active()) {
        let pair = a.clone().product(b.clone());
        let overlay = a.clone().combine(b.clone());

        prop_assert_eq!(pair.era(), overlay.era());
        for t in grid_times() {
            prop_assert_eq!(pair.sample_at(t), (a.sample_at(t), b.sample_at(t)));
        }
    }

    /// Property: Shifting back undoes a shift
    #[test]
    fn prop_shift_inverse(a in dynamic_active(), d in time()) {
        let round_trip = a.clone().shift(d).shift(-d);

        prop_assert_eq!(round_trip.era(), a.era());
        for t in grid_times() {
            prop_assert_eq!(round_trip.sample_at(t), a.sample_at(t));
        }
    }

    /// Property: Stretching by 1/k undoes a stretch by k
    #[test]
    fn prop_stretch_inverse(a in dynamic_active(), k in factor()) {
        let round_trip = a.clone().stretch(k).unwrap().stretch(1.0 / k).unwrap();

        prop_assert_eq!(round_trip.era(), a.era());
        for t in grid_times() {
            prop_assert_eq!(round_trip.sample_at(t), a.sample_at(t));
        }
    }

    /// Property: Stretch scales duration and keeps the start
    #[test]
    fn prop_stretch_scales_duration(a in dynamic_active(), k in factor()) {
        let era = a.era().unwrap();
        let stretched = a.stretch(k).unwrap().era().unwrap();

        prop_assert_eq!(stretched.start, era.start);
        prop_assert_eq!(stretched.duration(), era.duration() * k);
    }

    /// Property: Trims are idempotent
    #[test]
    fn prop_trims_idempotent(a in int_active()) {
        let before = a.clone().trim_before();
        let after = a.clone().trim_after();
        let both = a.trim();

        for t in grid_times() {
            prop_assert_eq!(before.clone().trim_before().sample_at(t), before.sample_at(t));
            prop_assert_eq!(after.clone().trim_after().sample_at(t), after.sample_at(t));
            prop_assert_eq!(both.clone().trim().sample_at(t), both.sample_at(t));
        }
    }

    /// Property: Trimmed actives keep their values inside the era
    #[test]
    fn prop_trim_keeps_era_values(a in int_active()) {
        let trimmed = a.clone().trim();

        prop_assert_eq!(trimmed.era(), a.era());
        for t in grid_times() {
            match a.era() {
                Some(era) if t < era.start || t > era.end => {
                    prop_assert_eq!(trimmed.sample_at(t), 0);
                }
                _ => prop_assert_eq!(trimmed.sample_at(t), a.sample_at(t)),
            }
        }
    }

    /// Property: at_time moves the era start to the requested time
    #[test]
    fn prop_at_time_start(a in dynamic_active(), t in time()) {
        let duration = a.duration();
        let moved = a.at_time(t);

        prop_assert_eq!(moved.era().map(|era| era.start), Some(t));
        prop_assert_eq!(moved.duration(), duration);
    }

    /// Property: A constant samples to exactly one value at any rate
    #[test]
    fn prop_simulate_constant(v in -1000i64..1000, rate in 1u32..240) {
        prop_assert_eq!(simulate(rate as f64, &Active::constant(v)).unwrap(), vec![v]);
    }
}
