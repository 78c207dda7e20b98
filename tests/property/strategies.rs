// Copyright (c) 2025 - Cowboy AI, Inc.
//! Shared proptest strategies

use cim_active::active::{make_active, Active, Era, Time};
use proptest::prelude::*;

/// A time on the 1/8 grid in [-8, 8)
pub fn time() -> impl Strategy<Value = Time> {
    (-64i32..64).prop_map(|n| n as f64 / 8.0)
}

/// A non-negative duration on the 1/8 grid in [0, 4)
pub fn duration() -> impl Strategy<Value = Time> {
    (0i32..32).prop_map(|n| n as f64 / 8.0)
}

/// A well-formed era
pub fn era() -> impl Strategy<Value = Era> {
    (time(), duration()).prop_map(|(start, length)| Era::new(start, start + length))
}

/// A power-of-two stretch factor
pub fn factor() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(0.25),
        Just(0.5),
        Just(1.0),
        Just(2.0),
        Just(4.0),
        Just(8.0),
    ]
}

/// An integer-valued active: a step function of time, or a constant
pub fn int_active() -> impl Strategy<Value = Active<i64>> {
    prop_oneof![
        (-100i64..100).prop_map(Active::constant),
        (era(), -4i64..4, -100i64..100).prop_map(|(era, slope, offset)| {
            make_active(era.start, era.end, move |t| (t * 8.0) as i64 * slope + offset)
        }),
    ]
}

/// A time-valued active with a well-formed era
pub fn dynamic_active() -> impl Strategy<Value = Active<Time>> {
    (era(), -4i32..4).prop_map(|(era, slope)| {
        let slope = slope as f64;
        make_active(era.start, era.end, move |t| t * slope + 1.0)
    })
}

/// A time-valued active that may be constant
pub fn time_active() -> impl Strategy<Value = Active<Time>> {
    prop_oneof![
        (-8i32..8).prop_map(|n| Active::constant(n as f64)),
        dynamic_active(),
    ]
}

/// Grid times to sample actives at
pub fn grid_times() -> Vec<Time> {
    (-80..=80).map(|n| n as f64 / 8.0).collect()
}
