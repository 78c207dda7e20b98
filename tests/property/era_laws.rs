// Copyright (c) 2025 - Cowboy AI, Inc.
//! Era semigroup laws

use super::strategies::era;
use cim_active::active::Semigroup;
use proptest::prelude::*;

proptest! {
    /// Property: Era combination is associative
    #[test]
    fn prop_era_combine_associative(a in era(), b in era(), c in era()) {
        prop_assert_eq!(a.combine(b).combine(c), a.combine(b.combine(c)));
    }

    /// Property: Era combination is commutative
    #[test]
    fn prop_era_combine_commutative(a in era(), b in era()) {
        prop_assert_eq!(a.combine(b), b.combine(a));
    }

    /// Property: Era combination is idempotent
    #[test]
    fn prop_era_combine_idempotent(a in era()) {
        prop_assert_eq!(a.combine(a), a);
    }

    /// Property: The combined era covers both inputs
    #[test]
    fn prop_era_combine_bounds(a in era(), b in era()) {
        let span = a.combine(b);

        prop_assert!(span.start <= a.start && span.start <= b.start);
        prop_assert!(span.end >= a.end && span.end >= b.end);
        prop_assert!(span.duration() >= a.duration().max(b.duration()));
    }
}
