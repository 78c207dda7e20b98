// Copyright (c) 2025 - Cowboy AI, Inc.
//! Value Capabilities - Semigroup and Monoid
//!
//! Overlay and sequencing combinators need to merge two values that are
//! live at the same time, and trims need a value meaning "nothing here".
//! Those two capabilities are expressed as traits and required as bounds
//! by the combinators that use them:
//!
//! - [`Semigroup`]: an associative `combine`
//! - [`Monoid`]: a `Semigroup` with an identity element `empty()`
//!
//! Values that only go through `map`, `shift`, `stretch` or `splice` need
//! neither. Calling `combine` on an `Active` of a type without `Monoid` is a
//! compile error at the call site.
//!
//! # Laws
//!
//! ```text
//! (a <> b) <> c = a <> (b <> c)
//! empty <> a    = a
//! a <> empty    = a
//! ```

/// Associative binary combination
pub trait Semigroup: Sized {
    fn combine(self, other: Self) -> Self;
}

/// Semigroup with an identity element
pub trait Monoid: Semigroup {
    fn empty() -> Self;
}

/// Fold a sequence of values with `combine`, starting from `empty()`
pub fn concat<M, I>(values: I) -> M
where
    M: Monoid,
    I: IntoIterator<Item = M>,
{
    values.into_iter().fold(M::empty(), M::combine)
}

macro_rules! additive_monoid {
    ($($t:ty => $zero:expr),* $(,)?) => {
        $(
            impl Semigroup for $t {
                fn combine(self, other: Self) -> Self {
                    self + other
                }
            }

            impl Monoid for $t {
                fn empty() -> Self {
                    $zero
                }
            }
        )*
    };
}

additive_monoid!(
    i8 => 0, i16 => 0, i32 => 0, i64 => 0, i128 => 0, isize => 0,
    u8 => 0, u16 => 0, u32 => 0, u64 => 0, u128 => 0, usize => 0,
    f32 => 0.0, f64 => 0.0,
);

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl Monoid for String {
    fn empty() -> Self {
        String::new()
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Vec::new()
    }
}

impl Semigroup for () {
    fn combine(self, _other: Self) -> Self {}
}

impl Monoid for () {
    fn empty() -> Self {}
}

/// `None` is the identity; two `Some` values combine their contents
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(a), Some(b)) => Some(a.combine(b)),
            (a, None) => a,
            (None, b) => b,
        }
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn empty() -> Self {
        (A::empty(), B::empty())
    }
}
