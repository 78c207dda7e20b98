// Copyright (c) 2025 - Cowboy AI, Inc.
//! Active - Time-Varying Values
//!
//! An `Active<A>` is either a constant value, defined for all time, or a
//! sampling function paired with the [`Era`] over which it is meaningful.
//!
//! # Mathematical Model
//!
//! ```text
//! Active<A> = Constant A
//!           | Dynamic (Era, Time → A)
//! ```
//!
//! Sampling functions must be pure and total: combinators call them at times
//! outside their era (an overlay samples both sides at the same `t`), so a
//! function must return *some* value for every `t`.
//!
//! Actives are persistent values. Every combinator builds a new `Active` and
//! shares the underlying sampling functions through `Arc`, so cloning is cheap.
//!
//! # Examples
//!
//! ```rust
//! use cim_active::active::{interval, Active};
//!
//! let t = interval(0.0, 2.0);
//! let doubled = t.map(|x| x * 2.0);
//! assert_eq!(doubled.sample_at(1.5), 3.0);
//!
//! let c = Active::constant("frame");
//! assert_eq!(c.sample_at(100.0), "frame");
//! ```

use super::era::Era;
use super::{Duration, Time};
use std::fmt::{self, Debug};
use std::sync::Arc;

/// Shared pure function from time to value
pub type SampleFn<A> = Arc<dyn Fn(Time) -> A + Send + Sync>;

/// The time-bounded variant of an [`Active`]
#[derive(Clone)]
pub struct Dynamic<A> {
    era: Era,
    sample: SampleFn<A>,
}

impl<A> Dynamic<A> {
    /// Pair an era with a sampling function
    pub fn new<F>(era: Era, f: F) -> Self
    where
        F: Fn(Time) -> A + Send + Sync + 'static,
    {
        Self {
            era,
            sample: Arc::new(f),
        }
    }

    pub(crate) fn from_shared(era: Era, sample: SampleFn<A>) -> Self {
        Self { era, sample }
    }

    pub fn era(&self) -> Era {
        self.era
    }

    /// Evaluate the sampling function; `t` may lie outside the era
    pub fn sample(&self, t: Time) -> A {
        (self.sample)(t)
    }

    pub(crate) fn sample_fn(&self) -> SampleFn<A> {
        Arc::clone(&self.sample)
    }
}

impl<A: 'static> Dynamic<A> {
    /// Same function and era, moved `offset` later in time
    pub(crate) fn shifted(&self, offset: Duration) -> Self {
        let sample = self.sample_fn();
        Dynamic::new(self.era.shifted(offset), move |t| sample(t - offset))
    }
}

impl<A> Debug for Dynamic<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dynamic<{}>({})", std::any::type_name::<A>(), self.era)
    }
}

/// A value that is constant, or varies over an era
#[derive(Clone)]
pub enum Active<A> {
    /// Defined for all time, no temporal extent
    Constant(A),
    /// Defined by a sampling function, meaningful within its era
    Dynamic(Dynamic<A>),
}

impl<A: Debug> Debug for Active<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Active::Constant(value) => f.debug_tuple("Constant").field(value).finish(),
            Active::Dynamic(dynamic) => dynamic.fmt(f),
        }
    }
}

impl<A> Active<A> {
    /// Create a constant active
    pub fn constant(value: A) -> Self {
        Active::Constant(value)
    }

    /// Create a dynamic active over an existing era
    pub fn dynamic<F>(era: Era, f: F) -> Self
    where
        F: Fn(Time) -> A + Send + Sync + 'static,
    {
        Active::Dynamic(Dynamic::new(era, f))
    }

    /// Eliminate the sum type
    ///
    /// The unary time transformations dispatch through here; operations that
    /// split two actives at once, or need the same closure in both arms,
    /// use an equivalent `match`.
    pub fn on_active<R>(
        self,
        on_constant: impl FnOnce(A) -> R,
        on_dynamic: impl FnOnce(Dynamic<A>) -> R,
    ) -> R {
        match self {
            Active::Constant(value) => on_constant(value),
            Active::Dynamic(dynamic) => on_dynamic(dynamic),
        }
    }

    /// Era of a dynamic active; `None` for a constant
    pub fn era(&self) -> Option<Era> {
        match self {
            Active::Constant(_) => None,
            Active::Dynamic(dynamic) => Some(dynamic.era),
        }
    }

    /// Duration of the era; `None` for a constant
    pub fn duration(&self) -> Option<Duration> {
        self.era().map(|era| era.duration())
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, Active::Constant(_))
    }
}

impl<A: Clone + Send + Sync + 'static> Active<A> {
    /// A normalized animation over `[0, 1]`
    pub fn animation<F>(f: F) -> Self
    where
        F: Fn(Time) -> A + Send + Sync + 'static,
    {
        make_active(0.0, 1.0, f)
    }

    /// Value at time `t`; a constant ignores `t`
    pub fn sample_at(&self, t: Time) -> A {
        match self {
            Active::Constant(value) => value.clone(),
            Active::Dynamic(dynamic) => dynamic.sample(t),
        }
    }

    /// Apply `f` to every value, keeping the era
    ///
    /// # Laws
    ///
    /// ```text
    /// a.map(id)         = a
    /// a.map(f).map(g)   = a.map(g . f)
    /// Constant(v).map(f) = Constant(f(v))
    /// ```
    pub fn map<B, F>(self, f: F) -> Active<B>
    where
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        match self {
            Active::Constant(value) => Active::Constant(f(value)),
            Active::Dynamic(Dynamic { era, sample }) => {
                Active::Dynamic(Dynamic::new(era, move |t| f(sample(t))))
            }
        }
    }

    /// Like [`map`](Self::map), but `f` also receives the sample time
    ///
    /// A constant has no time of its own; `f` is called once with `t = 0`.
    pub fn map_with_time<B, F>(self, f: F) -> Active<B>
    where
        F: Fn(Time, A) -> B + Send + Sync + 'static,
    {
        match self {
            Active::Constant(value) => Active::Constant(f(0.0, value)),
            Active::Dynamic(Dynamic { era, sample }) => {
                Active::Dynamic(Dynamic::new(era, move |t| f(t, sample(t))))
            }
        }
    }
}

/// Create a dynamic active over `[start, end]`
pub fn make_active<A, F>(start: Time, end: Time, f: F) -> Active<A>
where
    F: Fn(Time) -> A + Send + Sync + 'static,
{
    Active::dynamic(Era::new(start, end), f)
}

/// The identity active `t -> t` over `[start, end]`
pub fn interval(start: Time, end: Time) -> Active<Time> {
    make_active(start, end, |t| t)
}

/// The unit interval `[0, 1]`
pub fn ui() -> Active<Time> {
    interval(0.0, 1.0)
}

/// Free-function form of [`Active::on_active`]
pub fn on_active<A, R>(
    on_constant: impl FnOnce(A) -> R,
    on_dynamic: impl FnOnce(Dynamic<A>) -> R,
    active: Active<A>,
) -> R {
    active.on_active(on_constant, on_dynamic)
}
