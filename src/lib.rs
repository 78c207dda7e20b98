//! Time-varying values for the Composable Information Machine
//!
//! This crate provides the active-value combinator algebra used to build
//! animations: eras, constant and dynamic actives, overlay and sequencing
//! combinators, and a sampler that turns an active into frames. Rendering
//! and encoding stay outside the crate behind the traits in [`render`].

pub mod active;
pub mod config;
pub mod errors;
pub mod render;

// Re-export commonly used types
pub use active::{Active, Era, Monoid, Sampler, Semigroup, Time};
pub use config::SamplerConfig;
pub use errors::{ActiveError, ActiveResult};
