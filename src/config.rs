// Copyright (c) 2025 - Cowboy AI, Inc.
//! Sampler configuration

use serde::{Deserialize, Serialize};

use crate::errors::{ActiveError, ActiveResult};

/// Environment variable holding the sampling rate
pub const RATE_ENV: &str = "ACTIVE_SAMPLE_RATE";

/// Environment variable enabling parallel sampling
pub const PARALLEL_ENV: &str = "ACTIVE_PARALLEL";

/// How an active is turned into frames
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Samples per unit of time
    pub rate: f64,

    /// Evaluate samples on the rayon thread pool
    pub parallel: bool,
}

impl SamplerConfig {
    /// Default frames per unit of time
    pub const DEFAULT_RATE: f64 = 24.0;

    /// Create a sequential configuration with the given rate
    pub fn new(rate: f64) -> Self {
        Self {
            rate,
            parallel: false,
        }
    }

    /// Enable or disable parallel sampling
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Check the rate is usable
    pub fn validate(&self) -> ActiveResult<()> {
        validate_rate(self.rate)
    }

    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to the defaults; a set but unparsable value
    /// is a `Configuration` error.
    pub fn from_env() -> ActiveResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> ActiveResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(rate) = lookup(RATE_ENV) {
            config.rate = rate.trim().parse()?;
        }

        if let Some(parallel) = lookup(PARALLEL_ENV) {
            config.parallel = parallel.trim().parse()?;
        }

        config.validate()?;
        Ok(config)
    }
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_RATE)
    }
}

/// A rate must be finite and strictly positive
pub(crate) fn validate_rate(rate: f64) -> ActiveResult<()> {
    if rate > 0.0 && rate.is_finite() {
        Ok(())
    } else {
        Err(ActiveError::InvalidRate(rate))
    }
}
