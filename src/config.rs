use std::{env, time::Duration};

use anyhow::{Context, Result};
use derive_getters::Getters;
use derive_new::new;

use crate::api::privat::BASE_URL;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub const BASE_URL_VAR: &str = "PRIVAT_RATES_BASE_URL";
pub const TIMEOUT_VAR: &str = "PRIVAT_RATES_TIMEOUT_SECS";

/// What a batch does when some of its dates fail.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum FailurePolicy {
    /// Keep every date's outcome; the batch always completes.
    #[default]
    Isolate,
    /// Fail the whole batch with the first failed date's error.
    AbortOnError,
}

#[derive(Clone, Debug, Getters, new)]
pub struct Config {
    base_url: String,
    timeout: Duration,
    policy: FailurePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(BASE_URL.to_string(), DEFAULT_TIMEOUT, FailurePolicy::default())
    }
}

impl Config {
    /// Defaults overridden by the environment (and a `.env` file, if present).
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let mut config = Self::default();

        if let Ok(base_url) = env::var(BASE_URL_VAR) {
            config.base_url = base_url;
        }

        if let Ok(timeout) = env::var(TIMEOUT_VAR) {
            config.timeout = parse_timeout(&timeout)
                .with_context(|| format!("Invalid {} '{}'", TIMEOUT_VAR, timeout))?;
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }
}

pub fn parse_timeout(secs: &str) -> Result<Duration> {
    let secs = secs
        .trim()
        .parse::<f64>()
        .with_context(|| format!("Failed to parse timeout '{}'", secs))?;

    if !secs.is_finite() || secs <= 0.0 {
        return Err(anyhow::anyhow!("Timeout must be a positive number of seconds"));
    }

    Ok(Duration::from_secs_f64(secs))
}
