//! Configuration loading and representation.
//!
//! Values come from `STOCKCAST_*` environment variables; anything unset keeps
//! its default.

use std::str::FromStr;

use thiserror::Error;

use stockcast_core::DomainError;
use stockcast_forecasting::ReplenishmentPolicy;

pub const LEAD_TIME_DAYS_VAR: &str = "STOCKCAST_LEAD_TIME_DAYS";
pub const SERVICE_LEVEL_VAR: &str = "STOCKCAST_SERVICE_LEVEL";
pub const SERVICE_FACTOR_VAR: &str = "STOCKCAST_SERVICE_FACTOR";
pub const DEFAULT_MONTHS_AHEAD_VAR: &str = "STOCKCAST_DEFAULT_MONTHS_AHEAD";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var}: cannot parse {value:?}")]
    Malformed { var: &'static str, value: String },

    #[error("invalid configuration: {0}")]
    Invalid(#[from] DomainError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub policy: ReplenishmentPolicy,
    /// Horizon used by hosts when the caller does not ask for one.
    pub default_months_ahead: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            policy: ReplenishmentPolicy::default(),
            default_months_ahead: 3,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (environment, files, test maps).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(days) = parse(&lookup, LEAD_TIME_DAYS_VAR)? {
            cfg.policy.lead_time_days = days;
        }
        if let Some(level) = parse(&lookup, SERVICE_LEVEL_VAR)? {
            cfg.policy.service_level = level;
        }
        if let Some(factor) = parse(&lookup, SERVICE_FACTOR_VAR)? {
            cfg.policy.service_factor = factor;
        }
        if let Some(months) = parse::<u32, _>(&lookup, DEFAULT_MONTHS_AHEAD_VAR)? {
            if months == 0 {
                return Err(ConfigError::Invalid(DomainError::validation(
                    "default months ahead must be >= 1",
                )));
            }
            cfg.default_months_ahead = months;
        }

        cfg.policy.validate()?;
        Ok(cfg)
    }
}

fn parse<T, F>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Malformed { var, value: raw }),
    }
}
