//! Runtime configuration.
//!
//! Values come from `ARCADE_*` environment variables; command-line flags
//! override them. A variable shadowed by a flag is never parsed, and the
//! merged result is validated once, before the terminal is touched.

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;

use crate::app::Screen;
use crate::types::TICK_MS;

pub const ENV_SEED: &str = "ARCADE_SEED";
pub const ENV_TICK_MS: &str = "ARCADE_TICK_MS";
pub const ENV_LOG_PATH: &str = "ARCADE_LOG_PATH";

/// Accepted range for the frame step.
pub const TICK_MS_RANGE: std::ops::RangeInclusive<u32> = 1..=1000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be an unsigned integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
    #[error("tick must be between 1 and 1000 ms, got {0}")]
    TickOutOfRange(u32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArcadeConfig {
    /// RNG seed; `None` picks one from the clock.
    pub seed: Option<u32>,
    /// Fixed frame step fed to the engine.
    pub tick_ms: u32,
    /// Log file; `None` disables logging.
    pub log_path: Option<PathBuf>,
    /// Screen shown at startup.
    pub open: Screen,
}

impl Default for ArcadeConfig {
    fn default() -> Self {
        Self {
            seed: None,
            tick_ms: TICK_MS,
            log_path: None,
            open: Screen::Home,
        }
    }
}

/// Values given on the command line; each one wins over its variable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub seed: Option<u32>,
    pub tick_ms: Option<u32>,
    pub log_path: Option<PathBuf>,
    pub open: Option<Screen>,
}

impl ArcadeConfig {
    /// Process environment merged with command-line overrides.
    pub fn from_env_with(overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        Self::from_sources(|key| env::var(key).ok(), overrides)
    }

    /// Build from an arbitrary variable source (tests pass a closure).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Self::from_sources(lookup, ConfigOverrides::default())
    }

    pub fn from_sources(
        lookup: impl Fn(&str) -> Option<String>,
        overrides: ConfigOverrides,
    ) -> Result<Self, ConfigError> {
        let seed = match overrides.seed {
            Some(seed) => Some(seed),
            None => parse_var(&lookup, ENV_SEED)?,
        };
        let tick_ms = match overrides.tick_ms {
            Some(tick) => tick,
            None => parse_var(&lookup, ENV_TICK_MS)?.unwrap_or(TICK_MS),
        };
        let log_path = overrides.log_path.or_else(|| {
            lookup(ENV_LOG_PATH)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
        });

        let config = Self {
            seed,
            tick_ms,
            log_path,
            open: overrides.open.unwrap_or_default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !TICK_MS_RANGE.contains(&self.tick_ms) {
            return Err(ConfigError::TickOutOfRange(self.tick_ms));
        }
        Ok(())
    }

    /// The configured seed, or one derived from the wall clock.
    pub fn resolved_seed(&self) -> u32 {
        self.seed.unwrap_or_else(clock_seed)
    }
}

fn parse_var(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<u32>, ConfigError> {
    let Some(raw) = lookup(var) else {
        return Ok(None);
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse().map(Some).map_err(|_| ConfigError::InvalidNumber {
        var,
        value: raw.to_string(),
    })
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
