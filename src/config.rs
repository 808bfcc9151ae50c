use std::net::SocketAddr;
use thiserror::Error;

use crate::bot::Difficulty;
use crate::event::DEFAULT_CHANNEL_CAPACITY;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Server settings read from the environment
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub addr: SocketAddr,
    pub default_difficulty: Difficulty,
    pub seed: Option<u64>, // Seeds every session's opponent when set
    pub event_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            default_difficulty: Difficulty::default(),
            seed: None,
            event_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl Config {
    /// Read `HANDRPS_ADDR`, `HANDRPS_DIFFICULTY`, `HANDRPS_SEED` and
    /// `HANDRPS_EVENT_CAPACITY`, falling back to defaults for unset ones
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(value) = lookup("HANDRPS_ADDR") {
            config.addr = parse("HANDRPS_ADDR", value, |v| v.parse().ok())?;
        }
        if let Some(value) = lookup("HANDRPS_DIFFICULTY") {
            config.default_difficulty =
                parse("HANDRPS_DIFFICULTY", value, |v| Difficulty::try_from(v).ok())?;
        }
        if let Some(value) = lookup("HANDRPS_SEED") {
            config.seed = Some(parse("HANDRPS_SEED", value, |v| v.parse().ok())?);
        }
        if let Some(value) = lookup("HANDRPS_EVENT_CAPACITY") {
            config.event_capacity = parse("HANDRPS_EVENT_CAPACITY", value, |v| {
                v.parse().ok().filter(|capacity: &usize| *capacity > 0)
            })?;
        }

        Ok(config)
    }
}

fn parse<T>(
    name: &'static str,
    value: String,
    parser: impl FnOnce(&str) -> Option<T>,
) -> Result<T, ConfigError> {
    parser(value.trim()).ok_or(ConfigError::InvalidValue { name, value })
}
