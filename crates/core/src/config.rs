//! Game tuning parameters.
//!
//! Defaults are the stock tuning. Every field can be overridden through
//! `CAR_COUNTER_*` environment variables; values that fail to parse keep the
//! default.

use std::env;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{
    DEFAULT_MAX_ITEMS_CAP, DEFAULT_MAX_ITEMS_INCREMENT, DEFAULT_MIN_ITEMS, DEFAULT_MIN_TIME_SECS,
    DEFAULT_START_MAX_ITEMS, DEFAULT_START_TIME_SECS, DEFAULT_TIME_DECREMENT_SECS,
};

/// Immutable difficulty configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameConfig {
    pub min_items: u32,
    pub start_max_items: u32,
    pub max_items_cap: u32,
    pub max_items_increment: u32,
    /// Seconds.
    pub start_time_limit: u32,
    /// Seconds.
    pub min_time_limit: u32,
    /// Seconds.
    pub time_decrement: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{field} must be positive")]
    NotPositive { field: &'static str },
    #[error("minItems ({min}) exceeds startMaxItems ({start})")]
    MinAboveStart { min: u32, start: u32 },
    #[error("startMaxItems ({start}) exceeds maxItemsCap ({cap})")]
    StartAboveCap { start: u32, cap: u32 },
    #[error("minTimeLimit ({min}) exceeds startTimeLimit ({start})")]
    MinTimeAboveStart { min: u32, start: u32 },
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_items: DEFAULT_MIN_ITEMS,
            start_max_items: DEFAULT_START_MAX_ITEMS,
            max_items_cap: DEFAULT_MAX_ITEMS_CAP,
            max_items_increment: DEFAULT_MAX_ITEMS_INCREMENT,
            start_time_limit: DEFAULT_START_TIME_SECS,
            min_time_limit: DEFAULT_MIN_TIME_SECS,
            time_decrement: DEFAULT_TIME_DECREMENT_SECS,
        }
    }
}

impl GameConfig {
    /// Load overrides from environment variables.
    ///
    /// The result is not validated; see [`GameConfig::from_env_or_default`].
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            min_items: env_u32("CAR_COUNTER_MIN_ITEMS").unwrap_or(defaults.min_items),
            start_max_items: env_u32("CAR_COUNTER_START_MAX_ITEMS")
                .unwrap_or(defaults.start_max_items),
            max_items_cap: env_u32("CAR_COUNTER_MAX_ITEMS_CAP").unwrap_or(defaults.max_items_cap),
            max_items_increment: env_u32("CAR_COUNTER_MAX_ITEMS_INCREMENT")
                .unwrap_or(defaults.max_items_increment),
            start_time_limit: env_u32("CAR_COUNTER_START_TIME")
                .unwrap_or(defaults.start_time_limit),
            min_time_limit: env_u32("CAR_COUNTER_MIN_TIME").unwrap_or(defaults.min_time_limit),
            time_decrement: env_u32("CAR_COUNTER_TIME_DECREMENT")
                .unwrap_or(defaults.time_decrement),
        }
    }

    /// Environment overrides, falling back to defaults when they break an invariant.
    pub fn from_env_or_default() -> Self {
        let config = Self::from_env();
        match config.validate() {
            Ok(()) => config,
            Err(err) => {
                tracing::warn!(%err, "invalid game config from environment, using defaults");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("minItems", self.min_items),
            ("startMaxItems", self.start_max_items),
            ("maxItemsCap", self.max_items_cap),
            ("maxItemsIncrement", self.max_items_increment),
            ("startTimeLimit", self.start_time_limit),
            ("minTimeLimit", self.min_time_limit),
            ("timeDecrement", self.time_decrement),
        ];
        if let Some(&(field, _)) = positive.iter().find(|(_, v)| *v == 0) {
            return Err(ConfigError::NotPositive { field });
        }
        if self.min_items > self.start_max_items {
            return Err(ConfigError::MinAboveStart {
                min: self.min_items,
                start: self.start_max_items,
            });
        }
        if self.start_max_items > self.max_items_cap {
            return Err(ConfigError::StartAboveCap {
                start: self.start_max_items,
                cap: self.max_items_cap,
            });
        }
        if self.min_time_limit > self.start_time_limit {
            return Err(ConfigError::MinTimeAboveStart {
                min: self.min_time_limit,
                start: self.start_time_limit,
            });
        }
        Ok(())
    }
}

fn env_u32(key: &str) -> Option<u32> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = GameConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.min_items, 3);
        assert_eq!(config.start_max_items, 18);
        assert_eq!(config.max_items_cap, 60);
        assert_eq!(config.start_time_limit, 14);
        assert_eq!(config.min_time_limit, 6);
    }

    #[test]
    fn rejects_zero_fields() {
        let config = GameConfig {
            time_decrement: 0,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NotPositive {
                field: "timeDecrement"
            })
        );
    }

    #[test]
    fn rejects_bad_ordering() {
        let config = GameConfig {
            min_items: 20,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MinAboveStart { min: 20, start: 18 })
        ));

        let config = GameConfig {
            max_items_cap: 10,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::StartAboveCap { .. })
        ));

        let config = GameConfig {
            min_time_limit: 15,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MinTimeAboveStart { .. })
        ));
    }

    #[test]
    fn deserializes_partial_camel_case() {
        let config: GameConfig =
            serde_json::from_str(r#"{"minItems":5,"startTimeLimit":20}"#).unwrap();
        assert_eq!(config.min_items, 5);
        assert_eq!(config.start_time_limit, 20);
        assert_eq!(config.max_items_cap, 60);
    }
}
