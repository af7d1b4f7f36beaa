use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::prelude::*;
use crate::ticks::{DEFAULT_TICKS, DEFAULT_TICK_INTERVAL};

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SessionConfiguration {
    /// Tick budget of the first run
    #[serde(default = "default_ticks")]
    pub default_ticks: u32,
    /// Pause between generations of a run
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    #[serde(default)]
    pub edge_rule: EdgeRule,
}

fn default_ticks() -> u32 {
    DEFAULT_TICKS
}

fn default_tick_interval_ms() -> u64 {
    DEFAULT_TICK_INTERVAL.as_millis() as u64
}

impl Default for SessionConfiguration {
    fn default() -> Self {
        SessionConfiguration {
            default_ticks: default_ticks(),
            tick_interval_ms: default_tick_interval_ms(),
            edge_rule: EdgeRule::default(),
        }
    }
}

impl SessionConfiguration {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

#[cfg(test)]
mod test {
    use test_log::test;

    use super::*;

    #[test]
    fn empty_table_uses_defaults() {
        let config: SessionConfiguration = toml::from_str("").unwrap();
        assert_eq!(config, SessionConfiguration::default());
        assert_eq!(config.default_ticks, 10);
        assert_eq!(config.tick_interval(), Duration::from_millis(100));
        assert_eq!(config.edge_rule, EdgeRule::Bounded);
    }

    #[test]
    fn parses_every_field() {
        let config: SessionConfiguration = toml::from_str(
            r#"
            default_ticks = 25
            tick_interval_ms = 40
            edge_rule = "legacy"
            "#,
        )
        .unwrap();
        assert_eq!(config.default_ticks, 25);
        assert_eq!(config.tick_interval(), Duration::from_millis(40));
        assert_eq!(config.edge_rule, EdgeRule::Legacy);
    }

    #[test]
    fn unknown_edge_rule_is_rejected() {
        assert!(toml::from_str::<SessionConfiguration>(r#"edge_rule = "wrapping""#).is_err());
    }
}
