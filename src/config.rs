//! Optional TOML configuration for orbs and scoring weights.
//!
//! Defaults match the built-in catalogs exactly; a host can override any
//! subset via a `[harmonia]`-style table in its config file.

use crate::aspects::{AspectCatalog, WeightTable};
use crate::patterns::PatternOrbs;
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse harmonia config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Deserialize, Default)]
struct PatternOrbsToml {
    #[serde(default)]
    trine: Option<f64>,
    #[serde(default)]
    opposition: Option<f64>,
    #[serde(default)]
    square: Option<f64>,
    #[serde(default)]
    sextile: Option<f64>,
    #[serde(default)]
    quincunx: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
struct WeightsToml {
    #[serde(default)]
    conjunction: Option<f64>,
    #[serde(default)]
    trine: Option<f64>,
    #[serde(default)]
    sextile: Option<f64>,
    #[serde(default)]
    opposition: Option<f64>,
    #[serde(default)]
    square: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
struct ConfigToml {
    #[serde(default)]
    pattern_orbs: Option<PatternOrbsToml>,
    #[serde(default)]
    weights: Option<WeightsToml>,
}

/// Resolved configuration: the catalogs every component takes as input.
#[derive(Debug, Clone)]
pub struct Config {
    pub aspect_catalog: AspectCatalog,
    pub pattern_orbs: PatternOrbs,
    pub weights: WeightTable,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            aspect_catalog: AspectCatalog::majors(),
            pattern_orbs: PatternOrbs::default(),
            weights: WeightTable::default(),
        }
    }
}

impl Config {
    /// Parse a TOML override block on top of the defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let parsed: ConfigToml = toml::from_str(text)?;
        let mut config = Config::default();

        if let Some(orbs) = parsed.pattern_orbs {
            if let Some(v) = orbs.trine {
                config.pattern_orbs.trine = v;
            }
            if let Some(v) = orbs.opposition {
                config.pattern_orbs.opposition = v;
            }
            if let Some(v) = orbs.square {
                config.pattern_orbs.square = v;
            }
            if let Some(v) = orbs.sextile {
                config.pattern_orbs.sextile = v;
            }
            if let Some(v) = orbs.quincunx {
                config.pattern_orbs.quincunx = v;
            }
        }

        if let Some(weights) = parsed.weights {
            if let Some(v) = weights.conjunction {
                config.weights.conjunction = v;
            }
            if let Some(v) = weights.trine {
                config.weights.trine = v;
            }
            if let Some(v) = weights.sextile {
                config.weights.sextile = v;
            }
            if let Some(v) = weights.opposition {
                config.weights.opposition = v;
            }
            if let Some(v) = weights.square {
                config.weights.square = v;
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.pattern_orbs.quincunx, 3.0);
        assert_eq!(config.weights.conjunction, 8.0);
    }

    #[test]
    fn test_partial_override() {
        let config = Config::from_toml_str(
            r#"
            [pattern_orbs]
            trine = 6.0

            [weights]
            square = 1.0
            "#,
        )
        .unwrap();
        assert_eq!(config.pattern_orbs.trine, 6.0);
        assert_eq!(config.pattern_orbs.opposition, 8.0);
        assert_eq!(config.weights.square, 1.0);
        assert_eq!(config.weights.trine, 7.0);
    }

    #[test]
    fn test_bad_toml_errors() {
        assert!(Config::from_toml_str("not toml [").is_err());
    }
}
