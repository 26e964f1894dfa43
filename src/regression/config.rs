// Configuration for trend significance testing

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the slope significance test
///
/// # Example
/// ```
/// use demand_trend::regression::RegressionConfig;
///
/// let config = RegressionConfig::default();
/// assert_eq!(config.significance_level, 0.05); // 95% confidence
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RegressionConfig {
    /// Significance level (alpha) for the two-tailed slope test
    ///
    /// A trend is significant when `p_value < significance_level`.
    /// - 0.05 (default): 95% confidence
    /// - 0.01: 99% confidence, stricter
    /// - 0.10: 90% confidence, looser
    pub significance_level: f64,
}

impl Default for RegressionConfig {
    fn default() -> Self {
        Self {
            significance_level: 0.05,
        }
    }
}

impl RegressionConfig {
    /// Create a strict configuration (99% confidence)
    pub fn strict() -> Self {
        Self {
            significance_level: 0.01,
        }
    }

    /// Create a permissive configuration (90% confidence)
    pub fn permissive() -> Self {
        Self {
            significance_level: 0.10,
        }
    }

    /// Parse configuration from TOML; missing keys keep their defaults
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).context("Invalid regression configuration")?;
        config.validate().map_err(|e| anyhow::anyhow!(e))?;
        Ok(config)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&contents).with_context(|| format!("In {}", path.display()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(self.significance_level > 0.0 && self.significance_level < 1.0) {
            return Err(format!(
                "significance_level must be in (0, 1), got {}",
                self.significance_level
            ));
        }

        Ok(())
    }
}
