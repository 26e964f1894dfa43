//! JSON output format for regression reports
//!
//! `--format json` renders one `demand-trend-json-v1` document per run.

use crate::regression::{RegressionResult, TrendDirection};
use serde::{Deserialize, Serialize};

/// Description of the fitted input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonInput {
    /// Observations supplied
    pub observations: usize,
    /// Requested slice start
    pub start: usize,
    /// Requested slice end (0 with start 0 means the default range)
    pub end: usize,
}

/// Complete JSON document for one regression run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRegressionReport {
    /// Format version identifier
    pub version: String,
    /// Format name
    pub format: String,
    pub input: JsonInput,
    pub significance_level: f64,
    pub result: RegressionResult,
    pub trend_direction: TrendDirection,
    /// Why the neutral result was reported, if it was
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<String>,
}

impl JsonRegressionReport {
    /// Create a new JSON report
    pub fn new(input: JsonInput, significance_level: f64, result: RegressionResult) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            format: "demand-trend-json-v1".to_string(),
            input,
            significance_level,
            trend_direction: result.trend_direction(),
            result,
            diagnostic: None,
        }
    }

    pub fn with_diagnostic(mut self, diagnostic: impl Into<String>) -> Self {
        self.diagnostic = Some(diagnostic.into());
        self
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> JsonInput {
        JsonInput {
            observations: 6,
            start: 0,
            end: 0,
        }
    }

    #[test]
    fn test_json_report_creation() {
        let report = JsonRegressionReport::new(input(), 0.05, RegressionResult::default());
        assert_eq!(report.format, "demand-trend-json-v1");
        assert_eq!(report.trend_direction, TrendDirection::Flat);
        assert!(report.diagnostic.is_none());
    }

    #[test]
    fn test_json_serialization() {
        let result = RegressionResult {
            slope: 2.5,
            intercept: 100.0,
            standard_error_of_slope: 0.5,
            test_statistic: 5.0,
            p_value: 0.001,
            residual_standard_error: 12.0,
            trend_significant: true,
        };
        let json = JsonRegressionReport::new(input(), 0.05, result)
            .to_json()
            .unwrap();

        assert!(json.contains("\"format\": \"demand-trend-json-v1\""));
        assert!(json.contains("\"slope\": 2.5"));
        assert!(json.contains("\"trend_significant\": true"));
        assert!(json.contains("\"trend_direction\": \"upward\""));
        assert!(json.contains("\"observations\": 6"));
    }

    #[test]
    fn test_diagnostic_omitted_when_absent() {
        let json = JsonRegressionReport::new(input(), 0.05, RegressionResult::default())
            .to_json()
            .unwrap();
        assert!(!json.contains("diagnostic"));
    }

    #[test]
    fn test_diagnostic_included() {
        let json = JsonRegressionReport::new(input(), 0.05, RegressionResult::default())
            .with_diagnostic("out of range")
            .to_json()
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["diagnostic"], "out of range");
        assert_eq!(parsed["result"]["slope"], 0.0);
    }
}
