// Regression result and human-readable trend report

use serde::{Deserialize, Serialize};

/// Fitted trend line and slope significance test for one slice
///
/// `Default` is the neutral result returned whenever a slice cannot be fitted:
/// every numeric field `0.0`, `trend_significant == false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RegressionResult {
    /// Demand change per period
    pub slope: f64,

    /// Fitted demand at period 0
    pub intercept: f64,

    /// Standard error of the slope estimator
    #[serde(alias = "slope_standard_error")]
    pub standard_error_of_slope: f64,

    /// slope / standard_error_of_slope
    pub test_statistic: f64,

    /// Two-tailed p-value of the test statistic, in [0, 1]
    #[serde(alias = "pvalue")]
    pub p_value: f64,

    #[serde(alias = "std_residuals")]
    pub residual_standard_error: f64,

    /// `p_value < significance_level` (0.05 by default)
    #[serde(alias = "trend")]
    pub trend_significant: bool,
}

/// Direction of a fitted trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Upward,
    Downward,
    /// No statistically significant slope
    Flat,
}

impl std::fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrendDirection::Upward => write!(f, "upward"),
            TrendDirection::Downward => write!(f, "downward"),
            TrendDirection::Flat => write!(f, "flat"),
        }
    }
}

impl RegressionResult {
    /// Whether this is the neutral result of an unfittable slice
    pub fn is_neutral(&self) -> bool {
        *self == Self::default()
    }

    pub fn trend_direction(&self) -> TrendDirection {
        if !self.trend_significant || self.slope == 0.0 {
            TrendDirection::Flat
        } else if self.slope > 0.0 {
            TrendDirection::Upward
        } else {
            TrendDirection::Downward
        }
    }

    /// Generate human-readable report
    pub fn to_report_string(&self) -> String {
        let mut report = String::new();

        match self.trend_direction() {
            TrendDirection::Upward => report.push_str("📈 SIGNIFICANT UPWARD TREND\n\n"),
            TrendDirection::Downward => report.push_str("📉 SIGNIFICANT DOWNWARD TREND\n\n"),
            TrendDirection::Flat if self.is_neutral() => {
                report.push_str("⚠️  INSUFFICIENT DATA\n\n");
                report.push_str("Slice could not be fitted; neutral result reported.\n\n");
            }
            TrendDirection::Flat => report.push_str("➖ NO SIGNIFICANT TREND\n\n"),
        }

        report.push_str("📊 Least Squares Fit:\n");
        report.push_str(&format!("  Slope:                   {:.6}\n", self.slope));
        report.push_str(&format!("  Intercept:               {:.6}\n", self.intercept));
        report.push_str(&format!(
            "  Residual standard error: {:.6}\n",
            self.residual_standard_error
        ));
        report.push_str(&format!(
            "  Slope standard error:    {:.6}\n",
            self.standard_error_of_slope
        ));
        report.push_str(&format!(
            "  Test statistic:          {:.6}\n",
            self.test_statistic
        ));
        report.push_str(&format!("  p-value (two-tailed):    {:.6}\n", self.p_value));

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn significant(slope: f64) -> RegressionResult {
        RegressionResult {
            slope,
            intercept: 10.0,
            standard_error_of_slope: 0.1,
            test_statistic: slope / 0.1,
            p_value: 0.001,
            residual_standard_error: 1.0,
            trend_significant: true,
        }
    }

    #[test]
    fn test_default_is_neutral() {
        let result = RegressionResult::default();
        assert_eq!(result.slope, 0.0);
        assert_eq!(result.p_value, 0.0);
        assert_eq!(result.test_statistic, 0.0);
        assert_eq!(result.standard_error_of_slope, 0.0);
        assert_eq!(result.intercept, 0.0);
        assert_eq!(result.residual_standard_error, 0.0);
        assert!(!result.trend_significant);
        assert!(result.is_neutral());
    }

    #[test]
    fn test_trend_direction() {
        assert_eq!(significant(2.0).trend_direction(), TrendDirection::Upward);
        assert_eq!(significant(-2.0).trend_direction(), TrendDirection::Downward);

        let mut not_significant = significant(2.0);
        not_significant.trend_significant = false;
        assert_eq!(not_significant.trend_direction(), TrendDirection::Flat);
    }

    #[test]
    fn test_serializes_public_field_names() {
        let json = serde_json::to_value(significant(1.5)).unwrap();
        for key in [
            "slope",
            "intercept",
            "standard_error_of_slope",
            "test_statistic",
            "p_value",
            "residual_standard_error",
            "trend_significant",
        ] {
            assert!(json.get(key).is_some(), "missing {}", key);
        }
    }

    #[test]
    fn test_deserializes_legacy_keys() {
        let legacy = r#"{
            "slope": -3.0, "pvalue": 0.93, "test_statistic": -0.09,
            "slope_standard_error": 31.6, "intercept": 164.0,
            "std_residuals": 315.97, "trend": false
        }"#;
        let result: RegressionResult = serde_json::from_str(legacy).unwrap();
        assert_eq!(result.slope, -3.0);
        assert_eq!(result.p_value, 0.93);
        assert_eq!(result.standard_error_of_slope, 31.6);
        assert_eq!(result.residual_standard_error, 315.97);
        assert!(!result.trend_significant);
    }

    #[test]
    fn test_report_string_upward() {
        let report = significant(2.0).to_report_string();
        assert!(report.contains("SIGNIFICANT UPWARD TREND"));
        assert!(report.contains("Slope:"));
    }

    #[test]
    fn test_report_string_neutral() {
        let report = RegressionResult::default().to_report_string();
        assert!(report.contains("INSUFFICIENT DATA"));
    }

    #[test]
    fn test_report_string_flat() {
        let mut result = significant(0.5);
        result.trend_significant = false;
        result.p_value = 0.4;
        assert!(result.to_report_string().contains("NO SIGNIFICANT TREND"));
    }
}
