// Least-squares trend detection for demand series
//
// Pipeline for one slice of observations:
//   slice selection -> distinct periods (last write wins) -> aggregate sums
//   -> slope/intercept -> residual standard error -> slope standard error
//   -> t-statistic -> two-tailed p-value -> trend decision
//
// Implementation:
// - Uses statrs (crates.io) for the Student t survival function
// - Uses fnv (crates.io) for the period index of the ordered series
// - Invalid slices and degenerate samples never escape `fit`; `try_fit`
//   exposes them as `RegressionError`

mod config;
mod engine;
mod error;
mod period_series;
mod result;
mod statistics;

pub use config::RegressionConfig;
pub use engine::RegressionEngine;
pub use error::RegressionError;
pub use period_series::{LeastSquaresSums, PeriodSeries};
pub use result::{RegressionResult, TrendDirection};
pub use statistics::two_tailed_p_value;
