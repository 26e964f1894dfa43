// Least-squares trend fitting over a slice of demand observations

use crate::observation::{Observation, PeriodDemand};
use crate::regression::config::RegressionConfig;
use crate::regression::error::RegressionError;
use crate::regression::period_series::PeriodSeries;
use crate::regression::result::RegressionResult;
use std::ops::Range;

/// Fits a trend line over (a slice of) an observation sequence
///
/// Borrows the observations read-only, so one engine may serve concurrent
/// `fit` calls for different slices.
///
/// # Example
/// ```
/// use demand_trend::observation::Observation;
/// use demand_trend::regression::RegressionEngine;
///
/// let orders: Vec<Observation> = [165.0, 171.0, 147.0, 143.0, 164.0, 160.0]
///     .iter()
///     .enumerate()
///     .map(|(t, &demand)| Observation::new(t as i64, demand))
///     .collect();
///
/// // (0, 0) fits indices 0..5; the final observation is left out
/// let result = RegressionEngine::new(&orders).fit(0, 0);
/// assert!((result.slope + 3.0).abs() < 1e-9);
/// assert!(!result.trend_significant);
/// ```
#[derive(Debug, Clone)]
pub struct RegressionEngine<'a, O = Observation> {
    observations: &'a [O],
    config: RegressionConfig,
}

impl<'a, O: PeriodDemand> RegressionEngine<'a, O> {
    pub fn new(observations: &'a [O]) -> Self {
        Self {
            observations,
            config: RegressionConfig::default(),
        }
    }

    pub fn with_config(mut self, config: RegressionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &RegressionConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Map `(start, end)` onto a half-open index range
    ///
    /// `(0, 0)` selects `0..len - 1`: the default range leaves out the final
    /// observation. Consumers depend on this, keep it.
    pub fn resolve_slice(&self, start: usize, end: usize) -> Result<Range<usize>, RegressionError> {
        let len = self.observations.len();
        if start == 0 && end == 0 {
            return Ok(0..len.saturating_sub(1));
        }
        if end > len || start > end {
            return Err(RegressionError::SliceOutOfRange { start, end, len });
        }
        Ok(start..end)
    }

    /// Collapse the selected slice into distinct periods
    pub fn period_series(&self, start: usize, end: usize) -> Result<PeriodSeries, RegressionError> {
        let range = self.resolve_slice(start, end)?;
        Ok(PeriodSeries::from_observations(&self.observations[range]))
    }

    /// Fit the slice, surfacing every failure to the caller
    pub fn try_fit(&self, start: usize, end: usize) -> Result<RegressionResult, RegressionError> {
        let series = self.period_series(start, end)?;
        tracing::trace!(
            "Fitting {} distinct periods from slice ({}, {})",
            series.len(),
            start,
            end
        );
        series.sums()?.solve(self.config.significance_level)
    }

    /// Fit the slice; never fails
    ///
    /// Out-of-range slices and degenerate samples are reported through
    /// `tracing` and yield `RegressionResult::default()`.
    pub fn fit(&self, start: usize, end: usize) -> RegressionResult {
        self.fit_with_diagnostic(start, end).0
    }

    /// Like [`fit`](Self::fit), also handing back the error that was masked
    pub fn fit_with_diagnostic(
        &self,
        start: usize,
        end: usize,
    ) -> (RegressionResult, Option<RegressionError>) {
        match self.try_fit(start, end) {
            Ok(result) => (result, None),
            Err(e) => {
                if e.is_out_of_range() {
                    tracing::warn!("{}", e);
                } else {
                    tracing::debug!(
                        "Neutral regression result for slice ({}, {}): {}",
                        start,
                        end,
                        e
                    );
                }
                (RegressionResult::default(), Some(e))
            }
        }
    }
}
