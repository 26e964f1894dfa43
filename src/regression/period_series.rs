// Ordered period -> demand mapping with last-write-wins semantics
//
// A repeated period overwrites the demand in place; iteration keeps the
// position of the first occurrence. Every sum below, and the effective sample
// size, is taken over distinct periods only.

use crate::observation::PeriodDemand;
use crate::regression::error::RegressionError;
use fnv::FnvHashMap;

/// Distinct periods of a slice, in first-seen order
#[derive(Debug, Clone, Default)]
pub struct PeriodSeries {
    entries: Vec<(i64, f64)>,
    index: FnvHashMap<i64, usize>,
}

impl PeriodSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collapse observations by period; a later duplicate replaces the earlier demand
    pub fn from_observations<O: PeriodDemand>(observations: &[O]) -> Self {
        let mut series = Self {
            entries: Vec::with_capacity(observations.len()),
            index: FnvHashMap::default(),
        };
        for observation in observations {
            series.insert(observation.period(), observation.demand());
        }
        series
    }

    /// Insert or overwrite the demand for `t`, returning the previous value
    pub fn insert(&mut self, t: i64, demand: f64) -> Option<f64> {
        match self.index.get(&t) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].1, demand)),
            None => {
                self.index.insert(t, self.entries.len());
                self.entries.push((t, demand));
                None
            }
        }
    }

    pub fn get(&self, t: i64) -> Option<f64> {
        self.index.get(&t).map(|&pos| self.entries[pos].1)
    }

    /// Number of distinct periods (the effective sample size)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i64, f64)> + '_ {
        self.entries.iter().copied()
    }

    /// Aggregate the least-squares sums in first-seen order
    ///
    /// Period keys are summed exactly in `i128`. Fails with `PeriodOverflow`
    /// when `Σt`, `Σt²` or `n·Σt²` leaves that range, e.g. a handful of keys
    /// near `i64::MAX`; such slices get the neutral result from `fit`.
    pub fn sums(&self) -> Result<LeastSquaresSums, RegressionError> {
        let mut sums = LeastSquaresSums {
            n: self.entries.len(),
            ..LeastSquaresSums::default()
        };
        for &(t, demand) in &self.entries {
            let x = i128::from(t);
            sums.sum_x = sums.sum_x.checked_add(x).ok_or(RegressionError::PeriodOverflow)?;
            sums.sum_x2 = x
                .checked_mul(x)
                .and_then(|sq| sums.sum_x2.checked_add(sq))
                .ok_or(RegressionError::PeriodOverflow)?;
            sums.sum_y += demand;
            sums.sum_xy += t as f64 * demand;
        }
        // n·Σx² ≥ (Σx)², so this bounds every later integer product
        (sums.n as i128)
            .checked_mul(sums.sum_x2)
            .ok_or(RegressionError::PeriodOverflow)?;
        Ok(sums)
    }
}

/// Raw sums over the distinct periods of a slice
///
/// Period sums stay integral so `Σx`, `Σx²` and `(Σx)²` are exact.
/// Built only through [`PeriodSeries::sums`], which rules out overflow in
/// `n·Σx²` and `(Σx)²`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LeastSquaresSums {
    n: usize,
    sum_x: i128,
    sum_y: f64,
    sum_xy: f64,
    sum_x2: i128,
}

impl LeastSquaresSums {
    /// Count of distinct periods
    pub fn n(&self) -> usize {
        self.n
    }

    /// Σx
    pub fn sum_x(&self) -> i128 {
        self.sum_x
    }

    /// Σy
    pub fn sum_y(&self) -> f64 {
        self.sum_y
    }

    /// Σ(x·y)
    pub fn sum_xy(&self) -> f64 {
        self.sum_xy
    }

    /// Σx²
    pub fn sum_x2(&self) -> i128 {
        self.sum_x2
    }

    /// (Σx)²
    pub fn total_sum_x_sq(&self) -> Result<i128, RegressionError> {
        self.sum_x
            .checked_mul(self.sum_x)
            .ok_or(RegressionError::PeriodOverflow)
    }

    /// n·Σx² − (Σx)², the slope denominator
    pub fn period_spread(&self) -> Result<i128, RegressionError> {
        (self.n as i128)
            .checked_mul(self.sum_x2)
            .and_then(|scaled| scaled.checked_sub(self.total_sum_x_sq().ok()?))
            .ok_or(RegressionError::PeriodOverflow)
    }

    /// (Σy)², the square of the summed demand
    pub fn total_sum_y_sq(&self) -> f64 {
        self.sum_y * self.sum_y
    }
}
