// Errors raised while fitting a trend line
//
// `RegressionEngine::try_fit` surfaces these directly; `RegressionEngine::fit`
// reports them and degrades to the neutral `RegressionResult`.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegressionError {
    #[error(
        "Slice {start}..{end} is out of range. The current length of the orders is {len}. \
         Please supply a range within this length."
    )]
    SliceOutOfRange { start: usize, end: usize, len: usize },

    #[error("{periods} distinct period(s) leave no degrees of freedom for the t-test (need at least 3)")]
    InsufficientPeriods { periods: usize },

    #[error("Period keys too large: least-squares sums overflow")]
    PeriodOverflow,

    #[error("Computed {quantity} is NaN or infinite")]
    NonFinite { quantity: &'static str },

    #[error("Invalid t-distribution with {degrees_of_freedom} degrees of freedom: {reason}")]
    Distribution {
        degrees_of_freedom: f64,
        reason: String,
    },
}

impl RegressionError {
    /// Whether the caller asked for a slice the sequence cannot provide
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, RegressionError::SliceOutOfRange { .. })
    }
}
