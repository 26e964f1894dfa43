//! Demand-Trend - least-squares trend significance for demand series
//!
//! This library fits an ordinary least-squares line over a time-indexed
//! series of demand observations and tests whether the slope is
//! statistically distinguishable from zero, as a diagnostic step of a
//! demand-forecasting pipeline.

pub mod cli;
pub mod json_output;
pub mod observation;
pub mod regression;
