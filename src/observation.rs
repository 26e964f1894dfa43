//! Demand observations consumed by the regression engine
//!
//! Observations arrive from the upstream forecasting stage as an ordered
//! sequence of `(t, demand)` records. Order reflects chronological period order.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

/// A single demand observation for one period
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Period identifier, used as the independent variable
    pub t: i64,
    /// Observed (or forecast) demand, used as the dependent variable
    pub demand: f64,
}

impl Observation {
    pub fn new(t: i64, demand: f64) -> Self {
        Self { t, demand }
    }
}

/// Anything that exposes a period key and a demand value
///
/// Lets forecasting collaborators hand their own record types to
/// [`RegressionEngine`](crate::regression::RegressionEngine) without copying
/// them into [`Observation`]s first.
pub trait PeriodDemand {
    fn period(&self) -> i64;
    fn demand(&self) -> f64;
}

impl PeriodDemand for Observation {
    fn period(&self) -> i64 {
        self.t
    }

    fn demand(&self) -> f64 {
        self.demand
    }
}

impl PeriodDemand for (i64, f64) {
    fn period(&self) -> i64 {
        self.0
    }

    fn demand(&self) -> f64 {
        self.1
    }
}

/// Accepted shapes of an observation document
///
/// Either explicit `{"t": .., "demand": ..}` records, or a bare list of demand
/// values numbered from period 0.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ObservationInput {
    Records(Vec<Observation>),
    Orders(Vec<f64>),
}

impl ObservationInput {
    pub fn into_observations(self) -> Vec<Observation> {
        match self {
            ObservationInput::Records(records) => records,
            ObservationInput::Orders(orders) => orders
                .into_iter()
                .enumerate()
                .map(|(t, demand)| Observation::new(t as i64, demand))
                .collect(),
        }
    }
}

/// Decode observations from a JSON document
pub fn parse_observations(input: &str) -> Result<Vec<Observation>> {
    let parsed: ObservationInput = serde_json::from_str(input)
        .context("Expected a JSON array of {t, demand} records or of demand values")?;
    Ok(parsed.into_observations())
}

/// Load observations from a JSON file, or from stdin when `path` is `-`
pub fn load_observations(path: &Path) -> Result<Vec<Observation>> {
    let contents = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read observations from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read observations from {}", path.display()))?
    };

    let observations = parse_observations(&contents)
        .with_context(|| format!("Invalid observation document: {}", path.display()))?;
    tracing::debug!(
        "Loaded {} observations from {}",
        observations.len(),
        path.display()
    );
    Ok(observations)
}
