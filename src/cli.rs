//! CLI argument parsing for Demand-Trend

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the regression report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "demand-trend")]
#[command(version)]
#[command(about = "Least-squares trend significance for demand series", long_about = None)]
pub struct Cli {
    /// JSON file of observations ({t, demand} records or bare demand values); `-` reads stdin
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// First observation index of the fitted slice (inclusive)
    #[arg(short = 's', long = "start", value_name = "INDEX", default_value = "0")]
    pub start: usize,

    /// End observation index of the fitted slice (exclusive); start=end=0 fits all but the last observation
    #[arg(short = 'e', long = "end", value_name = "INDEX", default_value = "0")]
    pub end: usize,

    /// Output format (text or json)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// TOML file with regression configuration
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Significance level for the slope test (overrides --config)
    #[arg(short = 'a', long = "significance-level", value_name = "ALPHA")]
    pub significance_level: Option<f64>,

    /// Enable debug tracing output to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}
