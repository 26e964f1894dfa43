use anyhow::Result;
use clap::Parser;
use demand_trend::cli::{Cli, OutputFormat};
use demand_trend::json_output::{JsonInput, JsonRegressionReport};
use demand_trend::observation;
use demand_trend::regression::{RegressionConfig, RegressionEngine};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Resolve configuration: defaults, then --config, then --significance-level
fn load_config(args: &Cli) -> Result<RegressionConfig> {
    let mut config = match &args.config {
        Some(path) => RegressionConfig::from_toml_file(path)?,
        None => RegressionConfig::default(),
    };

    if let Some(level) = args.significance_level {
        config.significance_level = level;
    }

    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid value for --significance-level: {}", e))?;
    Ok(config)
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    let config = load_config(&args)?;
    let observations = observation::load_observations(&args.input)?;

    let engine = RegressionEngine::new(&observations).with_config(config.clone());
    let (result, diagnostic) = engine.fit_with_diagnostic(args.start, args.end);

    match args.format {
        OutputFormat::Text => {
            if let Some(e) = &diagnostic {
                if e.is_out_of_range() {
                    eprintln!("{}", e);
                }
            }
            print!("{}", result.to_report_string());
        }
        OutputFormat::Json => {
            let input = JsonInput {
                observations: observations.len(),
                start: args.start,
                end: args.end,
            };
            let mut report = JsonRegressionReport::new(input, config.significance_level, result);
            if let Some(e) = diagnostic {
                report = report.with_diagnostic(e.to_string());
            }
            println!("{}", report.to_json()?);
        }
    }

    Ok(())
}
