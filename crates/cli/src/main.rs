//! # insight-cli
//!
//! Command-line interface for business metric analysis: anomaly consensus,
//! trend characterisation and forecasts over a CSV dataset.

mod source;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use insight::forecast::{interpolate_missing, Forecaster};
use insight::{Dataset, InsightAnalyzer, InsightConfig, InsightSummary};
use serde_json::json;
use source::CsvLayout;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "insight")]
#[command(about = "Anomaly, trend and forecast analysis for business metrics", long_about = None)]
#[command(version)]
struct Cli {
    /// Analysis config file (TOML); defaults are used when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct InputArgs {
    /// Input CSV file
    #[arg(short, long)]
    input: PathBuf,

    /// Name of the date column
    #[arg(long, default_value = "date")]
    date_column: String,

    /// Metric columns to analyse (default: every numeric column)
    #[arg(short, long, value_delimiter = ',')]
    metrics: Vec<String>,

    /// Derived ratio metric as NAME=NUMERATOR/DENOMINATOR
    #[arg(long = "ratio", value_parser = parse_ratio)]
    ratios: Vec<Ratio>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Subcommand)]
enum Commands {
    /// Full analysis: anomaly consensus plus trend and forecasts per metric
    Analyze {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Anomaly consensus only
    Detect {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Forecast one metric with every enabled model
    Forecast {
        #[command(flatten)]
        input: InputArgs,

        /// Metric column to forecast
        #[arg(long)]
        metric: String,

        /// Steps to forecast (overrides the config)
        #[arg(short, long)]
        steps: Option<usize>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Debug, Clone)]
struct Ratio {
    name: String,
    numerator: String,
    denominator: String,
}

fn parse_ratio(arg: &str) -> std::result::Result<Ratio, String> {
    let (name, expr) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=NUMERATOR/DENOMINATOR, got '{arg}'"))?;
    let (numerator, denominator) = expr
        .split_once('/')
        .ok_or_else(|| format!("expected NUMERATOR/DENOMINATOR, got '{expr}'"))?;
    Ok(Ratio {
        name: name.trim().to_string(),
        numerator: numerator.trim().to_string(),
        denominator: denominator.trim().to_string(),
    })
}

/// Load, derive ratios and order rows by date.
fn load_dataset(args: &InputArgs) -> Result<Dataset> {
    let layout = CsvLayout {
        date_column: args.date_column.clone(),
        metrics: args.metrics.clone(),
    };
    let mut dataset = source::load_csv(&args.input, &layout)?;
    for ratio in &args.ratios {
        dataset = dataset
            .with_ratio(&ratio.name, &ratio.numerator, &ratio.denominator)
            .with_context(|| format!("failed to derive ratio '{}'", ratio.name))?;
    }
    let dataset = dataset.sorted_by_time();
    tracing::info!(
        rows = dataset.len(),
        metrics = dataset.metrics().len(),
        input = %args.input.display(),
        "dataset loaded"
    );
    Ok(dataset)
}

fn write_output(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let mut file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            file.write_all(content.as_bytes())?;
            tracing::info!(path = %path.display(), "results written");
        }
        None => println!("{content}"),
    }
    Ok(())
}

fn run_analyze(config: InsightConfig, args: &InputArgs) -> Result<()> {
    let dataset = load_dataset(args)?;
    let report = InsightAnalyzer::new(config)?.analyze(&dataset)?;
    let summary = InsightSummary::from(&report);

    let content = match args.format {
        Format::Text => summary.plain_text(),
        Format::Json => serde_json::to_string_pretty(&json!({
            "summary": summary.structured(),
            "report": report,
        }))?,
    };
    write_output(&content, args.output.as_deref())
}

fn run_detect(config: InsightConfig, args: &InputArgs) -> Result<()> {
    let dataset = load_dataset(args)?;
    let result = InsightAnalyzer::new(config)?.detect_anomalies(&dataset)?;
    let summary = result.summary();

    let content = match args.format {
        Format::Text => {
            let mut text = format!(
                "{} records, {} consensus anomalies\n",
                summary.total_records, summary.consensus_anomalies
            );
            for (detector, count) in &summary.method_counts {
                text.push_str(&format!("  {detector}: {count} flagged\n"));
            }
            for skipped in &summary.skipped {
                text.push_str(&format!("  {} skipped: {}\n", skipped.detector, skipped.reason));
            }
            for i in result.consensus_indices() {
                text.push_str(&format!(
                    "  {} ({} votes)\n",
                    dataset.timestamps()[i],
                    result.vote_counts[i]
                ));
            }
            text
        }
        Format::Json => {
            let anomalies: Vec<_> = result
                .consensus_indices()
                .into_iter()
                .map(|i| {
                    json!({
                        "index": i,
                        "date": dataset.timestamps()[i].to_string(),
                        "votes": result.vote_counts[i],
                    })
                })
                .collect();
            serde_json::to_string_pretty(&json!({
                "summary": summary,
                "anomalies": anomalies,
            }))?
        }
    };
    write_output(&content, args.output.as_deref())
}

fn run_forecast(
    mut config: InsightConfig,
    args: &InputArgs,
    metric: &str,
    steps: Option<usize>,
) -> Result<()> {
    if let Some(steps) = steps {
        config.forecast.horizon = steps;
    }
    let dataset = load_dataset(args)?;
    let series = interpolate_missing(dataset.series(metric)?)
        .ok_or_else(|| anyhow!("metric '{metric}' has no values"))?;
    let bundle = Forecaster::new(&config.forecast)?.forecast_all(&series);
    if bundle.is_empty() {
        let reasons: Vec<String> = bundle
            .failures
            .iter()
            .map(|f| format!("{}: {}", f.model, f.reason))
            .collect();
        return Err(anyhow!("no model produced a forecast ({})", reasons.join("; ")));
    }

    let content = match args.format {
        Format::Text => {
            let mut text = format!("{metric}: {} observations\n", series.len());
            for result in &bundle.results {
                text.push_str(&format!("{}\n", result.model));
                for point in &result.points {
                    match (point.lower, point.upper) {
                        (Some(lo), Some(hi)) => text.push_str(&format!(
                            "  step {}: {:.4} [{:.4}, {:.4}]\n",
                            point.index + 1 - series.len(),
                            point.value,
                            lo,
                            hi
                        )),
                        _ => text.push_str(&format!(
                            "  step {}: {:.4}\n",
                            point.index + 1 - series.len(),
                            point.value
                        )),
                    }
                }
            }
            for failure in &bundle.failures {
                text.push_str(&format!("{} failed: {}\n", failure.model, failure.reason));
            }
            text
        }
        Format::Json => serde_json::to_string_pretty(&json!({
            "metric": metric,
            "history": series.len(),
            "forecasts": bundle,
        }))?,
    };
    write_output(&content, args.output.as_deref())
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,insight=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = InsightConfig::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::Analyze { input } => run_analyze(config, &input),
        Commands::Detect { input } => run_detect(config, &input),
        Commands::Forecast {
            input,
            metric,
            steps,
        } => run_forecast(config, &input, &metric, steps),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_ratio() {
        let ratio = parse_ratio("aov=revenue/orders").unwrap();
        assert_eq!(ratio.name, "aov");
        assert_eq!(ratio.numerator, "revenue");
        assert_eq!(ratio.denominator, "orders");

        assert!(parse_ratio("aov").is_err());
        assert!(parse_ratio("aov=revenue").is_err());
    }

    #[test]
    fn test_parse_arguments() {
        let cli = Cli::try_parse_from([
            "insight",
            "forecast",
            "-i",
            "sales.csv",
            "--metric",
            "revenue",
            "--steps",
            "14",
            "--format",
            "json",
        ])
        .unwrap();

        match cli.command {
            Commands::Forecast {
                input,
                metric,
                steps,
            } => {
                assert_eq!(input.input, PathBuf::from("sales.csv"));
                assert_eq!(metric, "revenue");
                assert_eq!(steps, Some(14));
                assert!(matches!(input.format, Format::Json));
            }
            _ => panic!("expected forecast command"),
        }
    }
}
