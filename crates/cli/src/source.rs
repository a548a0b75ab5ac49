//! CSV source adapter: one date column plus numeric metric columns.

use anyhow::{anyhow, bail, Context, Result};
use chrono::NaiveDate;
use insight::Dataset;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%d.%m.%Y"];

/// Which columns to read.
#[derive(Debug, Clone)]
pub struct CsvLayout {
    pub date_column: String,
    /// Metric columns to load; every numeric column when empty
    pub metrics: Vec<String>,
}

pub fn load_csv(path: &Path, layout: &CsvLayout) -> Result<Dataset> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    read_csv(BufReader::new(file), layout)
        .with_context(|| format!("failed to load {}", path.display()))
}

pub fn read_csv(reader: impl Read, layout: &CsvLayout) -> Result<Dataset> {
    let mut reader = csv::Reader::from_reader(reader);
    let headers = reader.headers().context("failed to read headers")?.clone();
    let date_idx = headers
        .iter()
        .position(|h| h == layout.date_column)
        .ok_or_else(|| anyhow!("date column '{}' not found", layout.date_column))?;

    let records = reader
        .records()
        .collect::<std::result::Result<Vec<_>, _>>()
        .context("failed to read record")?;

    let mut dates = Vec::with_capacity(records.len());
    for (row, record) in records.iter().enumerate() {
        let cell = record.get(date_idx).unwrap_or("").trim();
        dates.push(
            parse_date(cell).ok_or_else(|| anyhow!("row {}: invalid date '{cell}'", row + 1))?,
        );
    }

    let explicit = !layout.metrics.is_empty();
    let candidates: Vec<(usize, &str)> = headers
        .iter()
        .enumerate()
        .filter(|&(i, name)| {
            i != date_idx && (!explicit || layout.metrics.iter().any(|m| m == name))
        })
        .collect();
    for wanted in &layout.metrics {
        if !candidates.iter().any(|(_, name)| name == wanted) {
            bail!("metric column '{wanted}' not found");
        }
    }

    let mut dataset = Dataset::new(dates);
    for (idx, name) in candidates {
        match parse_column(&records, idx) {
            Some(values) => dataset = dataset.with_metric(name, values)?,
            None if explicit => bail!("metric column '{name}' is not numeric"),
            None => tracing::debug!(column = name, "skipping non-numeric column"),
        }
    }
    if dataset.metrics().is_empty() {
        bail!("no numeric metric columns found");
    }
    Ok(dataset)
}

fn parse_date(cell: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(cell, format).ok())
}

/// Numeric values of one column, empty cells as `NaN`. `None` if any
/// non-empty cell is not a number.
fn parse_column(records: &[csv::StringRecord], idx: usize) -> Option<Vec<f64>> {
    records
        .iter()
        .map(|record| {
            let cell = record.get(idx).unwrap_or("").trim();
            if cell.is_empty() {
                Some(f64::NAN)
            } else {
                cell.parse::<f64>().ok()
            }
        })
        .collect()
}
