//! Ledger table output.
//!
//! CSV layout (header always present, one row per record, source order):
//! Date,Type,Description,Amount

use anyhow::{Context, Result, bail};
use ledgerlift_core::TransactionRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

pub const HEADER: [&str; 4] = ["Date", "Type", "Description", "Amount"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    #[serde(rename = "csv")]
    Csv,
    #[serde(rename = "json")]
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => bail!("unknown output format: {other} (expected csv or json)"),
        }
    }
}

/// Write the four-column table. Returns the number of data rows written.
pub fn write_csv<W: Write>(records: &[TransactionRecord], writer: W) -> Result<usize> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(HEADER).context("write csv header")?;
    for r in records {
        wtr.write_record(r.columns())
            .with_context(|| format!("write csv row for {} {}", r.date, r.description))?;
    }
    wtr.flush().context("flush csv")?;

    Ok(records.len())
}

/// Pretty JSON array of full records (includes the numeric value and balance).
pub fn write_json<W: Write>(records: &[TransactionRecord], mut writer: W) -> Result<usize> {
    serde_json::to_writer_pretty(&mut writer, records).context("serialize records")?;
    writeln!(writer).context("write json")?;
    writer.flush().context("flush json")?;
    Ok(records.len())
}

pub fn write_path(
    records: &[TransactionRecord],
    path: impl AsRef<Path>,
    format: OutputFormat,
) -> Result<usize> {
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let out = BufWriter::new(file);

    let n = match format {
        OutputFormat::Csv => write_csv(records, out),
        OutputFormat::Json => write_json(records, out),
    }
    .with_context(|| format!("write {}", path.display()))?;

    tracing::debug!(path = %path.display(), rows = n, %format, "ledger written");
    Ok(n)
}
