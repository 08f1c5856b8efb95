use anyhow::{Context, Result, bail};
use ledgerlift_core::RunningBalance;
use ledgerlift_export::{OutputFormat, write_csv, write_json, write_path};
use ledgerlift_ingest::{Extraction, LineOutcome, SkipReason, source_for_path};
use std::io;
use std::path::{Path, PathBuf};

use crate::config::Config;

fn read_pages(input: &Path) -> Result<Vec<Option<String>>> {
    if !input.exists() {
        bail!("statement not found: {} (pass a path to a PDF or text file)", input.display());
    }
    source_for_path(input)?
        .pages()
        .with_context(|| format!("reading {}", input.display()))
}

/// Where the ledger goes: `None` means stdout.
fn output_target(
    input: &Path,
    output: Option<PathBuf>,
    format: OutputFormat,
) -> Result<Option<PathBuf>> {
    let target = match output {
        Some(p) if p.as_os_str() == "-" => return Ok(None),
        Some(p) => p,
        None => input.with_extension(format.extension()),
    };
    if target == input {
        bail!(
            "output {} would overwrite the statement (pass --output)",
            target.display()
        );
    }
    Ok(Some(target))
}

pub fn extract(cfg: &Config, input: &Path) -> Result<Extraction> {
    let pages = read_pages(input)?;
    tracing::debug!(input = %input.display(), pages = pages.len(), "statement loaded");
    cfg.extractor()
        .run(pages)
        .with_context(|| format!("extracting {}", input.display()))
}

pub fn run_extract(
    cfg: &Config,
    input: &Path,
    output: Option<PathBuf>,
    format: Option<OutputFormat>,
) -> Result<()> {
    let format = format.unwrap_or(cfg.output.format);
    let target = output_target(input, output, format)?;

    let extraction = extract(cfg, input)?;

    match &target {
        Some(path) => {
            write_path(&extraction.records, path, format)?;
            println!("Wrote {}", path.display());
            println!("{} transactions extracted.", extraction.len());
        }
        None => {
            let stdout = io::stdout().lock();
            match format {
                OutputFormat::Csv => write_csv(&extraction.records, stdout)?,
                OutputFormat::Json => write_json(&extraction.records, stdout)?,
            };
            eprintln!("{} transactions extracted.", extraction.len());
        }
    }

    Ok(())
}

pub fn run_inspect(cfg: &Config, input: &Path, all: bool) -> Result<()> {
    let pages = read_pages(input)?;
    let extractor = cfg.extractor();
    let mut state = RunningBalance::unset();
    let mut accepted = 0usize;

    for (page_idx, page) in pages.iter().enumerate() {
        let Some(text) = page else {
            println!("p{:<3}      (no text)", page_idx + 1);
            continue;
        };

        for (line_idx, line) in text.lines().enumerate() {
            let (next, outcome) = extractor.step(state, line).with_context(|| {
                format!("page {}, line {}: {}", page_idx + 1, line_idx + 1, line.trim())
            })?;
            state = next;

            let loc = format!("p{}:{}", page_idx + 1, line_idx + 1);
            match outcome {
                LineOutcome::Accepted { pattern, record } => {
                    accepted += 1;
                    println!(
                        "{:<9} {:<10} {:>14}  {}",
                        loc,
                        pattern.as_str(),
                        record.amount,
                        line.trim()
                    );
                }
                LineOutcome::Skipped(SkipReason::Empty) if !all => {}
                LineOutcome::Skipped(reason) => {
                    println!("{:<9} {:<10} {:>14}  {}", loc, reason.as_str(), "", line.trim());
                }
            }
        }
    }

    println!("\n{} transactions would be extracted.", accepted);
    Ok(())
}
