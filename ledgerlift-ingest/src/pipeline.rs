//! The extraction run: a single forward fold over pages and lines.

use ledgerlift_core::{CurrencyFormat, MoneyError, RunningBalance, TransactionRecord};
use serde::Serialize;
use tracing::{debug, info, trace};

use crate::classifier::{Classification, LineClassifier, LinePattern, SkipReason};
use crate::error::ExtractError;
use crate::resolver::resolve;

/// What one line contributed to the run
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    Accepted {
        pattern: LinePattern,
        record: TransactionRecord,
    },
    Skipped(SkipReason),
}

/// Counters for reporting after a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExtractStats {
    pub pages: usize,
    /// Pages that yielded no text at all
    pub empty_pages: usize,
    pub lines: usize,
    pub skipped: usize,
    pub matched_typed: usize,
    pub matched_untyped: usize,
}

/// Result of a full run, records in source order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    pub records: Vec<TransactionRecord>,
    pub stats: ExtractStats,
    /// Balance of the last accepted line
    pub closing: RunningBalance,
}

impl Extraction {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Extractor {
    classifier: LineClassifier,
    format: CurrencyFormat,
}

impl Extractor {
    pub fn new(classifier: LineClassifier, format: CurrencyFormat) -> Self {
        Self { classifier, format }
    }

    pub fn classifier(&self) -> &LineClassifier {
        &self.classifier
    }

    /// One fold step: (previous balance, line) -> (next balance, outcome).
    ///
    /// Skipped lines hand the state back untouched.
    pub fn step(
        &self,
        state: RunningBalance,
        line: &str,
    ) -> Result<(RunningBalance, LineOutcome), MoneyError> {
        match self.classifier.classify(line) {
            Classification::Skipped(reason) => Ok((state, LineOutcome::Skipped(reason))),
            Classification::Matched { pattern, fields } => {
                let (next, record) = resolve(state, fields, &self.format)?;
                Ok((next, LineOutcome::Accepted { pattern, record }))
            }
        }
    }

    /// Run over every page in order. `None` (or blank text) is a page with no
    /// lines. Zero records is a valid result.
    pub fn run<I, S>(&self, pages: I) -> Result<Extraction, ExtractError>
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        let mut out = Extraction::default();
        let mut state = RunningBalance::unset();

        for (page_idx, page) in pages.into_iter().enumerate() {
            let page_no = page_idx + 1;
            out.stats.pages += 1;

            let text = page.as_ref().map(|s| AsRef::<str>::as_ref(s));
            let Some(text) = text.filter(|t| !t.trim().is_empty()) else {
                debug!(page = page_no, "page has no text");
                out.stats.empty_pages += 1;
                continue;
            };

            for (line_idx, line) in text.lines().enumerate() {
                out.stats.lines += 1;

                let (next, outcome) = self.step(state, line).map_err(
                    |MoneyError::Malformed(bad)| ExtractError::MalformedNumber {
                        page: page_no,
                        line: line_idx + 1,
                        text: bad,
                    },
                )?;
                state = next;

                match outcome {
                    LineOutcome::Skipped(reason) => {
                        trace!(page = page_no, line = line_idx + 1, ?reason, "skipped line");
                        out.stats.skipped += 1;
                    }
                    LineOutcome::Accepted { pattern, record } => {
                        debug!(
                            page = page_no,
                            line = line_idx + 1,
                            ?pattern,
                            amount = %record.amount,
                            "accepted transaction"
                        );
                        match pattern {
                            LinePattern::Typed => out.stats.matched_typed += 1,
                            LinePattern::Untyped => out.stats.matched_untyped += 1,
                        }
                        out.records.push(record);
                    }
                }
            }
        }

        out.closing = state;
        info!(
            records = out.records.len(),
            pages = out.stats.pages,
            skipped = out.stats.skipped,
            "extraction finished"
        );
        Ok(out)
    }

    /// Convenience for a single block of text treated as one page.
    pub fn run_text(&self, text: &str) -> Result<Extraction, ExtractError> {
        self.run([Some(text)])
    }
}
