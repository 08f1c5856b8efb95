//! ledgerlift-ingest: statement text to ledger records.
//!
//! Lines are classified (typed pattern first, then untyped), matched lines are
//! resolved against the running balance, and the whole run is a fold over the
//! pages in document order.

pub mod classifier;
pub mod error;
pub mod pipeline;
pub mod resolver;
pub mod source;

pub use classifier::{Classification, ClassifierRules, LineClassifier, LinePattern, SkipReason};
pub use error::ExtractError;
pub use pipeline::{ExtractStats, Extraction, Extractor, LineOutcome};
pub use resolver::resolve;
pub use source::{PageSource, TextSource, source_for_path, split_pages};
#[cfg(feature = "pdf")]
pub use source::PdfSource;
