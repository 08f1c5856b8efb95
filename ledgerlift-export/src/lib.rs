//! ledgerlift-export: write extracted ledgers as CSV or JSON

pub mod ledger_writer;

pub use ledger_writer::{HEADER, OutputFormat, write_csv, write_json, write_path};
