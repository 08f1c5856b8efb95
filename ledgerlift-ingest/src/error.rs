use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    /// A line matched a transaction pattern but its numbers did not parse.
    /// The run stops here rather than emit a short ledger.
    #[error("malformed number {text:?} on page {page}, line {line}")]
    MalformedNumber {
        page: usize,
        line: usize,
        text: String,
    },
}
