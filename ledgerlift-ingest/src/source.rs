//! Page sources: where per-page statement text comes from.
//!
//! The extractor only sees `Option<String>` per page; getting there (reading
//! files, decoding PDFs) lives here and is kept out of the fold.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Form feed, the page separator in text dumps and pdf-extract output.
pub const PAGE_BREAK: char = '\u{000C}';

pub trait PageSource {
    /// Text of each page in document order; `None` when a page has no text.
    fn pages(&self) -> Result<Vec<Option<String>>>;
}

/// Split a text dump into pages on form feeds.
pub fn split_pages(text: &str) -> Vec<Option<String>> {
    text.split(PAGE_BREAK)
        .map(|page| {
            if page.trim().is_empty() {
                None
            } else {
                Some(page.to_string())
            }
        })
        .collect()
}

/// Plain text, either in memory or read from a file.
#[derive(Debug, Clone)]
pub enum TextSource {
    Inline(String),
    File(PathBuf),
}

impl TextSource {
    pub fn inline(text: impl Into<String>) -> Self {
        TextSource::Inline(text.into())
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        TextSource::File(path.into())
    }
}

impl PageSource for TextSource {
    fn pages(&self) -> Result<Vec<Option<String>>> {
        match self {
            TextSource::Inline(text) => Ok(split_pages(text)),
            TextSource::File(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("read {}", path.display()))?;
                Ok(split_pages(&text))
            }
        }
    }
}

/// PDF text layer via pdf-extract.
#[cfg(feature = "pdf")]
#[derive(Debug, Clone)]
pub struct PdfSource {
    path: PathBuf,
}

#[cfg(feature = "pdf")]
impl PdfSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[cfg(feature = "pdf")]
impl PageSource for PdfSource {
    fn pages(&self) -> Result<Vec<Option<String>>> {
        let text = pdf_extract::extract_text(&self.path)
            .map_err(|e| anyhow::anyhow!("extract text from {}: {e}", self.path.display()))?;
        let pages = split_pages(&text);
        tracing::debug!(path = %self.path.display(), pages = pages.len(), "pdf text extracted");
        Ok(pages)
    }
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
}

#[cfg(feature = "pdf")]
fn pdf_source(path: &Path) -> Result<Box<dyn PageSource>> {
    Ok(Box::new(PdfSource::new(path)))
}

#[cfg(not(feature = "pdf"))]
fn pdf_source(path: &Path) -> Result<Box<dyn PageSource>> {
    anyhow::bail!(
        "{} is a PDF but ledgerlift-ingest was built without the `pdf` feature",
        path.display()
    )
}

/// Pick a source by file extension: `.pdf` goes through the PDF text layer,
/// anything else is read as plain text.
pub fn source_for_path(path: &Path) -> Result<Box<dyn PageSource>> {
    if is_pdf(path) {
        return pdf_source(path);
    }
    Ok(Box::new(TextSource::file(path)))
}
