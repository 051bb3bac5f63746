//! Document-to-text extraction boundary.
//!
//! Extraction is the one part of an import that suspends: it may read a
//! multi-page document from disk or call out to a converter. The parser
//! never sees the document itself, only the page texts an extractor
//! hands over, in document order.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors surfaced by the extraction stage.
///
/// These short-circuit the import before the parser runs; the parser
/// itself has no failure modes.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("document contains no extractable text")]
    Empty,
}

/// Produces the ordered page texts of a source document, one
/// newline-joined string per page.
#[allow(async_fn_in_trait)]
pub trait PageExtractor {
    async fn extract_pages(&self, source: &Path) -> Result<Vec<String>, ExtractError>;
}

/// Extractor for plain-text dumps with form-feed page breaks, the page
/// delimiter pdftotext-style converters emit. A dump without page breaks
/// is a single page.
#[derive(Debug, Clone, Default)]
pub struct PlainTextExtractor;

impl PageExtractor for PlainTextExtractor {
    async fn extract_pages(&self, source: &Path) -> Result<Vec<String>, ExtractError> {
        let text = tokio::fs::read_to_string(source)
            .await
            .map_err(|e| ExtractError::Read {
                path: source.to_path_buf(),
                source: e,
            })?;

        if text.trim().is_empty() {
            return Err(ExtractError::Empty);
        }

        Ok(text.split('\u{000C}').map(str::to_string).collect())
    }
}
