//! Import pipeline: extraction, then question recovery.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use quizsheet_core::QuestionRecord;

use crate::extract::{ExtractError, PageExtractor};

/// Outcome of one document import.
#[derive(Debug, Clone, Serialize)]
pub struct ImportReport {
    pub imported_at: DateTime<Utc>,
    pub pages: usize,
    pub records: Vec<QuestionRecord>,
}

/// Extract a document's pages and recover its question records.
///
/// Extraction failures short-circuit before the parser runs. The parse
/// itself cannot fail: unusable text yields fewer records, not errors.
pub async fn import_document<E: PageExtractor>(
    extractor: &E,
    source: &Path,
) -> Result<ImportReport, ExtractError> {
    info!(source = %source.display(), "extracting document text");
    let pages = extractor.extract_pages(source).await?;
    info!(pages = pages.len(), "extraction complete");

    let records = quizsheet_core::parse(&pages.join("\n"));
    if records.is_empty() {
        warn!(source = %source.display(), "no question records recovered");
    } else {
        info!(records = records.len(), "import complete");
    }

    Ok(ImportReport {
        imported_at: Utc::now(),
        pages: pages.len(),
        records,
    })
}
