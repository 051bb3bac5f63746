//! Core types for the quizsheet importer.

use serde::{Deserialize, Serialize};

/// A question/answer record recovered from scanned text.
///
/// `id` is the record's sequence key as printed on the sheet. It is not
/// guaranteed unique or increasing; when a question loses its number to
/// the scan, the parser synthesizes one from the previous record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub id: i64,
    pub question: String,
    pub answer: String,
    /// Reserved for multiple-choice imports; the text parser never fills it.
    #[serde(default)]
    pub options: Vec<String>,
}
