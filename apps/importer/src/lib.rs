//! Importer surface: converts a scanned quiz sheet's OCR text dump into
//! a JSON array of question records on stdout.
//!
//! Logging goes to stderr so the JSON output stays pipeable.

pub mod extract;
pub mod pipeline;

use std::path::PathBuf;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use extract::{ExtractError, PageExtractor, PlainTextExtractor};
pub use pipeline::{import_document, ImportReport};

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let source: PathBuf = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: quizsheet-importer <text-dump>")?;

    let report = import_document(&PlainTextExtractor, &source).await?;

    let json = serde_json::to_string_pretty(&report.records)?;
    println!("{json}");

    Ok(())
}
