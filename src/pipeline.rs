use std::path::PathBuf;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::info;

use crate::core::error::{Error, Result};
use crate::models::user::parse_records;
use crate::report::render::render;
use crate::report::writer::ReportWriter;

/// Source of raw user records. The production implementation is
/// `ApiClient`; tests substitute a stub.
#[async_trait]
pub trait FetchUsers: Send + Sync {
    async fn fetch_users(&self) -> std::result::Result<Vec<Value>, Error>;
}

/// Run one report cycle: fetch, parse, render, write.
///
/// `generated_at` drives both the report header and the output file name,
/// so the two always agree. Any stage failure aborts the run before the
/// write, which is the only side-effecting stage; a failed run leaves no
/// partial output file behind.
pub async fn run(
    fetcher: &dyn FetchUsers,
    writer: &ReportWriter,
    generated_at: DateTime<Utc>,
) -> Result<PathBuf> {
    info!("Fetching user records");
    let raw = fetcher.fetch_users().await?;
    info!(records = raw.len(), "Fetch completed");

    info!("Parsing user records");
    let records = parse_records(&raw)?;
    info!(records = records.len(), "Parse completed");

    info!("Rendering report");
    let report = render(&records, generated_at);
    info!(bytes = report.len(), "Render completed");

    info!(output_dir = %writer.output_dir().display(), "Writing report");
    let path = writer.write(&report, generated_at)?;
    info!(path = %path.display(), "Report written");

    Ok(path)
}
