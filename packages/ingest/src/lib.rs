#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Composition and batch processing for OND commune reports.
//!
//! Glues the three core pieces together: the filename parser, the PDF
//! text collaborator, and the indicator extraction engine. Each document
//! yields either a fully populated [`CommuneReport`] or a
//! [`FailedReport`] carrying the source file and its error, never a
//! mix of partial data and an error flag, so downstream rendering and
//! duplicate detection stay total over two cases.
//!
//! The core is text-in/record-out ([`process_text`]); how text is
//! obtained is the only deployment-specific step and lives behind
//! [`process_report`] / [`process_batch`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use ond_report_extract::{build_indicator_records, extract_indicators};
use ond_report_filename::FilenameError;
use ond_report_indicator_models::IndicatorRecord;
use ond_report_pdf::PdfError;

/// One uploaded report document.
#[derive(Debug, Clone)]
pub struct ReportFile {
    /// Original filename, carrying commune, month, and year.
    pub name: String,
    /// Raw PDF bytes.
    pub bytes: Vec<u8>,
}

/// Errors that terminate processing of a single document.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// The filename matches no recognized convention or month spelling.
    #[error(transparent)]
    Filename(#[from] FilenameError),

    /// The document could not be read as a PDF.
    #[error("unreadable document: {0}")]
    Pdf(#[from] PdfError),

    /// The background extraction task died before producing a result.
    #[error("extraction task failed: {0}")]
    Task(String),
}

/// A document that could not be processed: its source file plus the
/// error, and nothing else.
#[derive(Debug, thiserror::Error)]
#[error("{source_file}: {error}")]
pub struct FailedReport {
    /// Name of the offending file.
    pub source_file: String,
    /// Why it was rejected.
    pub error: IngestError,
}

/// The merged record for one successfully processed document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommuneReport {
    /// Commune display name from the filename.
    pub commune: String,
    /// Lowercased commune name, the duplicate-detection key.
    pub commune_key: String,
    /// Month number, 1–12.
    pub month: u8,
    /// Canonical capitalized French month label.
    pub month_label: String,
    /// Four-digit year.
    pub year: i32,
    /// Commune population, in inhabitants.
    pub population: Option<f64>,
    /// Commune surface, in km².
    pub surface: Option<f64>,
    /// Population density, in inhabitants per km².
    pub densite: Option<f64>,
    /// The fixed twelve-entry indicator map.
    pub indicators: BTreeMap<String, IndicatorRecord>,
    /// Original filename this record was derived from.
    pub source_file: String,
}

impl CommuneReport {
    /// The identity downstream consumers de-duplicate on: re-importing
    /// the same commune and period is rejected.
    #[must_use]
    pub fn period_key(&self) -> (String, u8, i32) {
        (self.commune_key.clone(), self.month, self.year)
    }
}

/// Builds the merged record from a filename and already-extracted text.
///
/// This is the shared core every deployment context funnels into; only
/// the way raw text is obtained differs upstream.
///
/// # Errors
///
/// Returns a [`FailedReport`] when the filename parses to neither
/// convention or to no known month.
pub fn process_text(name: &str, raw_text: &str) -> Result<CommuneReport, FailedReport> {
    let parsed = ond_report_filename::parse(name)
        .map_err(|e| failed(name, IngestError::from(e)))?;
    Ok(assemble(name, parsed, raw_text))
}

/// Processes one document end to end: filename, PDF text, indicators.
///
/// # Errors
///
/// Returns a [`FailedReport`] when the filename is unparseable or the
/// document bytes are not a readable PDF.
pub fn process_report(name: &str, bytes: &[u8]) -> Result<CommuneReport, FailedReport> {
    match decode_and_build(name, bytes) {
        Ok(report) => Ok(report),
        Err(error) => {
            log::warn!("rejecting {name}: {error}");
            Err(failed(name, error))
        }
    }
}

fn decode_and_build(name: &str, bytes: &[u8]) -> Result<CommuneReport, IngestError> {
    // Fail on the filename before paying for PDF decoding.
    let parsed = ond_report_filename::parse(name)?;
    let text = ond_report_pdf::extract_text(bytes)?;
    Ok(assemble(name, parsed, &text))
}

/// Processes a batch of uploaded documents concurrently.
///
/// Output order matches input order, one slot per file. A failure
/// (unreadable PDF, bad filename, even a panicking decode) is confined
/// to its own slot and never aborts the siblings.
pub async fn process_batch(files: Vec<ReportFile>) -> Vec<Result<CommuneReport, FailedReport>> {
    let total = files.len();

    let tasks: Vec<_> = files
        .into_iter()
        .map(|file| {
            let name = file.name.clone();
            // PDF decoding is CPU-bound; keep it off the async runtime.
            let handle =
                tokio::task::spawn_blocking(move || process_report(&file.name, &file.bytes));
            async move { (name, handle.await) }
        })
        .collect();

    let results: Vec<Result<CommuneReport, FailedReport>> = futures::future::join_all(tasks)
        .await
        .into_iter()
        .map(|(name, joined)| match joined {
            Ok(outcome) => outcome,
            Err(e) => Err(failed(&name, IngestError::Task(e.to_string()))),
        })
        .collect();

    let succeeded = results.iter().filter(|r| r.is_ok()).count();
    log::info!("batch complete: {succeeded}/{total} documents processed");

    results
}

/// Finds batch slots that repeat an already-seen commune and period.
///
/// Returns `(first_index, duplicate_index)` pairs; failed slots never
/// participate.
#[must_use]
pub fn find_duplicates(
    results: &[Result<CommuneReport, FailedReport>],
) -> Vec<(usize, usize)> {
    let mut seen: BTreeMap<(String, u8, i32), usize> = BTreeMap::new();
    let mut duplicates = Vec::new();

    for (index, result) in results.iter().enumerate() {
        if let Ok(report) = result {
            let key = report.period_key();
            if let Some(&first) = seen.get(&key) {
                duplicates.push((first, index));
            } else {
                seen.insert(key, index);
            }
        }
    }

    duplicates
}

fn assemble(
    name: &str,
    parsed: ond_report_filename::ParsedFilename,
    raw_text: &str,
) -> CommuneReport {
    let raw = extract_indicators(raw_text);
    let indicators = build_indicator_records(&raw);

    CommuneReport {
        commune_key: parsed.commune.to_lowercase(),
        commune: parsed.commune,
        month: parsed.month,
        month_label: parsed.month_label.to_owned(),
        year: parsed.year,
        population: raw.population,
        surface: raw.surface,
        densite: raw.densite,
        indicators,
        source_file: name.to_owned(),
    }
}

fn failed(name: &str, error: IngestError) -> FailedReport {
    FailedReport {
        source_file: name.to_owned(),
        error,
    }
}
