#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! PDF text-stream extraction for OND commune reports.
//!
//! Pure-Rust text extraction ([`pdf_extract`]): page order and in-page
//! word order are preserved, exact line and column boundaries are not.
//! That linear text stream is all the downstream indicator engine needs:
//! it anchors on labels, not positions.
//!
//! This crate is the system's only fallible input boundary: a corrupt or
//! non-PDF upload surfaces as [`PdfError::Extraction`], which callers
//! attach to that single document without touching its batch siblings.

use std::path::Path;

/// Errors from reading a report document.
#[derive(Debug, thiserror::Error)]
pub enum PdfError {
    /// The document is corrupt, encrypted, or not a PDF at all.
    #[error("PDF extraction error: {0}")]
    Extraction(String),

    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Extracts the text stream from in-memory PDF bytes.
///
/// # Errors
///
/// Returns [`PdfError::Extraction`] when the bytes cannot be read as a
/// PDF document.
pub fn extract_text(bytes: &[u8]) -> Result<String, PdfError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| PdfError::Extraction(format!("failed to extract text from PDF: {e}")))?;

    log::debug!(
        "extracted {} characters of text from {} bytes",
        text.len(),
        bytes.len()
    );

    Ok(text)
}

/// Reads a PDF file and extracts its text stream.
///
/// # Errors
///
/// Returns [`PdfError::Io`] when the file cannot be read and
/// [`PdfError::Extraction`] when its content is not a readable PDF.
pub fn extract_text_from_path(path: &Path) -> Result<String, PdfError> {
    let bytes = std::fs::read(path)?;
    extract_text(&bytes)
}
