use bytes::Bytes;
use tracing::{debug, warn};

use crate::errors::AppError;

const PDF_MAGIC: &[u8] = b"%PDF-";

/// Extracts plain text from an uploaded PDF.
///
/// Runs on the blocking pool; a panic inside the PDF parser surfaces as an
/// `AppError::Pdf` instead of taking down the worker.
pub async fn extract_text_from_pdf(data: Bytes) -> Result<String, AppError> {
    if !looks_like_pdf(&data) {
        return Err(AppError::Pdf("Uploaded file is not a PDF".to_string()));
    }

    let size = data.len();
    let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data))
        .await
        .map_err(|e| {
            warn!("PDF extraction task failed: {e}");
            AppError::Pdf("Could not read the PDF".to_string())
        })?
        .map_err(|e| AppError::Pdf(format!("Could not read the PDF: {e}")))?;

    let text = normalize_whitespace(&text);
    if text.is_empty() {
        return Err(AppError::Pdf(
            "No extractable text found in the PDF".to_string(),
        ));
    }

    debug!("Extracted {} chars from {} byte PDF", text.len(), size);
    Ok(text)
}

fn looks_like_pdf(data: &[u8]) -> bool {
    // Some generators emit a few bytes of junk before the header.
    data.windows(PDF_MAGIC.len())
        .take(1024)
        .any(|w| w == PDF_MAGIC)
}

/// Drops blank lines and trailing whitespace.
fn normalize_whitespace(text: &str) -> String {
    text.lines()
        .map(str::trim_end)
        .filter(|l| !l.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
