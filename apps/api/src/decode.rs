//! Upload decoding: turns uploaded bytes into raw text by file extension.
//! PDF text extraction happens in memory; nothing is written to disk.

use std::path::Path;

use crate::errors::AppError;

/// Decodes `.pdf` and `.txt` uploads into raw text. Any other extension is
/// an [`AppError::UnsupportedFormat`].
pub fn decode_document(filename: &str, bytes: &[u8]) -> Result<String, AppError> {
    let extension = Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("pdf") => {
            pdf_extract::extract_text_from_mem(bytes).map_err(|e| AppError::Pdf(e.to_string()))
        }
        Some("txt") => Ok(String::from_utf8_lossy(bytes).into_owned()),
        _ => Err(AppError::UnsupportedFormat),
    }
}
