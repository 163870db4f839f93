//! lopdf-based text extraction for filing PDFs.

use std::path::Path;

use lopdf::Document;
use tracing::{info, warn};

use markcheck_common::{MarkcheckError, Result};

use crate::extract::{parse_application_text, ExtractedApplication};
use crate::normalise::normalize_text;

/// Raw text of every readable page, one page per block. Unreadable pages are skipped.
pub fn extract_pdf_text(path: &Path) -> Result<String> {
    let pdf = Document::load(path)
        .map_err(|e| MarkcheckError::Pdf(format!("{}: {}", path.display(), e)))?;

    let pages = pdf.get_pages();
    let mut text = String::new();
    for page_num in pages.keys().copied() {
        match pdf.extract_text(&[page_num]) {
            Ok(page_text) if !page_text.trim().is_empty() => {
                text.push_str(&page_text);
                text.push('\n');
            }
            Ok(_) => {}
            Err(e) => warn!(page = page_num, error = %e, "Skipping unreadable PDF page"),
        }
    }

    info!(path = %path.display(), pages = pages.len(), chars = text.len(), "PDF text extracted");
    Ok(text)
}

/// Extract, normalise and parse a filing PDF.
pub fn parse_pdf(path: &Path) -> Result<ExtractedApplication> {
    let raw = extract_pdf_text(path)?;
    let extracted = parse_application_text(&normalize_text(&raw));
    let classes = extracted.application.classes.len();
    if classes == 0 {
        warn!(path = %path.display(), "No class blocks found in PDF text");
    } else {
        info!(path = %path.display(), classes, "Classes extracted from PDF");
    }
    Ok(extracted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_non_pdf_is_pdf_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "this is not a PDF").unwrap();

        let err = extract_pdf_text(file.path()).unwrap_err();
        assert!(matches!(err, MarkcheckError::Pdf(_)));
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(parse_pdf(&dir.path().join("absent.pdf")).is_err());
    }
}
