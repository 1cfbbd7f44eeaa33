//! Text Extractor — pulls plain text out of an uploaded PDF resume.

use tracing::debug;

use crate::errors::AppError;

/// Extracts the concatenated page text of a PDF, in page order.
///
/// Returns `AppError::Extraction` for malformed input and for PDFs that
/// decode but contain no extractable text (scanned images, empty files).
/// Never leaves partial state behind — the caller only stores the result
/// on success.
pub fn extract_resume_text(bytes: &[u8]) -> Result<String, AppError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| AppError::Extraction(e.to_string()))?;

    if text.trim().is_empty() {
        return Err(AppError::Extraction(
            "the PDF contains no extractable text".to_string(),
        ));
    }

    debug!("extracted {} chars of resume text", text.len());
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::pdf::render_blocks;
    use crate::render::Block;

    #[test]
    fn test_extracted_text_is_nonempty_and_page_ordered() {
        // Two-page fixture built with the in-crate PDF engine.
        let mut blocks = vec![Block::Text("FIRST-PAGE-MARKER".to_string())];
        blocks.extend((0..80).map(|i| Block::Text(format!("filler line {i}"))));
        blocks.push(Block::Text("SECOND-PAGE-MARKER".to_string()));
        let bytes = render_blocks("fixture", &blocks).unwrap();

        let text = extract_resume_text(&bytes).unwrap();
        let first = text.find("FIRST-PAGE-MARKER").expect("page 1 text missing");
        let second = text.find("SECOND-PAGE-MARKER").expect("page 2 text missing");
        assert!(first < second, "page order must be preserved");
    }

    #[test]
    fn test_garbage_bytes_yield_extraction_error() {
        let result = extract_resume_text(b"this is not a pdf");
        assert!(matches!(result, Err(AppError::Extraction(_))));
    }

    #[test]
    fn test_empty_input_yields_extraction_error() {
        let result = extract_resume_text(&[]);
        assert!(matches!(result, Err(AppError::Extraction(_))));
    }

    #[test]
    fn test_truncated_pdf_header_yields_extraction_error() {
        // A valid magic header with nothing behind it must not panic.
        let result = extract_resume_text(b"%PDF-1.7\n");
        assert!(matches!(result, Err(AppError::Extraction(_))));
    }
}
