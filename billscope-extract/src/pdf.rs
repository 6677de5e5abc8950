//! PDF text extraction.

use billscope_common::{Error, Result};

/// Extract plain text from PDF bytes.
///
/// Each page's text is concatenated with a trailing newline. Pages that
/// yield no extractable text (scanned images, blank pages) contribute
/// nothing and are not an error.
pub fn extract_pdf(bytes: &[u8]) -> Result<String> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
        .map_err(|e| Error::Parse(format!("Not a well-formed PDF: {e}")))?;

    tracing::debug!(pages = pages.len(), "Extracted PDF pages");
    Ok(join_pages(&pages))
}

/// Join per-page text, skipping pages with no extractable text.
fn join_pages(pages: &[String]) -> String {
    let mut text = String::new();
    for page in pages {
        if !page.is_empty() {
            text.push_str(page);
            text.push('\n');
        }
    }
    text
}
