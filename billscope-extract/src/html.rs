//! HTML text extraction.

/// Extract the visible text of an HTML document, markup discarded.
///
/// Text nodes are trimmed and joined by newlines.
pub fn extract_html(html: &str) -> String {
    let document = scraper::Html::parse_document(html);

    document
        .root_element()
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
