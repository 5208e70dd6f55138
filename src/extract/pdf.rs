use crate::error::ExtractError;
use std::panic;

/// Per-page text joined with newlines. Pages without any text are skipped.
pub fn read_text(raw: &[u8]) -> Result<String, ExtractError> {
    // The decoder panics on some malformed documents
    let pages = panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(raw))
        .map_err(|_| ExtractError::Pdf("PDF decoder aborted on malformed input".into()))?
        .map_err(|e| ExtractError::Pdf(e.to_string()))?;

    Ok(join_pages(pages))
}

fn join_pages(pages: Vec<String>) -> String {
    pages
        .into_iter()
        .filter(|page| !page.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
