use lopdf::Document;
use pdfmeta_common::{ExtractedDocument, IngestError, Result};
use std::path::Path;

/// Seam around the PDF text-extraction engine
pub trait TextExtractor: Send + Sync {
    fn extract(&self, path: &Path) -> Result<ExtractedDocument>;
}

/// Extraction adapter backed by lopdf.
///
/// Reads the whole file in one scoped operation, then extracts every page
/// in order. Each page's text is appended to the accumulator followed by a
/// single space. An unreadable file, an invalid PDF, or a page with no
/// extractable text layer fails extraction for that file.
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, path: &Path) -> Result<ExtractedDocument> {
        let bytes = std::fs::read(path).map_err(|e| {
            IngestError::Extraction(format!("failed to open {}: {}", path.display(), e))
        })?;

        let doc = Document::load_mem(&bytes).map_err(|e| {
            IngestError::Extraction(format!("failed to parse {}: {}", path.display(), e))
        })?;

        let pages = doc.get_pages();
        let page_count = pages.len() as u32;

        let mut text = String::new();
        for (page_num, _page_id) in pages {
            let page_text = doc.extract_text(&[page_num]).map_err(|e| {
                IngestError::Extraction(format!(
                    "no text layer on page {} of {}: {}",
                    page_num,
                    path.display(),
                    e
                ))
            })?;
            text.push_str(&page_text);
            text.push(' ');
        }

        Ok(ExtractedDocument { text, page_count })
    }
}
