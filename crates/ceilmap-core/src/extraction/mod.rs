pub mod pdftotext;

use crate::error::CeilmapError;
use crate::model::TextFragment;

/// Vertical spacing used to give line fragments a synthetic y coordinate.
pub const LINE_SPACING: f64 = 20.0;

#[derive(Debug, Clone, PartialEq)]
pub struct BBox {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

/// A single word with its layout box.
#[derive(Debug, Clone, PartialEq)]
pub struct WordSpan {
    pub text: String,
    pub bbox: BBox,
}

/// Content extracted from a single page of a PDF.
#[derive(Debug, Clone, Default)]
pub struct PageContent {
    pub page_number: usize,
    /// Words in the order the backend reported them.
    pub words: Vec<WordSpan>,
    /// Plain text lines in reading order, without layout positions.
    pub lines: Vec<String>,
}

/// Trait for PDF text extraction backends.
pub trait FragmentExtractor: Send + Sync {
    /// Extract text content from PDF bytes, returning one PageContent per page.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, CeilmapError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Flatten pages into the fragment list consumed by the classifier.
///
/// Each page contributes its words first, then its lines. Words keep their
/// `(x_min, y_min)` position; lines get `(0, line_index * LINE_SPACING)`.
/// Blank lines produce no fragment but still advance the line index.
pub fn fragments_from_pages(pages: &[PageContent]) -> Vec<TextFragment> {
    let mut fragments = Vec::new();

    for page in pages {
        for word in &page.words {
            fragments.push(TextFragment::word(
                word.text.clone(),
                word.bbox.x_min,
                word.bbox.y_min,
                page.page_number,
            ));
        }

        for (line_index, line) in page.lines.iter().enumerate() {
            let text = line.trim();
            if text.is_empty() {
                continue;
            }
            fragments.push(TextFragment::line(
                text,
                0.0,
                line_index as f64 * LINE_SPACING,
                page.page_number,
            ));
        }
    }

    fragments
}

/// Run an extractor and flatten its output into fragments.
pub fn extract_fragments(
    pdf_bytes: &[u8],
    extractor: &dyn FragmentExtractor,
) -> Result<Vec<TextFragment>, CeilmapError> {
    let pages = extractor.extract_pages(pdf_bytes)?;
    let fragments = fragments_from_pages(&pages);
    tracing::debug!(
        backend = extractor.backend_name(),
        pages = pages.len(),
        fragments = fragments.len(),
        "extracted text fragments"
    );
    Ok(fragments)
}
