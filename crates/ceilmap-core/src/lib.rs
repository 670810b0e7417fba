pub mod classify;
pub mod error;
pub mod extraction;
pub mod matching;
pub mod model;
pub mod patterns;
pub mod tabulate;

use error::CeilmapError;
use extraction::{extract_fragments, FragmentExtractor};
use model::{Analysis, ExtractionResult, TextFragment};
use patterns::PatternSet;
use rayon::prelude::*;
use std::path::Path;
use tabulate::Row;

/// Number of fragment texts included in an [`Analysis`].
pub const SAMPLE_TEXT_COUNT: usize = 10;

/// A document submitted for extraction.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl SourceDocument {
    /// Read a PDF from disk, rejecting missing files and non-PDF extensions.
    pub fn load(path: &Path) -> Result<SourceDocument, CeilmapError> {
        if !is_supported_file(path) {
            return Err(CeilmapError::UnsupportedFile(path.to_path_buf()));
        }
        if !path.is_file() {
            return Err(CeilmapError::MissingFile(path.to_path_buf()));
        }

        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let bytes = std::fs::read(path)?;
        Ok(SourceDocument { filename, bytes })
    }
}

/// Only `.pdf` files (any case) are accepted.
pub fn is_supported_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}

/// Classify and match one document's fragments.
pub fn extract_document(
    fragments: &[TextFragment],
    source_file: &str,
    patterns: &PatternSet,
) -> ExtractionResult {
    let classification = classify::classify(fragments, patterns);
    let matches = matching::match_rooms_with_heights(
        &classification.rooms,
        &classification.heights,
        patterns.max_match_distance,
    );

    tracing::debug!(
        source_file,
        fragments = fragments.len(),
        rooms = classification.rooms.len(),
        heights = classification.heights.len(),
        matched = matches
            .iter()
            .filter(|m| m.status == model::MatchStatus::Matched)
            .count(),
        "classified document"
    );

    ExtractionResult {
        title: classification.title,
        apartment_type: classification.apartment_type,
        matches,
        heights: classification.heights,
        source_file: source_file.to_string(),
    }
}

/// Rows for a document whose fragments have already been extracted.
pub fn rows_from_fragments(
    fragments: &[TextFragment],
    source_file: &str,
    patterns: &PatternSet,
) -> Vec<Row> {
    if fragments.is_empty() {
        return tabulate::no_text_rows(source_file);
    }
    tabulate::assemble_rows(&extract_document(fragments, source_file, patterns))
}

/// Main API entry point: extract the room/ceiling-height rows of one PDF.
///
/// Never fails. Extraction errors become a single "Error" row so a bad file
/// does not take down the rest of a batch.
pub fn extract_rows(
    pdf_bytes: &[u8],
    filename: &str,
    extractor: &dyn FragmentExtractor,
    patterns: &PatternSet,
) -> Vec<Row> {
    match extract_fragments(pdf_bytes, extractor) {
        Ok(fragments) => rows_from_fragments(&fragments, filename, patterns),
        Err(e) => {
            tracing::warn!(filename, error = %e, "extraction failed");
            tabulate::error_rows(filename, &e.to_string())
        }
    }
}

/// Extract a batch of documents in parallel. Rows come back in submission order.
pub fn extract_batch(
    documents: &[SourceDocument],
    extractor: &dyn FragmentExtractor,
    patterns: &PatternSet,
) -> Vec<Row> {
    documents
        .par_iter()
        .map(|doc| extract_rows(&doc.bytes, &doc.filename, extractor, patterns))
        .collect::<Vec<_>>()
        .into_iter()
        .flatten()
        .collect()
}

/// Extraction statistics for one PDF, for diagnosing poor results.
pub fn analyze_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn FragmentExtractor,
    patterns: &PatternSet,
) -> Result<Analysis, CeilmapError> {
    let fragments = extract_fragments(pdf_bytes, extractor)?;
    Ok(analyze_fragments(&fragments, patterns))
}

pub fn analyze_fragments(fragments: &[TextFragment], patterns: &PatternSet) -> Analysis {
    let classification = classify::classify(fragments, patterns);
    Analysis {
        total_text_elements: fragments.len(),
        rooms_found: classification.rooms.len(),
        heights_found: classification.heights.len(),
        drawing_title: classification.title,
        apartment_type: classification.apartment_type,
        sample_texts: fragments
            .iter()
            .take(SAMPLE_TEXT_COUNT)
            .map(|f| f.text.clone())
            .collect(),
    }
}
