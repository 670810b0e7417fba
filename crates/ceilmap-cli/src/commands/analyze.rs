use ceilmap_core::error::CeilmapError;
use ceilmap_core::extraction::pdftotext::PdftotextExtractor;
use ceilmap_core::SourceDocument;
use std::path::PathBuf;

use crate::output;
use crate::PatternArgs;

pub fn run(input_file: PathBuf, pattern_args: &PatternArgs) -> Result<(), CeilmapError> {
    let patterns = super::load_patterns(pattern_args)?;
    let doc = SourceDocument::load(&input_file)?;
    let extractor = PdftotextExtractor::new();
    let analysis = ceilmap_core::analyze_pdf(&doc.bytes, &extractor, &patterns)?;
    output::json::print(&analysis)
}
