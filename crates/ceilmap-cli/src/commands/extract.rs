use ceilmap_core::error::CeilmapError;
use ceilmap_core::extraction::pdftotext::PdftotextExtractor;
use ceilmap_core::tabulate::{pivot, xlsx};
use ceilmap_core::SourceDocument;
use std::path::PathBuf;

use crate::output;
use crate::PatternArgs;

pub fn run(
    input_files: Vec<PathBuf>,
    output_format: &str,
    out: Option<PathBuf>,
    pattern_args: &PatternArgs,
) -> Result<(), CeilmapError> {
    let patterns = super::load_patterns(pattern_args)?;

    // Unsupported or missing files are skipped; the rest of the batch still runs.
    let mut documents = Vec::new();
    for path in &input_files {
        match SourceDocument::load(path) {
            Ok(doc) => documents.push(doc),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping input");
                eprintln!("  skipped: {e}");
            }
        }
    }

    if documents.is_empty() {
        return Err(CeilmapError::NoValidFiles);
    }

    let extractor = PdftotextExtractor::new();
    let rows = ceilmap_core::extract_batch(&documents, &extractor, &patterns);

    match output_format {
        "json" => output::json::print(&rows)?,
        _ => {
            println!("{}", output::table::format_rows(&rows));
            println!("{}", output::table::format_matrix(&pivot(&rows)));
        }
    }

    if let Some(path) = out {
        let bytes = xlsx::write_workbook(&rows)?;
        std::fs::write(&path, bytes)?;
        eprintln!(
            "Extracted {} row(s) from {} file(s), written to {}",
            rows.len(),
            documents.len(),
            path.display()
        );
    }

    Ok(())
}
