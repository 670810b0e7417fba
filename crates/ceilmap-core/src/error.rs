use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CeilmapError {
    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("failed to load pattern set from {path}: {reason}")]
    PatternLoad { path: PathBuf, reason: String },

    #[error("invalid pattern set: {0}")]
    PatternInvalid(String),

    #[error("unsupported file type: {0} (only .pdf files are accepted)")]
    UnsupportedFile(PathBuf),

    #[error("file not found: {0}")]
    MissingFile(PathBuf),

    #[error("no valid files processed")]
    NoValidFiles,

    #[error("failed to write workbook: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
