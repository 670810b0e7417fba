pub mod xlsx;

use crate::model::ExtractionResult;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

pub const NOT_AVAILABLE: &str = "N/A";
pub const HEIGHTS_WITHOUT_ROOMS: &str = "Heights Found (No Room Labels)";
pub const NO_DATA: &str = "No Room/Height Data Extracted";

/// Column headers of the raw data sheet, in order.
pub const RAW_COLUMNS: [&str; 5] = [
    "Drawing Title",
    "Apartment Type",
    "Room",
    "Ceiling Height",
    "Source File",
];

/// One line of the raw data table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    #[serde(rename = "Drawing Title")]
    pub drawing_title: String,
    #[serde(rename = "Apartment Type")]
    pub apartment_type: String,
    #[serde(rename = "Room")]
    pub room: String,
    #[serde(rename = "Ceiling Height")]
    pub ceiling_height: String,
    #[serde(rename = "Source File")]
    pub source_file: String,
}

impl Row {
    pub fn cells(&self) -> [&str; 5] {
        [
            self.drawing_title.as_str(),
            self.apartment_type.as_str(),
            self.room.as_str(),
            self.ceiling_height.as_str(),
            self.source_file.as_str(),
        ]
    }
}

/// Turn one document's extraction result into raw rows.
///
/// Always returns at least one row: documents without room labels get a
/// single diagnostic row instead.
pub fn assemble_rows(result: &ExtractionResult) -> Vec<Row> {
    let row = |room: String, ceiling_height: String| Row {
        drawing_title: result.title.clone(),
        apartment_type: result.apartment_type.clone(),
        room,
        ceiling_height,
        source_file: result.source_file.clone(),
    };

    if !result.matches.is_empty() {
        return result
            .matches
            .iter()
            .map(|m| row(m.room.text().to_string(), m.ceiling_height().to_string()))
            .collect();
    }

    if !result.heights.is_empty() {
        let sample: Vec<&str> = result
            .heights
            .iter()
            .take(3)
            .map(|h| h.display_text.as_str())
            .collect();
        return vec![row(HEIGHTS_WITHOUT_ROOMS.to_string(), sample.join(", "))];
    }

    vec![row(NO_DATA.to_string(), NOT_AVAILABLE.to_string())]
}

/// The single row emitted for a document without any extractable text.
pub fn no_text_rows(source_file: &str) -> Vec<Row> {
    vec![Row {
        drawing_title: "No text found".into(),
        apartment_type: NOT_AVAILABLE.into(),
        room: "No extractable text".into(),
        ceiling_height: NOT_AVAILABLE.into(),
        source_file: source_file.into(),
    }]
}

/// The single row emitted for a document whose extraction failed.
pub fn error_rows(source_file: &str, cause: &str) -> Vec<Row> {
    vec![Row {
        drawing_title: "Error".into(),
        apartment_type: "Error".into(),
        room: format!("Extraction failed: {cause}"),
        ceiling_height: NOT_AVAILABLE.into(),
        source_file: source_file.into(),
    }]
}

/// Key of one matrix-view line.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MatrixKey {
    pub source_file: String,
    pub drawing_title: String,
    pub apartment_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixRecord {
    #[serde(flatten)]
    pub key: MatrixKey,
    /// Room label -> first ceiling height seen for it.
    pub heights: BTreeMap<String, String>,
}

/// Rows pivoted to one line per document/title/apartment type and one
/// column per room label. Lines and columns are sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixView {
    pub rooms: Vec<String>,
    pub records: Vec<MatrixRecord>,
}

impl MatrixView {
    pub fn header(&self) -> Vec<&str> {
        let mut header = vec!["Source File", "Drawing Title", "Apartment Type"];
        header.extend(self.rooms.iter().map(|r| r.as_str()));
        header
    }
}

/// Pivot raw rows into the matrix view.
///
/// When a room label repeats within a document, the first ceiling height
/// wins; later ones are only visible in the raw rows.
pub fn pivot(rows: &[Row]) -> MatrixView {
    let mut rooms = BTreeSet::new();
    let mut grouped: BTreeMap<MatrixKey, BTreeMap<String, String>> = BTreeMap::new();

    for row in rows {
        rooms.insert(row.room.clone());
        let key = MatrixKey {
            source_file: row.source_file.clone(),
            drawing_title: row.drawing_title.clone(),
            apartment_type: row.apartment_type.clone(),
        };
        grouped
            .entry(key)
            .or_default()
            .entry(row.room.clone())
            .or_insert_with(|| row.ceiling_height.clone());
    }

    MatrixView {
        rooms: rooms.into_iter().collect(),
        records: grouped
            .into_iter()
            .map(|(key, heights)| MatrixRecord { key, heights })
            .collect(),
    }
}
