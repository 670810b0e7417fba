use serde::{Deserialize, Serialize};

/// Where a fragment's coordinates came from.
///
/// `Word` fragments carry real layout positions. `Line` fragments only have
/// a synthetic position (`x = 0`, `y = line_index * LINE_SPACING`), so they
/// are spatially comparable to other line fragments only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FragmentKind {
    Word,
    Line,
}

/// A piece of text with its page-local position (top-left origin, y grows downward).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextFragment {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub page: usize,
    pub kind: FragmentKind,
}

impl TextFragment {
    pub fn word(text: impl Into<String>, x: f64, y: f64, page: usize) -> Self {
        TextFragment {
            text: text.into(),
            x,
            y,
            page,
            kind: FragmentKind::Word,
        }
    }

    pub fn line(text: impl Into<String>, x: f64, y: f64, page: usize) -> Self {
        TextFragment {
            text: text.into(),
            x,
            y,
            page,
            kind: FragmentKind::Line,
        }
    }
}

/// Which pattern family produced a height candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HeightPattern {
    Affl,
    Labeled,
    BareNumeric,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeightCandidate {
    pub fragment: TextFragment,
    /// Ceiling height in millimetres.
    pub value_mm: u32,
    /// "+2700" for AFFL annotations, "2700mm" otherwise.
    pub display_text: String,
    pub pattern: HeightPattern,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomCandidate {
    pub fragment: TextFragment,
}

impl RoomCandidate {
    pub fn text(&self) -> &str {
        &self.fragment.text
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    Matched,
    NoHeightsAvailable,
    NoHeightWithinRadius,
}

/// The association of one room label with its nearest ceiling height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub room: RoomCandidate,
    pub height: Option<HeightCandidate>,
    /// Distance to the nearest height candidate. Recorded even when it was
    /// too far away to match; `None` only when there were no heights at all.
    pub distance: Option<f64>,
    pub status: MatchStatus,
}

impl Match {
    /// Text for the "Ceiling Height" column.
    pub fn ceiling_height(&self) -> &str {
        match (&self.status, &self.height) {
            (MatchStatus::Matched, Some(h)) => &h.display_text,
            (MatchStatus::NoHeightWithinRadius, _) => "N/A (No nearby height)",
            _ => "N/A",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub title: String,
    pub apartment_type: String,
    pub matches: Vec<Match>,
    /// All height candidates of the document, in fragment order.
    pub heights: Vec<HeightCandidate>,
    pub source_file: String,
}

/// Extraction statistics for a single document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub total_text_elements: usize,
    pub rooms_found: usize,
    pub heights_found: usize,
    pub drawing_title: String,
    pub apartment_type: String,
    pub sample_texts: Vec<String>,
}
