use serde::{Deserialize, Serialize};

/// A pattern set describing one drafting convention.
///
/// All patterns are regular expressions in `regex` crate syntax.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternSetDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    /// Labelled title ("DRAWING TITLE: ..."); capture group 1 is the title.
    pub title_label: String,
    /// Drawing-type keyword; the whole fragment becomes the title.
    pub title_keyword: String,
    /// Apartment type ("2 BED TYPE A"); the full match is returned.
    pub apartment_type: String,
    /// Fallback: a fragment containing both of these tokens is the apartment type.
    pub apartment_type_token: String,
    pub apartment_bed_token: String,
    /// Room label words, matched case-insensitively on word boundaries.
    pub room_keywords: Vec<String>,
    /// Height patterns in priority order. The value is capture group 1, or
    /// the whole match when the pattern has no group.
    pub affl_height: String,
    pub labeled_height: String,
    /// Tested against the trimmed fragment text.
    pub bare_height: String,
    #[serde(default)]
    pub height_range_mm: HeightRange,
    /// Largest room-to-height distance (page units) that still counts as a match.
    #[serde(default = "default_max_match_distance")]
    pub max_match_distance: f64,
}

/// Inclusive window of plausible ceiling heights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeightRange {
    pub min: u32,
    pub max: u32,
}

impl Default for HeightRange {
    fn default() -> Self {
        HeightRange {
            min: 2000,
            max: 4000,
        }
    }
}

impl HeightRange {
    pub fn contains(&self, value_mm: u32) -> bool {
        (self.min..=self.max).contains(&value_mm)
    }
}

fn default_max_match_distance() -> f64 {
    200.0
}
