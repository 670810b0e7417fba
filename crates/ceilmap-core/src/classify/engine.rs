use crate::classify::outcome::{Classification, UNKNOWN_DRAWING, UNKNOWN_TYPE};
use crate::model::{HeightCandidate, HeightPattern, RoomCandidate, TextFragment};
use crate::patterns::PatternSet;
use regex::Regex;

/// Classify a document's fragments into title, apartment type, rooms and heights.
///
/// Fragments must be in extraction order: title and apartment type are
/// first-match-wins scans over that order.
pub fn classify(fragments: &[TextFragment], patterns: &PatternSet) -> Classification {
    Classification {
        title: find_drawing_title(fragments, patterns),
        apartment_type: find_apartment_type(fragments, patterns),
        rooms: find_rooms(fragments, patterns),
        heights: find_ceiling_heights(fragments, patterns),
    }
}

/// Find the drawing title.
///
/// For each fragment in order, a labelled title ("DRAWING TITLE: X") yields
/// the trimmed label value and a drawing-type keyword ("FLOOR PLAN", "RCP")
/// yields the whole fragment. The first fragment that satisfies either wins.
pub fn find_drawing_title(fragments: &[TextFragment], patterns: &PatternSet) -> String {
    for fragment in fragments {
        if let Some(caps) = patterns.title_label.captures(&fragment.text) {
            if let Some(title) = caps.get(1) {
                return title.as_str().trim().to_string();
            }
        }
        if patterns.title_keyword.is_match(&fragment.text) {
            return fragment.text.clone();
        }
    }
    UNKNOWN_DRAWING.to_string()
}

/// Find the apartment type ("2 BED TYPE A", "TYPE B 3 BED").
///
/// Falls back to the first fragment carrying both a "TYPE X" token and a
/// "BED" token, returned whole.
pub fn find_apartment_type(fragments: &[TextFragment], patterns: &PatternSet) -> String {
    if let Some(m) = fragments
        .iter()
        .find_map(|f| patterns.apartment_type.find(&f.text))
    {
        return m.as_str().to_string();
    }

    fragments
        .iter()
        .find(|f| {
            patterns.apartment_type_token.is_match(&f.text)
                && patterns.apartment_bed_token.is_match(&f.text)
        })
        .map(|f| f.text.clone())
        .unwrap_or_else(|| UNKNOWN_TYPE.to_string())
}

/// Every fragment containing a room keyword, once per fragment.
pub fn find_rooms(fragments: &[TextFragment], patterns: &PatternSet) -> Vec<RoomCandidate> {
    fragments
        .iter()
        .filter(|f| patterns.room.is_match(&f.text))
        .map(|f| RoomCandidate {
            fragment: f.clone(),
        })
        .collect()
}

/// Every fragment carrying a plausible ceiling height, at most one candidate each.
pub fn find_ceiling_heights(
    fragments: &[TextFragment],
    patterns: &PatternSet,
) -> Vec<HeightCandidate> {
    fragments
        .iter()
        .filter_map(|f| height_candidate(f, patterns))
        .collect()
}

/// Try the height pattern families in priority order.
///
/// A family only wins if its value falls inside the configured range;
/// otherwise the next family gets a chance.
fn height_candidate(fragment: &TextFragment, patterns: &PatternSet) -> Option<HeightCandidate> {
    let families = [
        (HeightPattern::Affl, &patterns.affl_height, fragment.text.as_str()),
        (HeightPattern::Labeled, &patterns.labeled_height, fragment.text.as_str()),
        (HeightPattern::BareNumeric, &patterns.bare_height, fragment.text.trim()),
    ];

    families.into_iter().find_map(|(pattern, re, text)| {
        let value_mm = capture_value(re, text)?;
        if !patterns.height_range.contains(value_mm) {
            return None;
        }
        Some(HeightCandidate {
            fragment: fragment.clone(),
            value_mm,
            display_text: display_height(pattern, value_mm),
            pattern,
        })
    })
}

/// Numeric value from group 1, or from the whole match when there is no group.
fn capture_value(re: &Regex, text: &str) -> Option<u32> {
    let caps = re.captures(text)?;
    let m = caps.get(1).or_else(|| caps.get(0))?;
    m.as_str().trim().parse().ok()
}

fn display_height(pattern: HeightPattern, value_mm: u32) -> String {
    match pattern {
        HeightPattern::Affl => format!("+{value_mm}"),
        HeightPattern::Labeled | HeightPattern::BareNumeric => format!("{value_mm}mm"),
    }
}
