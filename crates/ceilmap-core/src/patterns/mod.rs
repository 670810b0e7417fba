pub mod builtin;
pub mod schema;

use crate::error::CeilmapError;
use regex::Regex;
use schema::{HeightRange, PatternSetDef};
use std::path::Path;

/// Load a pattern set from a JSON file.
pub fn load_pattern_file(path: &Path) -> Result<PatternSetDef, CeilmapError> {
    let content = std::fs::read_to_string(path).map_err(|e| CeilmapError::PatternLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_pattern_set(&content, path)
}

/// Parse a pattern set from a JSON string.
pub fn parse_pattern_set(json: &str, source: &Path) -> Result<PatternSetDef, CeilmapError> {
    let def: PatternSetDef = serde_json::from_str(json).map_err(|e| CeilmapError::PatternLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    validate_pattern_set(&def)?;
    Ok(def)
}

/// Parse a pattern set from a JSON string (no file path context).
pub fn parse_pattern_set_str(json: &str) -> Result<PatternSetDef, CeilmapError> {
    let def: PatternSetDef = serde_json::from_str(json).map_err(CeilmapError::Json)?;
    validate_pattern_set(&def)?;
    Ok(def)
}

/// Validate that a pattern set is well-formed and all of its patterns compile.
pub fn validate_pattern_set(def: &PatternSetDef) -> Result<(), CeilmapError> {
    PatternSet::compile(def).map(|_| ())
}

/// Compiled, immutable form of a [`PatternSetDef`], shared read-only by the
/// classifier and the matcher.
#[derive(Debug, Clone)]
pub struct PatternSet {
    pub name: String,
    pub title_label: Regex,
    pub title_keyword: Regex,
    pub apartment_type: Regex,
    pub apartment_type_token: Regex,
    pub apartment_bed_token: Regex,
    pub room: Regex,
    pub affl_height: Regex,
    pub labeled_height: Regex,
    pub bare_height: Regex,
    pub height_range: HeightRange,
    pub max_match_distance: f64,
}

impl PatternSet {
    pub fn compile(def: &PatternSetDef) -> Result<PatternSet, CeilmapError> {
        if def.room_keywords.iter().all(|k| k.trim().is_empty()) {
            return Err(CeilmapError::PatternInvalid(
                "room_keywords must not be empty".into(),
            ));
        }

        if def.height_range_mm.min > def.height_range_mm.max {
            return Err(CeilmapError::PatternInvalid(format!(
                "height_range_mm min {} is greater than max {}",
                def.height_range_mm.min, def.height_range_mm.max
            )));
        }

        if !def.max_match_distance.is_finite() || def.max_match_distance < 0.0 {
            return Err(CeilmapError::PatternInvalid(format!(
                "max_match_distance must be a non-negative number, got {}",
                def.max_match_distance
            )));
        }

        let title_label = compile_field("title_label", &def.title_label)?;
        if title_label.captures_len() < 2 {
            return Err(CeilmapError::PatternInvalid(
                "title_label must have a capture group for the title text".into(),
            ));
        }

        let keywords: Vec<String> = def
            .room_keywords
            .iter()
            .map(|k| k.trim())
            .filter(|k| !k.is_empty())
            .map(regex::escape)
            .collect();
        let room = compile_field(
            "room_keywords",
            &format!(r"(?i)\b(?:{})\b", keywords.join("|")),
        )?;

        Ok(PatternSet {
            name: def.name.clone(),
            title_label,
            title_keyword: compile_field("title_keyword", &def.title_keyword)?,
            apartment_type: compile_field("apartment_type", &def.apartment_type)?,
            apartment_type_token: compile_field("apartment_type_token", &def.apartment_type_token)?,
            apartment_bed_token: compile_field("apartment_bed_token", &def.apartment_bed_token)?,
            room,
            affl_height: compile_field("affl_height", &def.affl_height)?,
            labeled_height: compile_field("labeled_height", &def.labeled_height)?,
            bare_height: compile_field("bare_height", &def.bare_height)?,
            height_range: def.height_range_mm,
            max_match_distance: def.max_match_distance,
        })
    }

    /// The built-in `default` preset, compiled.
    pub fn builtin() -> Result<PatternSet, CeilmapError> {
        PatternSet::compile(&builtin::load_preset("default")?)
    }
}

fn compile_field(field: &str, pattern: &str) -> Result<Regex, CeilmapError> {
    Regex::new(pattern)
        .map_err(|e| CeilmapError::PatternInvalid(format!("{field}: invalid pattern: {e}")))
}
