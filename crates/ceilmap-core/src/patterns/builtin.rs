use crate::error::CeilmapError;
use crate::patterns::schema::PatternSetDef;

const DEFAULT_JSON: &str = include_str!("../../../../patterns/default.json");

/// Available predefined pattern sets.
pub const PRESETS: &[&str] = &["default"];

/// Load a predefined pattern set by name.
pub fn load_preset(name: &str) -> Result<PatternSetDef, CeilmapError> {
    match name {
        "default" => {
            let def: PatternSetDef = serde_json::from_str(DEFAULT_JSON)?;
            Ok(def)
        }
        _ => Err(CeilmapError::PatternInvalid(format!(
            "unknown preset '{}'. Available: {}",
            name,
            PRESETS.join(", ")
        ))),
    }
}
