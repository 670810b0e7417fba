use ceilmap_core::patterns::builtin;
use std::path::Path;

pub fn list() -> Result<(), ceilmap_core::error::CeilmapError> {
    println!("Available predefined pattern sets:\n");
    for name in builtin::PRESETS {
        let def = builtin::load_preset(name)?;
        println!("  {:<10} {} (v{})", name, def.name, def.version);
        if let Some(ref desc) = def.description {
            println!("             {}", desc);
        }
        println!();
    }
    Ok(())
}

pub fn show(preset: &str) -> Result<(), ceilmap_core::error::CeilmapError> {
    let def = builtin::load_preset(preset)?;
    println!("{}", serde_json::to_string_pretty(&def)?);
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), ceilmap_core::error::CeilmapError> {
    let def = ceilmap_core::patterns::load_pattern_file(file)?;

    println!("Pattern set '{}' (v{}) is valid.", def.name, def.version);
    println!("  Room keywords: {}", def.room_keywords.join(", "));
    println!(
        "  Height range: {}-{} mm",
        def.height_range_mm.min, def.height_range_mm.max
    );
    println!("  Match radius: {}", def.max_match_distance);

    // Check for potential issues (warnings, not errors)
    let mut warnings = Vec::new();
    let mut seen = std::collections::HashSet::new();
    for keyword in &def.room_keywords {
        if !seen.insert(keyword.trim().to_uppercase()) {
            warnings.push(format!("room keyword '{}' is listed more than once", keyword));
        }
    }
    if def.max_match_distance == 0.0 {
        warnings.push("max_match_distance is 0: only exactly co-located heights will match".into());
    }
    if def.height_range_mm.max < 1000 || def.height_range_mm.min > 10000 {
        warnings.push(format!(
            "height range {}-{} mm looks implausible for ceiling heights",
            def.height_range_mm.min, def.height_range_mm.max
        ));
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}
