pub mod analyze;
pub mod extract;
pub mod patterns;

use ceilmap_core::error::CeilmapError;
use ceilmap_core::patterns::{builtin, load_pattern_file, PatternSet};

use crate::PatternArgs;

/// Resolve `--preset` / `--patterns` into a compiled pattern set.
fn load_patterns(args: &PatternArgs) -> Result<PatternSet, CeilmapError> {
    let def = match (&args.patterns, &args.preset) {
        (Some(path), _) => load_pattern_file(path)?,
        (None, Some(name)) => builtin::load_preset(name)?,
        (None, None) => builtin::load_preset("default")?,
    };
    tracing::debug!(name = %def.name, version = %def.version, "loaded pattern set");
    PatternSet::compile(&def)
}
