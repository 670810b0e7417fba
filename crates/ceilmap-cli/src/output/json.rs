use ceilmap_core::error::CeilmapError;
use serde::Serialize;

pub fn print<T: Serialize + ?Sized>(value: &T) -> Result<(), CeilmapError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
