use crate::model::{HeightCandidate, RoomCandidate};
use serde::{Deserialize, Serialize};

pub const UNKNOWN_DRAWING: &str = "Unknown Drawing";
pub const UNKNOWN_TYPE: &str = "Unknown Type";

/// Everything the classifier found in one document's fragments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    /// Drawing title, or "Unknown Drawing".
    pub title: String,
    /// Apartment type, or "Unknown Type".
    pub apartment_type: String,
    /// Room labels in fragment order.
    pub rooms: Vec<RoomCandidate>,
    /// Ceiling-height callouts in fragment order.
    pub heights: Vec<HeightCandidate>,
}
