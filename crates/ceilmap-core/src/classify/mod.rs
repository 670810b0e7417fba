pub mod engine;
pub mod outcome;

pub use engine::{classify, find_apartment_type, find_ceiling_heights, find_drawing_title, find_rooms};
pub use outcome::Classification;
