pub mod error;
pub mod ticking_areas;
