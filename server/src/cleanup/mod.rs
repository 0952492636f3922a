mod ticking_area_cleanup;
pub use ticking_area_cleanup::{CleanupReport, TickingAreaCleanup};
