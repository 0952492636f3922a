use log::{debug, warn};

use wedit_shared::{Dimension, TickingAreas, WorldMutType};

use crate::{ServerConfig, WeditServerError};

/// What a [`TickingAreaCleanup`] run did
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CleanupReport {
    /// Entries found in the persisted list, including null and empty ones
    pub stored: usize,
    /// Null or empty entries that were passed over
    pub skipped: usize,
    /// Calls made to the host's removal primitive
    pub attempts: usize,
    /// Removal calls the host reported as successful
    pub removed: usize,
}

/// Removes every ticking area recorded in the world property by a previous
/// load, then empties the property.
///
/// Each area is searched for in [`Dimension::ALL`] order, and the search for
/// an area stops at the first dimension that reports it absent. The property
/// is emptied whatever the outcome of the removals, so an id that can no
/// longer be removed is never retried on a later load.
pub struct TickingAreaCleanup {
    property: String,
    max_length: usize,
}

impl TickingAreaCleanup {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            property: config.ticking_area_property.clone(),
            max_length: config.ticking_area_property_max_length,
        }
    }

    pub fn run<W: WorldMutType>(&self, world: &mut W) -> Result<CleanupReport, WeditServerError> {
        let areas = self.read_areas(&*world);

        let mut report = CleanupReport {
            stored: areas.len(),
            ..CleanupReport::default()
        };

        for id in areas.ids() {
            for dimension in Dimension::ALL {
                report.attempts += 1;
                if !world.remove_ticking_area(id, dimension) {
                    break;
                }
                report.removed += 1;
                debug!("removed ticking area {} from {}", id, dimension);
            }
        }
        report.skipped = areas.len() - areas.ids().count();

        let cleared = TickingAreas::new().to_property(self.max_length)?;
        world.set_dynamic_property(&self.property, &cleared)?;

        debug!(
            "ticking area cleanup: {} stored, {} skipped, {} removal attempts, {} removed",
            report.stored, report.skipped, report.attempts, report.removed
        );

        Ok(report)
    }

    fn read_areas<W: WorldMutType>(&self, world: &W) -> TickingAreas {
        let raw = match world.dynamic_property(&self.property) {
            Ok(raw) => raw,
            Err(err) => {
                warn!("could not read ticking areas, assuming none: {}", err);
                return TickingAreas::new();
            }
        };

        match TickingAreas::from_property(raw.as_deref()) {
            Ok(areas) => areas,
            Err(err) => {
                warn!("discarding unreadable ticking area list: {}", err);
                TickingAreas::new()
            }
        }
    }
}
