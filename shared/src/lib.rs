//! # Wedit Shared
//! Types shared between the wedit builder server and the host that embeds it:
//! player keys, world dimensions, the persisted ticking-area list, and the
//! traits through which the server reads and mutates the host world.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod messages;
mod player;
mod ticking_area;
mod types;
mod world;

pub use messages::constants::{
    PERMISSION_GRANTED_MESSAGE, PERMISSION_MISSING_MESSAGE, PERMISSION_REVOKED_MESSAGE,
    PERMISSION_TAG_PREFIX, TICKING_AREA_PROPERTY, TICKING_AREA_PROPERTY_MAX_LENGTH,
};
pub use player::{
    error::PlayerDoesNotExistError,
    player_key::{has_permission_tag, PlayerKey},
};
pub use ticking_area::{
    error::TickingAreaError,
    ticking_areas::{TickingAreaId, TickingAreas},
};
pub use types::{ticks_since, Tick};
pub use world::{
    dimension::Dimension,
    property::PropertyError,
    world_type::{WorldMutType, WorldRefType},
};
