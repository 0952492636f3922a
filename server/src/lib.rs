//! # Wedit Server
//! Keeps track of which connected players are active builders, reconciling
//! that set against their permission tags once per world tick, and reclaims
//! ticking areas left registered by an abnormal shutdown of the previous
//! world load.

#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]

pub mod shared {
    pub use wedit_shared::{
        has_permission_tag, ticks_since, Dimension, PlayerDoesNotExistError, PlayerKey,
        PropertyError, Tick, TickingAreaError, TickingAreaId, TickingAreas, WorldMutType,
        WorldRefType,
    };
}

mod builder;
mod cleanup;
mod error;
mod events;
mod reconciliation;
mod server;
mod session;

pub use builder::{BuilderRegistry, Demotion};
pub use cleanup::{CleanupReport, TickingAreaCleanup};
pub use error::WeditServerError;
pub use events::{
    BuilderEvent, BuilderEvents, CleanupEvent, ErrorEvent, LeaveEvent, PermissionMissingEvent,
    PromoteEvent, PruneEvent, RevokeEvent,
};
pub use server::{BuilderServer, ServerConfig};
pub use session::{Session, SessionStore, Sessions};
