use std::{mem, vec::IntoIter};

use wedit_shared::PlayerKey;

use crate::{cleanup::CleanupReport, WeditServerError};

/// Everything the builder server observed since the events were last taken
pub struct BuilderEvents {
    promotions: Vec<PlayerKey>,
    revocations: Vec<(PlayerKey, String)>,
    prunes: Vec<PlayerKey>,
    leaves: Vec<(String, Vec<PlayerKey>)>,
    missing_permissions: Vec<PlayerKey>,
    cleanups: Vec<CleanupReport>,
    errors: Vec<WeditServerError>,

    empty: bool,
}

impl BuilderEvents {
    pub(crate) fn new() -> Self {
        Self {
            promotions: Vec::new(),
            revocations: Vec::new(),
            prunes: Vec::new(),
            leaves: Vec::new(),
            missing_permissions: Vec::new(),
            cleanups: Vec::new(),
            errors: Vec::new(),

            empty: true,
        }
    }

    // Public

    pub fn is_empty(&self) -> bool {
        self.empty
    }

    pub fn read<V: BuilderEvent>(&mut self) -> V::Iter {
        V::iter(self)
    }

    pub fn has<V: BuilderEvent>(&self) -> bool {
        V::has(self)
    }

    // Crate-public

    pub(crate) fn push_promotion(&mut self, player: &PlayerKey) {
        self.promotions.push(*player);
        self.empty = false;
    }

    pub(crate) fn push_revocation(&mut self, player: &PlayerKey, name: String) {
        self.revocations.push((*player, name));
        self.empty = false;
    }

    pub(crate) fn push_prune(&mut self, player: &PlayerKey) {
        self.prunes.push(*player);
        self.empty = false;
    }

    pub(crate) fn push_leave(&mut self, name: &str, removed: Vec<PlayerKey>) {
        self.leaves.push((name.to_string(), removed));
        self.empty = false;
    }

    pub(crate) fn push_missing_permission(&mut self, player: &PlayerKey) {
        self.missing_permissions.push(*player);
        self.empty = false;
    }

    pub(crate) fn push_cleanup(&mut self, report: CleanupReport) {
        self.cleanups.push(report);
        self.empty = false;
    }

    pub(crate) fn push_error(&mut self, error: WeditServerError) {
        self.errors.push(error);
        self.empty = false;
    }
}

// Event Trait
pub trait BuilderEvent {
    type Iter;

    fn iter(events: &mut BuilderEvents) -> Self::Iter;

    fn has(events: &BuilderEvents) -> bool;
}

// PromoteEvent
pub struct PromoteEvent;
impl BuilderEvent for PromoteEvent {
    type Iter = IntoIter<PlayerKey>;

    fn iter(events: &mut BuilderEvents) -> Self::Iter {
        let list = mem::take(&mut events.promotions);
        IntoIterator::into_iter(list)
    }

    fn has(events: &BuilderEvents) -> bool {
        !events.promotions.is_empty()
    }
}

// RevokeEvent
pub struct RevokeEvent;
impl BuilderEvent for RevokeEvent {
    type Iter = IntoIter<(PlayerKey, String)>;

    fn iter(events: &mut BuilderEvents) -> Self::Iter {
        let list = mem::take(&mut events.revocations);
        IntoIterator::into_iter(list)
    }

    fn has(events: &BuilderEvents) -> bool {
        !events.revocations.is_empty()
    }
}

// PruneEvent
/// A builder entry dropped because its player could no longer be resolved
pub struct PruneEvent;
impl BuilderEvent for PruneEvent {
    type Iter = IntoIter<PlayerKey>;

    fn iter(events: &mut BuilderEvents) -> Self::Iter {
        let list = mem::take(&mut events.prunes);
        IntoIterator::into_iter(list)
    }

    fn has(events: &BuilderEvents) -> bool {
        !events.prunes.is_empty()
    }
}

// LeaveEvent
/// A player left; carries the registry entries removed on their behalf
pub struct LeaveEvent;
impl BuilderEvent for LeaveEvent {
    type Iter = IntoIter<(String, Vec<PlayerKey>)>;

    fn iter(events: &mut BuilderEvents) -> Self::Iter {
        let list = mem::take(&mut events.leaves);
        IntoIterator::into_iter(list)
    }

    fn has(events: &BuilderEvents) -> bool {
        !events.leaves.is_empty()
    }
}

// PermissionMissingEvent
pub struct PermissionMissingEvent;
impl BuilderEvent for PermissionMissingEvent {
    type Iter = IntoIter<PlayerKey>;

    fn iter(events: &mut BuilderEvents) -> Self::Iter {
        let list = mem::take(&mut events.missing_permissions);
        IntoIterator::into_iter(list)
    }

    fn has(events: &BuilderEvents) -> bool {
        !events.missing_permissions.is_empty()
    }
}

// CleanupEvent
pub struct CleanupEvent;
impl BuilderEvent for CleanupEvent {
    type Iter = IntoIter<CleanupReport>;

    fn iter(events: &mut BuilderEvents) -> Self::Iter {
        let list = mem::take(&mut events.cleanups);
        IntoIterator::into_iter(list)
    }

    fn has(events: &BuilderEvents) -> bool {
        !events.cleanups.is_empty()
    }
}

// ErrorEvent
pub struct ErrorEvent;
impl BuilderEvent for ErrorEvent {
    type Iter = IntoIter<WeditServerError>;

    fn iter(events: &mut BuilderEvents) -> Self::Iter {
        let list = mem::take(&mut events.errors);
        IntoIterator::into_iter(list)
    }

    fn has(events: &BuilderEvents) -> bool {
        !events.errors.is_empty()
    }
}
