use std::slice::Iter;

use log::warn;

use wedit_shared::{PlayerKey, WorldRefType};

/// Entries removed by [`BuilderRegistry::demote`]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Demotion {
    /// Entries that resolved to the demoted name
    pub named: Vec<PlayerKey>,
    /// Entries whose player could no longer be resolved
    pub stale: Vec<PlayerKey>,
}

/// The ordered set of players currently acting as builders.
///
/// Entries are player keys resolved lazily through the host world, so an
/// entry may outlive the player it names. Lookups by identity never touch the
/// world; lookups by name treat an entry that no longer resolves as stale.
#[derive(Default)]
pub struct BuilderRegistry {
    builders: Vec<PlayerKey>,
}

impl BuilderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the player unless already present. Returns true if added.
    pub fn admit(&mut self, player: &PlayerKey) -> bool {
        if self.is_active(player) {
            return false;
        }
        self.builders.push(*player);
        true
    }

    pub fn is_active(&self, player: &PlayerKey) -> bool {
        self.builders.contains(player)
    }

    /// Removes a single entry by identity. Returns whether it was present.
    pub fn remove(&mut self, player: &PlayerKey) -> bool {
        let before = self.builders.len();
        self.builders.retain(|builder| builder != player);
        self.builders.len() != before
    }

    /// Removes every entry named `name`, along with every entry whose name can
    /// no longer be read. Both lists in the returned [`Demotion`] keep registry
    /// order.
    pub fn demote<W: WorldRefType>(&mut self, world: &W, name: &str) -> Demotion {
        let mut demotion = Demotion::default();

        self.builders.retain(|builder| match world.player_name(builder) {
            Ok(builder_name) if builder_name == name => {
                demotion.named.push(*builder);
                false
            }
            Ok(_) => true,
            Err(_) => {
                demotion.stale.push(*builder);
                false
            }
        });

        if demotion.named.len() > 1 {
            warn!(
                "builder registry held {} live entries named {}, expected at most one",
                demotion.named.len(),
                name
            );
        }

        demotion
    }

    pub fn keys(&self) -> Iter<'_, PlayerKey> {
        self.builders.iter()
    }

    pub fn len(&self) -> usize {
        self.builders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }

    pub fn clear(&mut self) {
        self.builders.clear();
    }
}
