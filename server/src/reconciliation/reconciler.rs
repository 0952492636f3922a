use std::collections::HashSet;

use log::{debug, info};

use wedit_shared::{
    has_permission_tag, PlayerDoesNotExistError, PlayerKey, Tick, WorldMutType, WorldRefType,
};

use crate::{events::BuilderEvents, BuilderRegistry, ServerConfig, SessionStore};

/// Borrows the builder server's state for one pass of promotions and demotions.
///
/// All reads of a player go through the world and may find the player gone.
/// Such a player is skipped when unmanaged and dropped from the registry when
/// managed; neither case is reported as an error.
pub(crate) struct Reconciler<'s> {
    pub config: &'s ServerConfig,
    pub tick: Tick,
    pub registry: &'s mut BuilderRegistry,
    pub sessions: &'s mut dyn SessionStore,
    pub denied: &'s mut HashSet<PlayerKey>,
    pub events: &'s mut BuilderEvents,
}

impl Reconciler<'_> {
    /// Runs both passes for the current tick
    pub fn reconcile<W: WorldMutType>(&mut self, world: &mut W) {
        self.admission_pass(world);
        self.maintenance_pass(world);
    }

    /// Considers every connected player that is not yet a builder
    pub fn admission_pass<W: WorldMutType>(&mut self, world: &mut W) {
        let connected = world.player_keys();
        self.denied.retain(|player| connected.contains(player));

        for player in connected {
            if self.registry.is_active(&player) {
                continue;
            }

            if self.config.restore_stashed_hotbars && self.restore_hotbar(world, &player).is_err() {
                continue;
            }

            let name = match world.player_name(&player) {
                Ok(name) => name,
                Err(_) => continue,
            };
            let eligible = match self.is_eligible(&*world, &player) {
                Ok(eligible) => eligible,
                Err(_) => continue,
            };

            if eligible {
                if self.promote(&player, &name) {
                    self.print(world, &player, &self.config.granted_message);
                }
            } else {
                self.deny(world, &player);
            }
        }
    }

    /// Re-checks every builder, newest first, so removals never skip an entry
    /// that has not been visited yet
    pub fn maintenance_pass<W: WorldMutType>(&mut self, world: &mut W) {
        let builders: Vec<PlayerKey> = self.registry.keys().rev().copied().collect();

        for player in builders {
            // an earlier demotion in this pass may have taken it already
            if !self.registry.is_active(&player) {
                continue;
            }

            let name = match world.player_name(&player) {
                Ok(name) => name,
                Err(_) => {
                    self.prune(&player);
                    continue;
                }
            };
            let eligible = match self.is_eligible(&*world, &player) {
                Ok(eligible) => eligible,
                Err(_) => {
                    self.prune(&player);
                    continue;
                }
            };

            if eligible {
                self.sessions.get_session(&player, &name, self.tick);
                continue;
            }

            self.demote(&*world, &name);
            info!("{} has been revoked of their worldedit permissions.", name);
            self.print(world, &player, &self.config.revoked_message);
            // the revocation notice stands in for the missing-permission one
            self.denied.insert(player);
            self.events.push_revocation(&player, name);
        }
    }

    /// Admits the player and opens their session. Returns false, and opens
    /// nothing, if the player is already a builder.
    pub fn promote(&mut self, player: &PlayerKey, name: &str) -> bool {
        if !self.registry.admit(player) {
            return false;
        }
        self.sessions.get_session(player, name, self.tick);
        self.denied.remove(player);
        info!("{} has been given worldedit permissions.", name);
        self.events.push_promotion(player);
        true
    }

    /// Removes every builder entry named `name` and closes that name's session.
    /// Stale entries swept up on the way are reported as prunes. Returns the
    /// entries removed under `name`.
    pub fn demote<W: WorldRefType>(&mut self, world: &W, name: &str) -> Vec<PlayerKey> {
        let demotion = self.registry.demote(world, name);
        for player in &demotion.stale {
            debug!("A builder no longer exists!");
            self.events.push_prune(player);
        }
        self.sessions.remove_session(name);
        debug!("Removed player {} from world edit!", name);
        demotion.named
    }

    pub fn is_eligible<W: WorldRefType>(
        &self,
        world: &W,
        player: &PlayerKey,
    ) -> Result<bool, PlayerDoesNotExistError> {
        let tags = world.player_tags(player)?;
        Ok(has_permission_tag(&tags, &self.config.permission_tag_prefix))
    }

    fn prune(&mut self, player: &PlayerKey) {
        debug!("A builder no longer exists!");
        self.registry.remove(player);
        self.events.push_prune(player);
    }

    fn deny<W: WorldMutType>(&mut self, world: &mut W, player: &PlayerKey) {
        if !self.denied.insert(*player) {
            return;
        }
        if let Some(message) = &self.config.missing_message {
            self.print(world, player, message);
        }
        self.events.push_missing_permission(player);
    }

    fn restore_hotbar<W: WorldMutType>(
        &self,
        world: &mut W,
        player: &PlayerKey,
    ) -> Result<(), PlayerDoesNotExistError> {
        if world.is_hotbar_stashed(player)? {
            world.restore_hotbar(player)?;
            debug!("restored stashed hotbar of {:?}", player);
        }
        Ok(())
    }

    fn print<W: WorldMutType>(&self, world: &mut W, player: &PlayerKey, message: &str) {
        if let Err(err) = world.print(player, message) {
            debug!("could not print {}: {}", message, err);
        }
    }
}
