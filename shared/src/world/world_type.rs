use crate::{
    player::{error::PlayerDoesNotExistError, player_key::PlayerKey},
    ticking_area::ticking_areas::TickingAreaId,
    world::{dimension::Dimension, property::PropertyError},
};

/// Read access to the host world.
///
/// Every per-player read may fail with [`PlayerDoesNotExistError`] if the
/// player disconnected since the key was handed out; callers treat that as the
/// player being gone, never as a fatal error.
pub trait WorldRefType {
    /// Keys of every player currently connected to the world
    fn player_keys(&self) -> Vec<PlayerKey>;

    fn player_name(&self, player: &PlayerKey) -> Result<String, PlayerDoesNotExistError>;

    fn player_tags(&self, player: &PlayerKey) -> Result<Vec<String>, PlayerDoesNotExistError>;

    /// Whether the player's hotbar is currently swapped out for builder tools
    fn is_hotbar_stashed(&self, player: &PlayerKey) -> Result<bool, PlayerDoesNotExistError>;

    /// Reads a world-scoped string property. `Ok(None)` if it was never written.
    fn dynamic_property(&self, name: &str) -> Result<Option<String>, PropertyError>;
}

/// Mutable access to the host world
pub trait WorldMutType: WorldRefType {
    /// Puts back the hotbar that was stashed when the player became a builder
    fn restore_hotbar(&mut self, player: &PlayerKey) -> Result<(), PlayerDoesNotExistError>;

    /// Sends a localized message to the player
    fn print(
        &mut self,
        player: &PlayerKey,
        message_id: &str,
    ) -> Result<(), PlayerDoesNotExistError>;

    /// Defines a world-scoped string property. Only valid during world initialization.
    fn register_string_property(
        &mut self,
        name: &str,
        max_length: usize,
    ) -> Result<(), PropertyError>;

    fn set_dynamic_property(&mut self, name: &str, value: &str) -> Result<(), PropertyError>;

    /// Removes a ticking area from one dimension. Returns false if the area
    /// was not present there.
    fn remove_ticking_area(&mut self, id: &TickingAreaId, dimension: Dimension) -> bool;
}
