use thiserror::Error;

use super::player_key::PlayerKey;

/// Returned by the host when a player handle no longer resolves, usually
/// because the player disconnected before the leave notification arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Player {key:?} no longer exists in the world")]
pub struct PlayerDoesNotExistError {
    pub key: PlayerKey,
}

impl PlayerDoesNotExistError {
    pub fn new(key: &PlayerKey) -> Self {
        Self { key: *key }
    }
}
