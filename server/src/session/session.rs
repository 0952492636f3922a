use wedit_shared::{ticks_since, PlayerKey, Tick};

// Session

/// Per-builder state, addressed by the player's name so that it survives the
/// player's key changing across reconnects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    name: String,
    player: PlayerKey,
    opened_at: Tick,
    refreshed_at: Tick,
}

impl Session {
    pub fn new(name: &str, player: &PlayerKey, tick: Tick) -> Self {
        Self {
            name: name.to_string(),
            player: *player,
            opened_at: tick,
            refreshed_at: tick,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Key of the player the session currently belongs to
    pub fn player(&self) -> PlayerKey {
        self.player
    }

    pub fn opened_at(&self) -> Tick {
        self.opened_at
    }

    pub fn refreshed_at(&self) -> Tick {
        self.refreshed_at
    }

    /// Marks the session as seen on `tick`, rebinding it if the player
    /// reconnected under a new key
    pub fn refresh(&mut self, player: &PlayerKey, tick: Tick) {
        self.player = *player;
        self.refreshed_at = tick;
    }

    pub fn idle_ticks(&self, now: Tick) -> u16 {
        ticks_since(now, self.refreshed_at)
    }
}
