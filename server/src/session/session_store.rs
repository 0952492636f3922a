use std::collections::HashMap;

use wedit_shared::{PlayerKey, Tick};

use super::session::Session;

/// Storage for builder sessions, keyed by player name.
///
/// `get_session` must be idempotent: asking for a name that already has an
/// open session returns that session, it never opens a second one.
pub trait SessionStore {
    /// Opens a session for the player, or fetches and refreshes the one already
    /// open under `name`
    fn get_session(&mut self, player: &PlayerKey, name: &str, tick: Tick) -> &mut Session;

    /// Closes the session open under `name`. Returns false if there was none.
    fn remove_session(&mut self, name: &str) -> bool;

    fn session(&self, name: &str) -> Option<&Session>;

    fn session_count(&self) -> usize;

    /// Closes every session
    fn clear(&mut self);

    fn has_session(&self, name: &str) -> bool {
        self.session(name).is_some()
    }
}

// Sessions

/// In-memory [`SessionStore`]
#[derive(Default)]
pub struct Sessions {
    sessions: HashMap<String, Session>,
}

impl Sessions {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for Sessions {
    fn get_session(&mut self, player: &PlayerKey, name: &str, tick: Tick) -> &mut Session {
        let session = self
            .sessions
            .entry(name.to_string())
            .or_insert_with(|| Session::new(name, player, tick));
        session.refresh(player, tick);
        session
    }

    fn remove_session(&mut self, name: &str) -> bool {
        self.sessions.remove(name).is_some()
    }

    fn session(&self, name: &str) -> Option<&Session> {
        self.sessions.get(name)
    }

    fn session_count(&self) -> usize {
        self.sessions.len()
    }

    fn clear(&mut self) {
        self.sessions.clear();
    }
}
