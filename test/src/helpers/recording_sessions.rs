use std::{cell::RefCell, rc::Rc};

use wedit_server::{
    shared::{PlayerKey, Tick},
    Session, SessionStore, Sessions,
};

/// Everything a [`RecordingSessions`] store was asked to do
#[derive(Debug, Default)]
pub struct SessionLog {
    /// Names for which a new session was opened
    pub opened: Vec<String>,
    /// Names passed to `remove_session`, whether or not a session was open
    pub remove_calls: Vec<String>,
    /// Names whose open session was actually closed
    pub closed: Vec<String>,
    /// Calls to `get_session` that found a session already open
    pub refreshes: usize,
}

impl SessionLog {
    pub fn opened_count(&self, name: &str) -> usize {
        self.opened.iter().filter(|opened| opened.as_str() == name).count()
    }

    pub fn closed_count(&self, name: &str) -> usize {
        self.closed.iter().filter(|closed| closed.as_str() == name).count()
    }

    pub fn remove_call_count(&self, name: &str) -> usize {
        self.remove_calls.iter().filter(|call| call.as_str() == name).count()
    }
}

/// A [`Sessions`] store that records its traffic in a shared [`SessionLog`]
pub struct RecordingSessions {
    inner: Sessions,
    log: Rc<RefCell<SessionLog>>,
}

impl RecordingSessions {
    pub fn with_log() -> (Self, Rc<RefCell<SessionLog>>) {
        let log = Rc::new(RefCell::new(SessionLog::default()));
        let store = Self {
            inner: Sessions::new(),
            log: log.clone(),
        };
        (store, log)
    }
}

impl SessionStore for RecordingSessions {
    fn get_session(&mut self, player: &PlayerKey, name: &str, tick: Tick) -> &mut Session {
        {
            let mut log = self.log.borrow_mut();
            if self.inner.has_session(name) {
                log.refreshes += 1;
            } else {
                log.opened.push(name.to_string());
            }
        }
        self.inner.get_session(player, name, tick)
    }

    fn remove_session(&mut self, name: &str) -> bool {
        let closed = self.inner.remove_session(name);
        let mut log = self.log.borrow_mut();
        log.remove_calls.push(name.to_string());
        if closed {
            log.closed.push(name.to_string());
        }
        closed
    }

    fn session(&self, name: &str) -> Option<&Session> {
        self.inner.session(name)
    }

    fn session_count(&self) -> usize {
        self.inner.session_count()
    }

    fn clear(&mut self) {
        self.inner.clear();
    }
}
