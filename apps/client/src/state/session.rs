//! # Session State
//!
//! Holds the stubbed login session.

use std::sync::{Arc, Mutex};

use tiffin_core::AuthSession;

use super::lock;

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    session: Arc<Mutex<AuthSession>>,
}

impl SessionState {
    pub fn new() -> Self {
        SessionState::default()
    }

    /// Executes a function with read access to the session.
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&AuthSession) -> R,
    {
        let session = lock(&self.session);
        f(&session)
    }

    /// Executes a function with write access to the session.
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut AuthSession) -> R,
    {
        let mut session = lock(&self.session);
        f(&mut session)
    }

    /// Identity of the logged-in user, if any.
    pub fn identity(&self) -> Option<String> {
        self.with_session(|s| s.identity().map(str::to_string))
    }
}
