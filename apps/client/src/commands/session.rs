//! # Session Commands
//!
//! Stubbed login. No credential is verified; any well-formed phone number
//! or either social provider signs the user in.
//!
//! ```text
//! ┌──────────────┐  login_with_phone("9876543210")   ┌────────────────────┐
//! │  Anonymous   │ ─────────────────────────────────►│   Authenticated    │
//! │              │  login_with_provider(Google)      │ identity, method   │
//! │              │ ◄─────────────────────────────────│                    │
//! └──────────────┘              logout               └────────────────────┘
//! ```

use tiffin_core::{AuthSession, SocialProvider};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::SessionState;

/// Signs in with a 10-digit phone number.
///
/// Surrounding whitespace is ignored; anything but exactly ten digits is
/// rejected and the session is left as it was.
pub fn login_with_phone(session: &SessionState, phone: &str) -> Result<AuthSession, ApiError> {
    debug!("login_with_phone command");

    let updated = session.with_session_mut(|s| {
        s.login_with_phone(phone)?;
        Ok::<_, ApiError>(s.clone())
    })?;

    info!("Logged in with phone");
    Ok(updated)
}

/// Signs in through a social provider (placeholder identity).
pub fn login_with_provider(session: &SessionState, provider: SocialProvider) -> AuthSession {
    debug!(?provider, "login_with_provider command");

    session.with_session_mut(|s| {
        s.login_with_provider(provider);
        s.clone()
    })
}

pub fn logout(session: &SessionState) -> AuthSession {
    debug!("logout command");
    session.with_session_mut(|s| {
        s.logout();
        s.clone()
    })
}

pub fn get_session(session: &SessionState) -> AuthSession {
    session.with_session(|s| s.clone())
}
