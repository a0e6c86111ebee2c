//! # Auth Session
//!
//! Stubbed login state. There is no auth service: a well-formed phone
//! number or a tap on a social button is enough to be "logged in".
//!
//! ```text
//!               login_with_phone / login_with_provider
//!  Anonymous ─────────────────────────────────────────► Authenticated
//!      ▲                                                      │
//!      └────────────────────────── logout ────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreResult;
use crate::validation::validate_phone;

/// Social login buttons on the login screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum SocialProvider {
    Google,
    Facebook,
}

impl SocialProvider {
    /// Placeholder identity recorded for a stubbed social login.
    pub const fn placeholder_identity(&self) -> &'static str {
        match self {
            SocialProvider::Google => "dummy_google_user",
            SocialProvider::Facebook => "facebook_user",
        }
    }
}

/// How the current user logged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum LoginMethod {
    Phone,
    Social(SocialProvider),
}

/// The login state of the app.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", tag = "status")]
#[ts(export)]
pub enum AuthSession {
    #[default]
    Anonymous,
    Authenticated {
        /// Phone number or provider placeholder.
        identity: String,
        method: LoginMethod,
    },
}

impl AuthSession {
    /// Logs in with a phone number (exactly 10 digits).
    ///
    /// ```rust
    /// use tiffin_core::AuthSession;
    ///
    /// let mut session = AuthSession::default();
    /// session.login_with_phone("9876543210").unwrap();
    /// assert_eq!(session.identity(), Some("9876543210"));
    ///
    /// assert!(session.login_with_phone("12345").is_err());
    /// ```
    pub fn login_with_phone(&mut self, phone: &str) -> CoreResult<()> {
        let phone = validate_phone(phone)?;
        *self = AuthSession::Authenticated {
            identity: phone,
            method: LoginMethod::Phone,
        };
        Ok(())
    }

    /// Logs in through a (stubbed) social provider. Always succeeds.
    pub fn login_with_provider(&mut self, provider: SocialProvider) {
        *self = AuthSession::Authenticated {
            identity: provider.placeholder_identity().to_string(),
            method: LoginMethod::Social(provider),
        };
    }

    pub fn logout(&mut self) {
        *self = AuthSession::Anonymous;
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthSession::Authenticated { .. })
    }

    pub fn identity(&self) -> Option<&str> {
        match self {
            AuthSession::Anonymous => None,
            AuthSession::Authenticated { identity, .. } => Some(identity.as_str()),
        }
    }
}
