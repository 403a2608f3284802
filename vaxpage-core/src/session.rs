//! Explicit session state for an API client.
//!
//! Token issue and validation belong to the remote API. This type only holds
//! what the API handed back and moves through a small, explicit lifecycle:
//!
//! ```text
//! Anonymous --Login--> Authenticated{user: None} --ProfileLoaded--> Authenticated{user: Some}
//!     ^                          |                                         |
//!     +------- Logout / Unauthorized (401) ---------------------------------+
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::CoreError;
use crate::role::Role;

pub const ENV_ACCESS_TOKEN: &str = "VAXPAGE_ACCESS_TOKEN";
pub const ENV_REFRESH_TOKEN: &str = "VAXPAGE_REFRESH_TOKEN";
pub const ENV_USER_ID: &str = "VAXPAGE_USER_ID";
pub const ENV_USER_EMAIL: &str = "VAXPAGE_USER_EMAIL";
pub const ENV_USER_ROLE: &str = "VAXPAGE_USER_ROLE";

/// Token pair returned by the login endpoint.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access: String,
    pub refresh: String,
}

impl fmt::Debug for AuthTokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthTokens")
            .field("access", &"[REDACTED]")
            .field("refresh", &"[REDACTED]")
            .finish()
    }
}

/// Profile of the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: u64,
    pub email: String,
    pub role: Role,
}

/// Events that move a session between states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Login(AuthTokens),
    ProfileLoaded(UserProfile),
    /// The API answered 401: the access token expired or was revoked.
    Unauthorized,
    Logout,
}

impl SessionEvent {
    fn name(&self) -> &'static str {
        match self {
            Self::Login(_) => "login",
            Self::ProfileLoaded(_) => "profile loaded",
            Self::Unauthorized => "unauthorized",
            Self::Logout => "logout",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated {
        tokens: AuthTokens,
        user: Option<UserProfile>,
    },
}

impl Session {
    pub fn anonymous() -> Self {
        Self::Anonymous
    }

    fn state_name(&self) -> &'static str {
        match self {
            Self::Anonymous => "anonymous",
            Self::Authenticated { user: None, .. } => "authenticated without profile",
            Self::Authenticated { user: Some(_), .. } => "authenticated",
        }
    }

    /// Apply `event`, rejecting transitions that make no sense in the
    /// current state.
    pub fn apply(&mut self, event: SessionEvent) -> Result<(), CoreError> {
        let state = self.state_name();
        let event_name = event.name();

        let next = match (std::mem::take(self), event) {
            (_, SessionEvent::Login(tokens)) => {
                info!("session authenticated");
                Self::Authenticated { tokens, user: None }
            }
            (Self::Authenticated { tokens, .. }, SessionEvent::ProfileLoaded(profile)) => {
                info!(user_id = profile.id, role = %profile.role, "profile attached to session");
                Self::Authenticated {
                    tokens,
                    user: Some(profile),
                }
            }
            (Self::Authenticated { .. }, SessionEvent::Unauthorized) => {
                warn!("access token rejected; clearing session");
                Self::Anonymous
            }
            (Self::Authenticated { .. }, SessionEvent::Logout) => {
                info!("session logged out");
                Self::Anonymous
            }
            (Self::Anonymous, SessionEvent::Logout) => Self::Anonymous,
            (Self::Anonymous, _) => {
                return Err(CoreError::InvalidTransition {
                    state,
                    event: event_name,
                });
            }
        };

        *self = next;
        Ok(())
    }

    /// Restore a session from the process environment.
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Restore a session persisted by an earlier login.
    ///
    /// Without an access token the session is anonymous. A user role
    /// attaches a profile; a role without tokens is rejected like any other
    /// profile load on an anonymous session.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CoreError> {
        let mut session = Self::anonymous();

        if let Some(access) = lookup(ENV_ACCESS_TOKEN).filter(|token| !token.trim().is_empty()) {
            session.login(AuthTokens {
                access: access.trim().to_owned(),
                refresh: lookup(ENV_REFRESH_TOKEN).unwrap_or_default(),
            });
        }

        if let Some(role) = lookup(ENV_USER_ROLE) {
            let id = match lookup(ENV_USER_ID) {
                Some(raw) => raw.trim().parse::<u64>().map_err(|_| CoreError::Config {
                    key: ENV_USER_ID,
                    value: raw.clone(),
                })?,
                None => 0,
            };
            session.attach_user(UserProfile {
                id,
                email: lookup(ENV_USER_EMAIL).unwrap_or_default(),
                role: role.parse()?,
            })?;
        }

        Ok(session)
    }

    pub fn login(&mut self, tokens: AuthTokens) {
        // Login is accepted from every state.
        let _ = self.apply(SessionEvent::Login(tokens));
    }

    pub fn attach_user(&mut self, user: UserProfile) -> Result<(), CoreError> {
        self.apply(SessionEvent::ProfileLoaded(user))
    }

    pub fn logout(&mut self) {
        // Logout is accepted from every state.
        let _ = self.apply(SessionEvent::Logout);
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            Self::Authenticated { user, .. } => user.as_ref(),
            Self::Anonymous => None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.user().map(|user| user.role)
    }

    /// `Authorization` header value for API requests, if signed in.
    pub fn authorization_header(&self) -> Option<String> {
        match self {
            Self::Authenticated { tokens, .. } => Some(format!("JWT {}", tokens.access)),
            Self::Anonymous => None,
        }
    }
}
