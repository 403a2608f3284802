pub mod config;
pub mod error;
pub mod role;
pub mod session;

pub use config::Config;
pub use error::CoreError;
pub use role::{MenuItem, Role};
pub use session::{AuthTokens, Session, SessionEvent, UserProfile};

/// Shared application context passed into command handlers.
///
/// The session travels with the context instead of living in ambient storage,
/// so every handler sees exactly the credentials it was given.
#[derive(Debug, Clone)]
pub struct Context {
    pub config: Config,
    pub session: Session,
}

impl Context {
    /// Create a new application context with an anonymous session.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            session: Session::anonymous(),
        }
    }

    /// Replace the session, e.g. after a login round trip.
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }
}
