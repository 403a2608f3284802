use thiserror::Error;
use vaxpage_utils::pagination::PaginationError;

/// Errors raised by the shared context types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("unknown role `{0}`")]
    UnknownRole(String),

    #[error("invalid session transition: {event} while {state}")]
    InvalidTransition {
        state: &'static str,
        event: &'static str,
    },

    #[error("invalid value `{value}` for {key}")]
    Config { key: &'static str, value: String },

    #[error(transparent)]
    Pagination(#[from] PaginationError),
}
