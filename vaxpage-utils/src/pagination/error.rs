use thiserror::Error;

/// Errors raised by the pagination toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// The window must show at least one page.
    #[error("invalid configuration: max_visible_pages must be at least 1, got {max_visible_pages}")]
    InvalidConfiguration { max_visible_pages: usize },
}
