//! Page-window calculation for numbered pagination controls.
//!
//! The window keeps the current page centered where possible. Near either
//! boundary it shifts instead of shrinking, so the control keeps a constant
//! width while the user pages through a list.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::DEFAULT_MAX_VISIBLE_PAGES;
use super::error::PaginationError;

/// Validated window sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowConfig {
    max_visible_pages: usize,
}

impl WindowConfig {
    /// Create a window configuration, rejecting a zero-width window.
    pub fn new(max_visible_pages: usize) -> Result<Self, PaginationError> {
        if max_visible_pages < 1 {
            return Err(PaginationError::InvalidConfiguration { max_visible_pages });
        }
        Ok(Self { max_visible_pages })
    }

    /// Maximum number of numbered page controls.
    pub fn max_visible_pages(&self) -> usize {
        self.max_visible_pages
    }

    /// Compute the window for `current_page` out of `total_pages`.
    pub fn window(&self, current_page: usize, total_pages: usize) -> PageWindow {
        window_for(current_page, total_pages, self.max_visible_pages)
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            max_visible_pages: DEFAULT_MAX_VISIBLE_PAGES,
        }
    }
}

/// Page numbers to render plus the edge indicators around them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    /// Ascending, unique page numbers inside `[1, total_pages]`.
    pub pages: Vec<usize>,
    /// At least one page is hidden between page 1 and the window start.
    pub show_leading_ellipsis: bool,
    /// At least one page is hidden between the window end and the last page.
    pub show_trailing_ellipsis: bool,
    /// Page 1 is outside the window.
    pub show_first_page_shortcut: bool,
    /// The last page is outside the window.
    pub show_last_page_shortcut: bool,
}

impl PageWindow {
    /// Whether `page` is rendered as part of the window.
    pub fn contains(&self, page: usize) -> bool {
        self.pages.binary_search(&page).is_ok()
    }

    /// First page in the window, if any.
    pub fn start(&self) -> Option<usize> {
        self.pages.first().copied()
    }

    /// Last page in the window, if any.
    pub fn end(&self) -> Option<usize> {
        self.pages.last().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// Compute which page numbers to render around `current_page`.
///
/// Returns an empty window when `total_pages` is zero. A `current_page`
/// outside `[1, total_pages]` is clamped to the nearest bound, since it shows
/// up transiently after the last page of a list is emptied.
///
/// # Errors
///
/// [`PaginationError::InvalidConfiguration`] when `max_visible_pages` is zero.
pub fn compute_window(
    current_page: usize,
    total_pages: usize,
    max_visible_pages: usize,
) -> Result<PageWindow, PaginationError> {
    let config = WindowConfig::new(max_visible_pages)?;
    Ok(config.window(current_page, total_pages))
}

fn window_for(current_page: usize, total_pages: usize, max_visible_pages: usize) -> PageWindow {
    if total_pages == 0 {
        return PageWindow::default();
    }

    let current = current_page.clamp(1, total_pages);
    if current != current_page {
        debug!(
            requested = current_page,
            clamped = current,
            total_pages,
            "current page outside range; clamped"
        );
    }

    let half = max_visible_pages / 2;
    let mut start = current.saturating_sub(half).max(1);
    let end = total_pages.min(start.saturating_add(max_visible_pages - 1));

    // `total_pages >= 1` here, so none of these subtractions wrap.
    if end - start < max_visible_pages - 1 {
        start = end.saturating_sub(max_visible_pages - 1).max(1);
    }

    PageWindow {
        pages: (start..=end).collect(),
        show_leading_ellipsis: start > 2,
        show_trailing_ellipsis: end < total_pages - 1,
        show_first_page_shortcut: start > 1,
        show_last_page_shortcut: end < total_pages,
    }
}
