//! Previous / next / page-click handling with page-change notifications.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::page::clamp_page;

/// A user activation on the control strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavAction {
    Previous,
    Next,
    Page(usize),
}

impl NavAction {
    /// Parse `prev`, `next` or a page number.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "prev" | "previous" => Some(Self::Previous),
            "next" => Some(Self::Next),
            other => other.parse::<usize>().ok().map(Self::Page),
        }
    }
}

/// Notification payload sent to the page-change callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageChange {
    pub from: usize,
    pub to: usize,
}

/// Tracks the current page of one list and turns activations into changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageNavigator {
    current_page: usize,
    total_pages: usize,
}

impl PageNavigator {
    /// Create a navigator; `current_page` is clamped into range.
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        Self {
            current_page: clamp_page(current_page, total_pages),
            total_pages,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Resolve `action` to a page change without moving.
    ///
    /// Returns `None` when the action is a no-op: previous on the first page,
    /// next on the last page, a click on the current page, or a page number
    /// outside the list.
    pub fn apply(&self, action: NavAction) -> Option<PageChange> {
        let to = match action {
            NavAction::Previous => self.has_previous().then(|| self.current_page - 1)?,
            NavAction::Next => self.has_next().then(|| self.current_page + 1)?,
            NavAction::Page(page) => {
                if page == self.current_page || page == 0 || page > self.total_pages {
                    return None;
                }
                page
            }
        };

        Some(PageChange {
            from: self.current_page,
            to,
        })
    }

    /// Apply `action`, notify `on_page_change` and move to the new page.
    ///
    /// The callback is not invoked for no-op actions.
    pub fn dispatch<F>(&mut self, action: NavAction, mut on_page_change: F) -> Option<PageChange>
    where
        F: FnMut(PageChange),
    {
        let Some(change) = self.apply(action) else {
            debug!(?action, page = self.current_page, "navigation ignored");
            return None;
        };

        on_page_change(change);
        self.current_page = change.to;
        Some(change)
    }

    /// Adopt a new page count, e.g. after a list response reported fewer records.
    pub fn set_total_pages(&mut self, total_pages: usize) {
        self.total_pages = total_pages;
        self.current_page = clamp_page(self.current_page, total_pages);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn previous_and_next_move_by_one() {
        let nav = PageNavigator::new(5, 10);
        assert_eq!(nav.apply(NavAction::Previous), Some(PageChange { from: 5, to: 4 }));
        assert_eq!(nav.apply(NavAction::Next), Some(PageChange { from: 5, to: 6 }));
    }

    #[test]
    fn edges_do_not_emit() {
        assert_eq!(PageNavigator::new(1, 10).apply(NavAction::Previous), None);
        assert_eq!(PageNavigator::new(10, 10).apply(NavAction::Next), None);
    }

    #[test]
    fn clicking_current_or_invalid_page_does_not_emit() {
        let nav = PageNavigator::new(3, 10);
        assert_eq!(nav.apply(NavAction::Page(3)), None);
        assert_eq!(nav.apply(NavAction::Page(0)), None);
        assert_eq!(nav.apply(NavAction::Page(11)), None);
        assert_eq!(nav.apply(NavAction::Page(10)), Some(PageChange { from: 3, to: 10 }));
    }

    #[test]
    fn dispatch_notifies_and_moves() {
        let mut nav = PageNavigator::new(1, 3);
        let mut seen = Vec::new();

        nav.dispatch(NavAction::Next, |change| seen.push(change.to));
        nav.dispatch(NavAction::Next, |change| seen.push(change.to));
        nav.dispatch(NavAction::Next, |change| seen.push(change.to));
        nav.dispatch(NavAction::Page(1), |change| seen.push(change.to));

        assert_eq!(seen, vec![2, 3, 1]);
        assert_eq!(nav.current_page(), 1);
    }

    #[test]
    fn shrinking_total_clamps_current() {
        let mut nav = PageNavigator::new(7, 7);
        nav.set_total_pages(6);
        assert_eq!(nav.current_page(), 6);
        assert!(!nav.has_next());
    }

    #[test]
    fn empty_list_has_nowhere_to_go() {
        let nav = PageNavigator::new(1, 0);
        assert!(!nav.has_previous());
        assert!(!nav.has_next());
        assert_eq!(nav.apply(NavAction::Page(1)), None);
    }

    #[test]
    fn parse_actions() {
        assert_eq!(NavAction::parse("prev"), Some(NavAction::Previous));
        assert_eq!(NavAction::parse("NEXT"), Some(NavAction::Next));
        assert_eq!(NavAction::parse("4"), Some(NavAction::Page(4)));
        assert_eq!(NavAction::parse("last"), None);
    }
}
