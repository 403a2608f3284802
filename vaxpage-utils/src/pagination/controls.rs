//! Renderer-agnostic control strip for a paginated list.

use serde::{Deserialize, Serialize};

use super::error::PaginationError;
use super::window::WindowConfig;

/// One element of the pagination control strip, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ControlItem {
    Previous { target: usize, disabled: bool },
    Page { number: usize, current: bool },
    Ellipsis,
    /// "Page X of Y", shown instead of page numbers when those are hidden.
    Label { page: usize, total_pages: usize },
    Next { target: usize, disabled: bool },
}

/// Options for [`build_controls`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlsOptions {
    pub window: WindowConfig,
    pub show_page_numbers: bool,
}

impl Default for ControlsOptions {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            show_page_numbers: true,
        }
    }
}

impl ControlsOptions {
    /// Build options from a raw window width.
    pub fn new(max_visible_pages: usize, show_page_numbers: bool) -> Result<Self, PaginationError> {
        Ok(Self {
            window: WindowConfig::new(max_visible_pages)?,
            show_page_numbers,
        })
    }
}

/// Build the previous / pages / next strip for `current_page`.
///
/// Lists with a single page (or none) get no controls at all.
pub fn build_controls(
    current_page: usize,
    total_pages: usize,
    options: &ControlsOptions,
) -> Vec<ControlItem> {
    if total_pages <= 1 {
        return vec![];
    }

    let current_page = current_page.clamp(1, total_pages);

    let prev_page = if current_page > 1 {
        current_page - 1
    } else {
        current_page
    };

    let next_page = if current_page < total_pages {
        current_page + 1
    } else {
        current_page
    };

    let mut items = vec![ControlItem::Previous {
        target: prev_page,
        disabled: current_page <= 1,
    }];

    if options.show_page_numbers {
        let window = options.window.window(current_page, total_pages);
        let page_item = |number| ControlItem::Page {
            number,
            current: number == current_page,
        };

        if window.show_first_page_shortcut {
            items.push(page_item(1));
            if window.show_leading_ellipsis {
                items.push(ControlItem::Ellipsis);
            }
        }

        items.extend(window.pages.iter().copied().map(page_item));

        if window.show_last_page_shortcut {
            if window.show_trailing_ellipsis {
                items.push(ControlItem::Ellipsis);
            }
            items.push(page_item(total_pages));
        }
    } else {
        items.push(ControlItem::Label {
            page: current_page,
            total_pages,
        });
    }

    items.push(ControlItem::Next {
        target: next_page,
        disabled: current_page >= total_pages,
    });

    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(number: usize) -> ControlItem {
        ControlItem::Page {
            number,
            current: false,
        }
    }

    fn current(number: usize) -> ControlItem {
        ControlItem::Page {
            number,
            current: true,
        }
    }

    #[test]
    fn no_controls_for_single_page() {
        let options = ControlsOptions::default();
        assert!(build_controls(1, 1, &options).is_empty());
        assert!(build_controls(1, 0, &options).is_empty());
    }

    #[test]
    fn middle_page_has_both_shortcuts_and_ellipses() {
        let got = build_controls(10, 20, &ControlsOptions::default());
        let want = vec![
            ControlItem::Previous {
                target: 9,
                disabled: false,
            },
            page(1),
            ControlItem::Ellipsis,
            page(8),
            page(9),
            current(10),
            page(11),
            page(12),
            ControlItem::Ellipsis,
            page(20),
            ControlItem::Next {
                target: 11,
                disabled: false,
            },
        ];
        assert_eq!(got, want);
    }

    #[test]
    fn first_page_disables_previous() {
        let got = build_controls(1, 8, &ControlsOptions::default());
        let want = vec![
            ControlItem::Previous {
                target: 1,
                disabled: true,
            },
            current(1),
            page(2),
            page(3),
            page(4),
            page(5),
            ControlItem::Ellipsis,
            page(8),
            ControlItem::Next {
                target: 2,
                disabled: false,
            },
        ];
        assert_eq!(got, want);
    }

    #[test]
    fn first_shortcut_without_ellipsis_when_window_starts_at_two() {
        let got = build_controls(4, 8, &ControlsOptions::default());
        let want = vec![
            ControlItem::Previous {
                target: 3,
                disabled: false,
            },
            page(1),
            page(2),
            page(3),
            current(4),
            page(5),
            page(6),
            ControlItem::Ellipsis,
            page(8),
            ControlItem::Next {
                target: 5,
                disabled: false,
            },
        ];
        assert_eq!(got, want);
    }

    #[test]
    fn single_hidden_page_still_gets_ellipsis() {
        // window [3..=7] hides only page 2
        let got = build_controls(6, 7, &ControlsOptions::default());
        assert_eq!(got[1], page(1));
        assert_eq!(got[2], ControlItem::Ellipsis);
        assert_eq!(got[3], page(3));
    }

    #[test]
    fn last_page_disables_next() {
        let got = build_controls(3, 3, &ControlsOptions::default());
        assert_eq!(
            got.last(),
            Some(&ControlItem::Next {
                target: 3,
                disabled: true
            })
        );
        assert!(!got.contains(&ControlItem::Ellipsis));
    }

    #[test]
    fn hidden_page_numbers_use_label() {
        let options = ControlsOptions::new(5, false).unwrap();
        let got = build_controls(4, 9, &options);
        assert_eq!(
            got,
            vec![
                ControlItem::Previous {
                    target: 3,
                    disabled: false
                },
                ControlItem::Label {
                    page: 4,
                    total_pages: 9
                },
                ControlItem::Next {
                    target: 5,
                    disabled: false
                },
            ]
        );
    }

    #[test]
    fn page_one_never_repeats() {
        let options = ControlsOptions::new(3, true).unwrap();
        for total in 2..30 {
            for current_page in 1..=total {
                let items = build_controls(current_page, total, &options);
                let ones = items.iter().filter(|item| **item == page(1) || **item == current(1));
                assert_eq!(ones.count(), 1, "page {current_page} of {total}");
            }
        }
    }

    #[test]
    fn zero_width_options_are_rejected() {
        assert!(ControlsOptions::new(0, true).is_err());
    }
}
