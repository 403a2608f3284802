//! Stable facade for pagination helpers used by list screens and commands.

/// Default number of page buttons shown around the current page.
pub const DEFAULT_MAX_VISIBLE_PAGES: usize = 5;

mod controls;
mod error;
pub mod navigator;
mod page;
pub mod token;
mod view;
mod window;

pub use controls::{ControlItem, ControlsOptions, build_controls};
pub use error::PaginationError;
pub use navigator::{NavAction, PageChange, PageNavigator};
pub use page::{
    clamp_page, page_slice, parse_one_based_page, resolve_jump_target, total_pages,
    total_pages_from_response,
};
pub use token::{ControlIdError, ControlToken};
pub use view::{page_label, render_controls};
pub use window::{PageWindow, WindowConfig, compute_window};
