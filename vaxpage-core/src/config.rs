//! Runtime configuration read from environment variables.

use tracing::debug;
use vaxpage_utils::pagination::{ControlsOptions, WindowConfig};
use vaxpage_utils::parse::{parse_flag, parse_positive};

use crate::error::CoreError;

pub const ENV_MAX_VISIBLE_PAGES: &str = "VAXPAGE_MAX_VISIBLE_PAGES";
pub const ENV_PAGE_SIZE: &str = "VAXPAGE_PAGE_SIZE";
pub const ENV_SHOW_PAGE_NUMBERS: &str = "VAXPAGE_SHOW_PAGE_NUMBERS";
pub const ENV_LIST: &str = "VAXPAGE_LIST";

/// Default number of records per page for list screens.
pub const DEFAULT_PAGE_SIZE: usize = 10;
/// Default list name used in control ids.
pub const DEFAULT_LIST: &str = "campaigns";

/// Pagination settings shared by every list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub window: WindowConfig,
    pub page_size: usize,
    pub show_page_numbers: bool,
    pub list: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            page_size: DEFAULT_PAGE_SIZE,
            show_page_numbers: true,
            list: DEFAULT_LIST.to_owned(),
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Callers are expected to have loaded `.env` beforehand.
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// Unset keys fall back to defaults; set but invalid keys are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CoreError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_MAX_VISIBLE_PAGES) {
            let max_visible_pages = raw.trim().parse::<usize>().map_err(|_| CoreError::Config {
                key: ENV_MAX_VISIBLE_PAGES,
                value: raw.clone(),
            })?;
            config.window = WindowConfig::new(max_visible_pages)?;
        }

        if let Some(raw) = lookup(ENV_PAGE_SIZE) {
            config.page_size = parse_positive(&raw).ok_or(CoreError::Config {
                key: ENV_PAGE_SIZE,
                value: raw.clone(),
            })?;
        }

        if let Some(raw) = lookup(ENV_SHOW_PAGE_NUMBERS) {
            config.show_page_numbers = parse_flag(&raw).ok_or(CoreError::Config {
                key: ENV_SHOW_PAGE_NUMBERS,
                value: raw.clone(),
            })?;
        }

        if let Some(raw) = lookup(ENV_LIST) {
            let list = raw.trim();
            if list.is_empty() || list.contains(':') {
                return Err(CoreError::Config {
                    key: ENV_LIST,
                    value: raw.clone(),
                });
            }
            config.list = list.to_owned();
        }

        debug!(
            max_visible_pages = config.window.max_visible_pages(),
            page_size = config.page_size,
            show_page_numbers = config.show_page_numbers,
            list = %config.list,
            "configuration loaded"
        );

        Ok(config)
    }

    /// Control strip options derived from this configuration.
    pub fn controls_options(&self) -> ControlsOptions {
        ControlsOptions {
            window: self.window,
            show_page_numbers: self.show_page_numbers,
        }
    }
}
