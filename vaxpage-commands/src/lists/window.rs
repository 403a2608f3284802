use anyhow::Context as _;
use tracing::info;

use crate::{CommandMeta, usage_reply};
use vaxpage_core::Context;
use vaxpage_utils::pagination::compute_window;
use vaxpage_utils::parse::{parse_count, parse_positive};

pub const META: CommandMeta = CommandMeta {
    name: "window",
    desc: "Show the page numbers rendered around a page, as JSON.",
    category: "lists",
    usage: "window <page> <total_pages> [max_visible_pages]",
};

/// Compute the page window for `<page>` out of `<total_pages>`.
///
/// The window width defaults to the configured one. A zero width is a
/// configuration error and is returned as an error, not a usage reply.
pub fn run(ctx: &Context, args: &[&str]) -> anyhow::Result<String> {
    let (Some(page), Some(total)) = (
        args.first().and_then(|raw| parse_positive(raw)),
        args.get(1).and_then(|raw| parse_count(raw)),
    ) else {
        return Ok(usage_reply(&META));
    };

    let max_visible_pages = match args.get(2) {
        Some(raw) => match parse_count(raw) {
            Some(value) => value,
            None => return Ok(usage_reply(&META)),
        },
        None => ctx.config.window.max_visible_pages(),
    };

    let window = compute_window(page, total, max_visible_pages)
        .with_context(|| format!("computing window for page {page} of {total}"))?;

    info!(page, total, pages = window.pages.len(), "page window computed");

    Ok(serde_json::to_string(&window)?)
}

#[cfg(test)]
mod tests {
    use vaxpage_core::Config;
    use vaxpage_utils::pagination::PaginationError;

    use super::*;

    fn ctx() -> Context {
        Context::new(Config::default())
    }

    #[test]
    fn prints_window_json() {
        let reply = run(&ctx(), &["10", "20"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&reply).unwrap();
        assert_eq!(value["pages"], serde_json::json!([8, 9, 10, 11, 12]));
        assert_eq!(value["show_leading_ellipsis"], serde_json::json!(true));
    }

    #[test]
    fn explicit_width_overrides_config() {
        let reply = run(&ctx(), &["1", "20", "3"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&reply).unwrap();
        assert_eq!(value["pages"], serde_json::json!([1, 2, 3]));
    }

    #[test]
    fn zero_width_is_an_error() {
        let err = run(&ctx(), &["1", "20", "0"]).unwrap_err();
        assert_eq!(
            err.downcast_ref::<PaginationError>(),
            Some(&PaginationError::InvalidConfiguration {
                max_visible_pages: 0
            })
        );
    }

    #[test]
    fn largest_page_count_is_accepted() {
        let last = usize::MAX.to_string();
        let reply = run(&ctx(), &[&last, &last]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&reply).unwrap();
        assert_eq!(value["pages"].as_array().map(Vec::len), Some(5));
        assert_eq!(value["show_trailing_ellipsis"], serde_json::json!(false));
        assert_eq!(value["show_last_page_shortcut"], serde_json::json!(false));
    }

    #[test]
    fn bad_arguments_reply_with_usage() {
        assert!(run(&ctx(), &[]).unwrap().starts_with("Usage:"));
        assert!(run(&ctx(), &["0", "5"]).unwrap().starts_with("Usage:"));
        assert!(run(&ctx(), &["1", "x"]).unwrap().starts_with("Usage:"));
        assert!(run(&ctx(), &["1", "5", "-2"]).unwrap().starts_with("Usage:"));
    }
}
