use tracing::info;

use crate::{CommandMeta, usage_reply};
use vaxpage_core::Context;
use vaxpage_utils::pagination::token::validate_control_id;
use vaxpage_utils::pagination::{NavAction, PageNavigator, resolve_jump_target};
use vaxpage_utils::parse::{parse_count, parse_positive};

pub const META: CommandMeta = CommandMeta {
    name: "nav",
    desc: "Apply previous, next or a page click and report the page change.",
    category: "lists",
    usage: "nav <page> <total_pages> <prev|next|N|control-id>",
};

/// Resolve an action argument, accepting control ids for the configured list.
///
/// A control id's target page is bounded by both the live page count and
/// the count the control was built with.
fn parse_action(ctx: &Context, raw: &str, total: usize) -> Option<NavAction> {
    if !raw.starts_with("pg:") {
        return NavAction::parse(raw);
    }

    let token = validate_control_id(raw, &ctx.config.list).ok()?;
    let target = resolve_jump_target(token.page, total, token.total_pages);
    Some(NavAction::Page(target))
}

pub fn run(ctx: &Context, args: &[&str]) -> anyhow::Result<String> {
    let (Some(page), Some(total)) = (
        args.first().and_then(|raw| parse_positive(raw)),
        args.get(1).and_then(|raw| parse_count(raw)),
    ) else {
        return Ok(usage_reply(&META));
    };

    let Some(action) = args.get(2).and_then(|raw| parse_action(ctx, raw, total)) else {
        return Ok(usage_reply(&META));
    };

    let mut navigator = PageNavigator::new(page, total);
    let mut notified = None;
    navigator.dispatch(action, |change| {
        info!(from = change.from, to = change.to, "page changed");
        notified = Some(change);
    });

    match notified {
        Some(change) => Ok(serde_json::to_string(&change)?),
        None => Ok(format!(
            "No page change (page {} of {}).",
            navigator.current_page(),
            total
        )),
    }
}

#[cfg(test)]
mod tests {
    use vaxpage_core::Config;

    use super::*;

    fn ctx() -> Context {
        Context::new(Config::default())
    }

    #[test]
    fn reports_change_as_json() {
        assert_eq!(
            run(&ctx(), &["4", "9", "next"]).unwrap(),
            r#"{"from":4,"to":5}"#
        );
        assert_eq!(
            run(&ctx(), &["4", "9", "9"]).unwrap(),
            r#"{"from":4,"to":9}"#
        );
    }

    #[test]
    fn no_op_actions_are_reported() {
        assert_eq!(
            run(&ctx(), &["1", "9", "prev"]).unwrap(),
            "No page change (page 1 of 9)."
        );
        assert_eq!(
            run(&ctx(), &["3", "9", "3"]).unwrap(),
            "No page change (page 3 of 9)."
        );
    }

    #[test]
    fn accepts_control_ids_for_the_configured_list() {
        assert_eq!(
            run(&ctx(), &["2", "9", "pg:campaigns:page:7:9"]).unwrap(),
            r#"{"from":2,"to":7}"#
        );
        // the list shrank to 5 pages since the control was rendered
        assert_eq!(
            run(&ctx(), &["2", "5", "pg:campaigns:next:7:9"]).unwrap(),
            r#"{"from":2,"to":5}"#
        );
        assert!(
            run(&ctx(), &["2", "9", "pg:bookings:page:7:9"])
                .unwrap()
                .starts_with("Usage:")
        );
    }

    #[test]
    fn missing_action_replies_with_usage() {
        assert!(run(&ctx(), &["1", "9"]).unwrap().starts_with("Usage:"));
        assert!(run(&ctx(), &["1", "9", "jump"]).unwrap().starts_with("Usage:"));
    }
}
