use crate::{CommandMeta, usage_reply};
use vaxpage_core::Context;
use vaxpage_utils::pagination::total_pages;
use vaxpage_utils::parse::{parse_count, parse_positive};

pub const META: CommandMeta = CommandMeta {
    name: "pages",
    desc: "Derive the page count from a record count.",
    category: "lists",
    usage: "pages <record_count> [page_size]",
};

pub fn run(ctx: &Context, args: &[&str]) -> anyhow::Result<String> {
    let Some(record_count) = args.first().and_then(|raw| parse_count(raw)) else {
        return Ok(usage_reply(&META));
    };

    let page_size = match args.get(1) {
        Some(raw) => match parse_positive(raw) {
            Some(value) => value,
            None => return Ok(usage_reply(&META)),
        },
        None => ctx.config.page_size,
    };

    let total = total_pages(record_count, page_size);
    let noun = if total == 1 { "page" } else { "pages" };

    Ok(format!(
        "{total} {noun} ({record_count} records, {page_size} per page)"
    ))
}
