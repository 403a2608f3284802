use crate::{CommandMeta, usage_reply};
use vaxpage_core::Context;
use vaxpage_utils::pagination::token::control_id_for;
use vaxpage_utils::pagination::{build_controls, render_controls};
use vaxpage_utils::parse::{parse_count, parse_positive};

pub const META: CommandMeta = CommandMeta {
    name: "controls",
    desc: "Render the pagination strip for a page.",
    category: "lists",
    usage: "controls <page> <total_pages> [ids]",
};

/// Render the control strip; with `ids`, also list each activatable control id.
pub fn run(ctx: &Context, args: &[&str]) -> anyhow::Result<String> {
    let (Some(page), Some(total)) = (
        args.first().and_then(|raw| parse_positive(raw)),
        args.get(1).and_then(|raw| parse_count(raw)),
    ) else {
        return Ok(usage_reply(&META));
    };

    let with_ids = match args.get(2) {
        Some(flag) if flag.eq_ignore_ascii_case("ids") => true,
        Some(_) => return Ok(usage_reply(&META)),
        None => false,
    };

    let items = build_controls(page, total, &ctx.config.controls_options());
    if items.is_empty() {
        return Ok("Nothing to paginate.".to_owned());
    }

    let mut out = render_controls(&items);
    if with_ids {
        for id in items
            .iter()
            .filter_map(|item| control_id_for(&ctx.config.list, item, total))
        {
            out.push('\n');
            out.push_str(&id);
        }
    }

    Ok(out)
}
