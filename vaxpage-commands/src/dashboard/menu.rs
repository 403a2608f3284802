use crate::{CommandMeta, usage_reply};
use vaxpage_core::{Context, Role};

pub const META: CommandMeta = CommandMeta {
    name: "menu",
    desc: "List the dashboard menu for a role or the signed-in user.",
    category: "dashboard",
    usage: "menu [patient|doctor|staff]",
};

/// Without an argument the role comes from the context's session.
pub fn run(ctx: &Context, args: &[&str]) -> anyhow::Result<String> {
    let role = match args.first() {
        Some(raw) => match raw.parse::<Role>() {
            Ok(role) => role,
            Err(_) => return Ok(usage_reply(&META)),
        },
        None => match ctx.session.role() {
            Some(role) => role,
            None => return Ok("Sign in to see the dashboard menu.".to_owned()),
        },
    };

    let lines: Vec<String> = role
        .menu()
        .iter()
        .map(|item| format!("- {} ({}): {}", item.label, item.path, item.description))
        .collect();

    Ok(format!("{role} menu\n{}", lines.join("\n")))
}
