pub mod dashboard;
pub mod lists;
pub mod utility;

use tracing::debug;

use vaxpage_core::Context;

// Global command meta data
pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub category: &'static str,
    pub usage: &'static str,
}

pub const COMMANDS: &[CommandMeta] = &[
    utility::help::META,
    lists::window::META,
    lists::controls::META,
    lists::pages::META,
    lists::nav::META,
    dashboard::menu::META,
    // Add new commands here
];

/// Look up command metadata by name.
pub fn find_command(name: &str) -> Option<&'static CommandMeta> {
    COMMANDS.iter().find(|meta| meta.name == name)
}

/// Usage reply shared by handlers when arguments are missing or malformed.
pub(crate) fn usage_reply(meta: &CommandMeta) -> String {
    format!("Usage: `{}`", meta.usage)
}

/// Parse a command line and run the matching handler.
///
/// Returns `Ok(None)` for empty input or unknown commands, `Ok(Some(reply))`
/// otherwise. Malformed arguments produce a usage reply rather than an error.
pub fn handle_command(ctx: &Context, content: &str) -> anyhow::Result<Option<String>> {
    let content = content.trim();
    if content.is_empty() {
        return Ok(None);
    }

    let mut parts = content.split_whitespace();
    let cmd = parts.next().unwrap_or("").to_ascii_lowercase();
    let args: Vec<&str> = parts.collect();

    debug!(command = %cmd, args = args.len(), "dispatching command");

    let reply = match cmd.as_str() {
        "help" => utility::help::run(args.first().copied()),
        "window" => lists::window::run(ctx, &args)?,
        "controls" => lists::controls::run(ctx, &args)?,
        "pages" => lists::pages::run(ctx, &args)?,
        "nav" => lists::nav::run(ctx, &args)?,
        "menu" => dashboard::menu::run(ctx, &args)?,
        // Add new commands here
        _ => return Ok(None),
    };

    Ok(Some(reply))
}
