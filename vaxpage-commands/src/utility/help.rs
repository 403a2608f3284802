use crate::{COMMANDS, CommandMeta};
use vaxpage_utils::pagination::{page_label, page_slice, parse_one_based_page, total_pages};

pub const META: CommandMeta = CommandMeta {
    name: "help",
    desc: "Lists out all available commands.",
    category: "utility",
    usage: "help [page|category]",
};

const HELP_COMMANDS_PER_PAGE: usize = 20;

/// Render the command catalog, optionally filtered by category or page.
pub fn run(arg1: Option<&str>) -> String {
    let parsed_page = arg1.and_then(|raw| parse_one_based_page(Some(raw)));
    let category = match (arg1, parsed_page) {
        (Some(raw), None) => Some(raw),
        _ => None,
    };

    let mut categories: Vec<&str> = COMMANDS.iter().map(|c| c.category).collect();
    categories.sort_unstable();
    categories.dedup();

    if let Some(wanted_category) = category
        && !categories.contains(&wanted_category)
    {
        return format!(
            "Unknown category `{wanted_category}`. Available: {}.",
            categories.join(", ")
        );
    }

    let commands = sorted_commands(category);
    let requested_page = parsed_page.unwrap_or(1);
    let total = total_pages(commands.len(), HELP_COMMANDS_PER_PAGE);

    if requested_page > total {
        return format!(
            "Page {requested_page} does not exist. Available pages: 1-{}.",
            total.max(1)
        );
    }

    let range = page_slice(commands.len(), HELP_COMMANDS_PER_PAGE, requested_page);
    let mut out = grouped_help_description(&commands[range]);
    if total > 1 {
        out.push_str("\n\n");
        out.push_str(&page_label(requested_page, total));
    }
    out
}

fn sorted_commands(category: Option<&str>) -> Vec<&'static CommandMeta> {
    let mut commands: Vec<&'static CommandMeta> = COMMANDS
        .iter()
        .filter(|meta| category.is_none_or(|wanted| meta.category == wanted))
        .collect();
    commands.sort_by(|a, b| a.category.cmp(b.category).then(a.name.cmp(b.name)));
    commands
}

fn grouped_help_description(commands: &[&CommandMeta]) -> String {
    let mut out = String::new();
    let mut current_category = "";

    for meta in commands {
        if meta.category != current_category {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&format!("[{}]\n", meta.category));
            current_category = meta.category;
        }
        out.push_str(&format!("  {:<10} {}\n", meta.name, meta.desc));
    }

    out.trim_end().to_owned()
}
