use std::env;

use anyhow::Context as _;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use vaxpage_commands::{COMMANDS, handle_command};
use vaxpage_core::{Config, Context, Session};

fn main() -> anyhow::Result<()> {
    // Load the .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so command output stays pipeable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env().context("failed to load configuration")?;
    info!(
        max_visible_pages = config.window.max_visible_pages(),
        page_size = config.page_size,
        list = %config.list,
        "vaxpage configured"
    );
    let session = Session::from_env().context("failed to restore session")?;
    info!(authenticated = session.is_authenticated(), role = ?session.role(), "session restored");
    let ctx = Context::new(config).with_session(session);

    let line = env::args().skip(1).collect::<Vec<_>>().join(" ");
    if line.trim().is_empty() {
        print_command_list();
        return Ok(());
    }

    // Handler errors propagate out of main, which reports them once
    match handle_command(&ctx, &line)? {
        Some(reply) => println!("{reply}"),
        None => {
            error!(input = %line, "unknown command");
            print_command_list();
            std::process::exit(2);
        }
    }

    Ok(()) // Return Success, shutdown cleanly
}

fn print_command_list() {
    println!("Commands:");
    for meta in COMMANDS {
        println!("  {:<48} {}", meta.usage, meta.desc);
    }
}
