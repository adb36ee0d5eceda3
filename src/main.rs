use anyhow::{anyhow, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use navmenu::{ItemId, JsonSite, Menu, MenuIdent, RenderOptions};

/// Render a navigation menu from a JSON site document
#[derive(Parser, Debug)]
#[command(name = "navmenu")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Site document with menus, settings and the viewed object
    input: PathBuf,

    /// Menu id, slug or name (defaults to the first menu)
    #[arg(short, long)]
    menu: Option<String>,

    /// JSON file with render options
    #[arg(short, long)]
    options: Option<PathBuf>,

    /// Re-target the current item to this menu item id after resolution
    #[arg(long)]
    current: Option<ItemId>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let site = JsonSite::from_file(&cli.input)?;

    let ident = match &cli.menu {
        Some(name) => MenuIdent::from(name.as_str()),
        None => site
            .default_menu()
            .ok_or_else(|| anyhow!("Site document {} has no menus", cli.input.display()))?,
    };

    let options = match &cli.options {
        Some(path) => RenderOptions::from_file(path)?,
        None => RenderOptions::default(),
    };

    let mut menu =
        Menu::from_site(&site, &ident).ok_or_else(|| anyhow!("Menu '{}' not found", ident))?;

    if let Some(id) = cli.current {
        menu.context(id);
    }

    info!(menu = %ident, items = menu.items().len(), "rendering");
    println!("{}", menu.render(&options));

    Ok(())
}
