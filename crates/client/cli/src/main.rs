//! Item state inspector.
//!
//! Loads the item catalog and rules, optionally a save file, and prints the
//! shared stash and every item lying on the map.
mod config;

use anyhow::{Context, Result};
use config::CliConfig;
use item_content::ContentFactory;
use item_core::{ItemNumber, ItemOracle};
use runtime::{SaveFile, Session};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    setup_logging();

    let config = CliConfig::from_env();
    tracing::info!(data_dir = %config.data_dir.display(), "loading item content");

    let factory = ContentFactory::new(&config.data_dir);
    let registry = factory
        .build_registry()
        .with_context(|| format!("loading catalog from {}", config.data_dir.display()))?;
    let rules = factory.load_rules()?;
    let mut session = Session::new(registry, rules);

    if let Some(path) = &config.save_file {
        let file = SaveFile::new(path);
        if session.load(&file)? {
            session.restore_ground()?;
        } else {
            tracing::warn!(path = %path.display(), "save file not found; showing an empty world");
        }
    }

    print_summary(&mut session)
}

/// Logs go to stderr so the summary on stdout stays clean.
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_summary(session: &mut Session) -> Result<()> {
    println!("Catalog: {} item types", session.registry().all_definitions().len());

    let mut ctx = session.context();
    let items = ctx.items();

    let storage = ctx.storage();
    let counts = storage.list_items(None)?;
    let categories = storage.list_categories()?;

    println!("\nStorage ({} items)", counts.values().sum::<u32>());
    for (number, count) in &counts {
        println!(
            "  {:>6}  {:<24} x{count}",
            number.to_string(),
            item_name(items, *number)
        );
    }
    println!("\nBy category");
    for (category, count) in &categories {
        println!("  {:<16} x{count}", category.as_str());
    }

    let ground = ctx.ground();
    let tiles = ground.occupied_tiles()?;
    println!("\nGround ({} tiles)", tiles.len());
    for position in tiles {
        let names: Vec<String> = ground
            .list(position)?
            .into_iter()
            .map(|number| item_name(items, number))
            .collect();
        println!("  {:<10} {}", position.to_string(), names.join(", "));
    }
    Ok(())
}

fn item_name(items: &dyn ItemOracle, number: ItemNumber) -> String {
    items
        .get(number)
        .map(|item| item.name.clone())
        .unwrap_or_else(|_| format!("<unknown {number}>"))
}
