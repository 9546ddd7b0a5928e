use clap::Parser;

use lingo_srs::app::AppContext;
use lingo_srs::cli::{Cli, Commands, commands};
use lingo_srs::config::Config;
use lingo_srs::logging::init_tracing;
use lingo_srs::models::ItemKey;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|e| {
            eprintln!("Using default configuration: {}", e);
            Config::default()
        }),
    };
    init_tracing(&config.log_level);

    let ctx = AppContext::new(config, cli.db.clone())?;

    match cli.command {
        Commands::Init => commands::init(&ctx)?,
        Commands::Due { count } => commands::due(&ctx, count)?,
        Commands::Review { no_shuffle } => commands::review(&ctx, !no_shuffle)?,
        Commands::Grade {
            item_type,
            id,
            rating,
        } => commands::grade(&ctx, ItemKey::new(id, item_type), rating)?,
        Commands::Add { item_type, id } => commands::add(&ctx, ItemKey::new(id, item_type))?,
        Commands::Remove { item_type, id } => {
            commands::remove(&ctx, ItemKey::new(id, item_type))?
        }
        Commands::List {
            item_type,
            reviewed,
        } => commands::list(&ctx, item_type, reviewed)?,
        Commands::Stats => commands::stats(&ctx)?,
        Commands::NextDay => commands::next_day(&ctx)?,
        Commands::ResetDay => commands::reset_day(&ctx)?,
        Commands::Export { path } => commands::export(&ctx, &path)?,
        Commands::Import { path } => commands::import(&ctx, &path)?,
    }

    Ok(())
}
