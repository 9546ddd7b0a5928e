pub mod commands;

use crate::models::{ItemType, Rating};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lingo")]
#[command(about = "Spaced-repetition review for English words and sentences", long_about = None)]
pub struct Cli {
    /// Database file (overrides the config file)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Config file (default: ~/.config/lingo-srs/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Seed review items for the built-in words and sentences
    Init,
    /// Show items due today
    Due {
        /// Only print how many items are due
        #[arg(long)]
        count: bool,
    },
    /// Review today's due items interactively
    Review {
        /// Keep the stored order instead of shuffling
        #[arg(long)]
        no_shuffle: bool,
    },
    /// Record a review outcome for one item
    Grade {
        item_type: ItemType,
        id: i64,
        /// again, hard, good or easy (or 1-4)
        rating: Rating,
    },
    /// Start tracking a custom word or sentence
    Add { item_type: ItemType, id: i64 },
    /// Stop tracking a custom word or sentence
    Remove { item_type: ItemType, id: i64 },
    /// List tracked items
    List {
        /// Only this item type
        #[arg(long = "type")]
        item_type: Option<ItemType>,
        /// Only items with at least one successful review
        #[arg(long)]
        reviewed: bool,
    },
    /// Show review statistics
    Stats,
    /// Move the simulated date forward by one day
    NextDay,
    /// Return to the real date
    ResetDay,
    /// Write all review progress to a JSON file
    Export { path: PathBuf },
    /// Replace review progress with the contents of a JSON file
    Import { path: PathBuf },
}
