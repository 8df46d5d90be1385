//! Command-line interface for frigo-match.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **suggest**: Rank recipes against the contents of the fridge
//! - **check**: Explain whether a fridge item satisfies an ingredient
//! - **menu**: Plan a week of meals, optionally with a shopping list
//! - **corpus**: List, show, or export recipes from the corpus
//! - **serve**: Start the JSON web service
//!
//! ## Usage
//!
//! ```text
//! # What can I cook?
//! frigo-match suggest --item tomates --item oeufs --item "fromage râpé"
//!
//! # Fridge file with expiry dates, vegetarian only, JSON output
//! frigo-match suggest --fridge fridge.json --diet végétarien --format json
//!
//! # Why does (or doesn't) a product match an ingredient?
//! frigo-match check "pâtes" "pâte brisée"
//!
//! # Weekly menu with shopping list
//! frigo-match menu --fridge fridge.json --shopping-list
//!
//! # Start the web service
//! frigo-match serve --port 8080 --open
//! ```

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::core::fridge::{load_fridge_file, FridgeItem};
use crate::corpus::store::RecipeCorpus;

pub mod check;
pub mod corpus;
pub mod menu;
pub mod suggest;

#[derive(Parser)]
#[command(name = "frigo-match")]
#[command(version)]
#[command(about = "Suggest French recipes from what is in the fridge")]
#[command(
    long_about = "frigo-match matches free-text product names against recipe ingredients.\n\nIt understands French plurals, articles and accents, knows which products are interchangeable (spaghetti / pâtes) and which only look alike (pâtes / pâte brisée), and ranks recipes by how much of them the fridge covers:\n- Products close to their expiry date are favoured\n- Diets and allergens exclude whole recipes\n- Weekly menus and shopping lists are derived from the same corpus"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Suggest recipes for the fridge contents
    Suggest(suggest::SuggestArgs),

    /// Check whether a fridge item satisfies a recipe ingredient
    Check(check::CheckArgs),

    /// Plan a weekly menu
    Menu(menu::MenuArgs),

    /// Browse or export the recipe corpus
    Corpus(corpus::CorpusArgs),

    /// Start the web server
    Serve(ServeArgs),
}

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, default_value = "127.0.0.1")]
    pub address: String,

    /// Open browser automatically
    #[arg(long)]
    pub open: bool,

    /// Serve a custom recipe corpus instead of the embedded one
    #[arg(long)]
    pub recipes: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Load a corpus file, or the embedded corpus when no path is given
pub(crate) fn load_corpus(path: Option<&Path>, verbose: bool) -> anyhow::Result<RecipeCorpus> {
    let corpus = match path {
        Some(path) => RecipeCorpus::load_from_file(path)?,
        None => RecipeCorpus::load_embedded()?,
    };

    if verbose {
        eprintln!("Loaded recipe corpus with {} recipes", corpus.len());
    }

    Ok(corpus)
}

/// Fridge contents from an optional file followed by `--item` names
pub(crate) fn collect_fridge(
    file: Option<&PathBuf>,
    items: &[String],
) -> anyhow::Result<Vec<FridgeItem>> {
    let mut fridge = match file {
        Some(path) => load_fridge_file(path)?,
        None => Vec::new(),
    };
    fridge.extend(
        items
            .iter()
            .filter(|name| !name.trim().is_empty())
            .map(FridgeItem::new),
    );
    Ok(fridge)
}

/// Shorten `s` to at most `max_len` characters, marking the cut with "..."
pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
