use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;

use crate::cli::{collect_fridge, load_corpus, truncate, OutputFormat};
use crate::core::fridge::{item_names, near_expiry_names, DEFAULT_EXPIRY_WINDOW_DAYS};
use crate::lexicon::resolver::LexicalResolver;
use crate::matching::engine::{RankingEngine, Suggestion, SuggestionConfig};
use crate::matching::substitutes::alternatives_for;
use crate::utils::validation::{validate_terms, MAX_FRIDGE_ITEMS};

#[derive(Args)]
pub struct SuggestArgs {
    /// Product in the fridge (repeatable)
    #[arg(short = 'i', long = "item")]
    pub items: Vec<String>,

    /// JSON file listing the fridge contents, optionally with expiry dates
    #[arg(long)]
    pub fridge: Option<PathBuf>,

    /// Path to custom recipe corpus
    #[arg(long)]
    pub recipes: Option<PathBuf>,

    /// JSON configuration file (maxResults, minMatchRatio, diets, ...)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of suggestions to show
    #[arg(short = 'n', long)]
    pub max_results: Option<usize>,

    /// Minimum share of ingredients the fridge must cover (0 to 1)
    #[arg(long)]
    pub min_match: Option<f64>,

    /// Diet to respect (repeatable), e.g. "végétarien", "sans gluten"
    #[arg(long = "diet")]
    pub diets: Vec<String>,

    /// Allergen to avoid (repeatable), e.g. "gluten", "arachides"
    #[arg(long = "allergen")]
    pub allergens: Vec<String>,

    /// Category excluded by the custom diet (repeatable), e.g. "viande rouge"
    #[arg(long = "exclude")]
    pub exclude: Vec<String>,

    /// Product to use up first (repeatable)
    #[arg(long = "expiring")]
    pub expiring: Vec<String>,

    /// Reference date for expiry dates in the fridge file (default: today)
    #[arg(long)]
    pub today: Option<NaiveDate>,

    /// Items expiring within this many days are used up first
    #[arg(long, default_value_t = DEFAULT_EXPIRY_WINDOW_DAYS)]
    pub expiry_window: i64,
}

/// Execute suggest subcommand
///
/// # Errors
///
/// Returns an error if an input file cannot be loaded or the options are
/// out of range.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: SuggestArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let fridge = collect_fridge(args.fridge.as_ref(), &args.items)?;
    if fridge.is_empty() {
        anyhow::bail!("No fridge contents given: use --item or --fridge");
    }
    let names = item_names(&fridge);
    validate_terms(&names, "fridge items", MAX_FRIDGE_ITEMS)?;

    let mut config = build_config(&args)?;

    let today = args
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let dated = near_expiry_names(&fridge, today, args.expiry_window);
    if !dated.is_empty() {
        config
            .prioritize_expiring
            .get_or_insert_with(Vec::new)
            .extend(dated);
    }

    if verbose {
        eprintln!(
            "Fridge: {} items, {} to use up first",
            names.len(),
            config.near_expiry().len()
        );
    }

    let corpus = load_corpus(args.recipes.as_deref(), verbose)?;
    let resolver = LexicalResolver::french();
    let engine = RankingEngine::new(&resolver);
    let suggestions = engine.suggest(&corpus.recipes, &names, &config);

    if suggestions.is_empty() && matches!(format, OutputFormat::Text) {
        eprintln!("No recipe matches the fridge contents.");
        return Ok(());
    }

    match format {
        OutputFormat::Text => print_text_results(&suggestions, verbose),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&suggestions)?),
        OutputFormat::Tsv => print_tsv_results(&suggestions),
    }

    Ok(())
}

/// Configuration file values, overridden by command-line options
fn build_config(args: &SuggestArgs) -> anyhow::Result<SuggestionConfig> {
    let mut config = match &args.config {
        Some(path) => SuggestionConfig::load_from_file(path)?,
        None => SuggestionConfig::default(),
    };

    if let Some(max_results) = args.max_results {
        config.max_results = max_results;
    }
    if let Some(min_match) = args.min_match {
        config.min_match_ratio = min_match;
    }
    if !args.diets.is_empty() {
        config.diets.clone_from(&args.diets);
    }
    if !args.allergens.is_empty() {
        config.allergens.clone_from(&args.allergens);
    }
    if !args.exclude.is_empty() {
        config.custom_exclusion_categories.clone_from(&args.exclude);
    }
    if !args.expiring.is_empty() {
        config
            .prioritize_expiring
            .get_or_insert_with(Vec::new)
            .extend(args.expiring.iter().cloned());
    }

    config.validate()?;
    Ok(config)
}

fn print_text_results(suggestions: &[Suggestion], verbose: bool) {
    for (i, s) in suggestions.iter().enumerate() {
        if i > 0 {
            println!("\n{}", "─".repeat(60));
        }

        println!("\n#{} {}", i + 1, s.title);
        if s.expiry_bonus > 0.0 {
            println!(
                "   Score: {:.0}% (including +{:.0}% for products to use up)",
                s.match_score * 100.0,
                s.expiry_bonus * 100.0
            );
        } else {
            println!("   Score: {:.0}%", s.match_score * 100.0);
        }

        if let (Some(prep), Some(cook)) = (s.prep_time, s.cook_time) {
            println!("   Time: {prep} min + {cook} min");
        }
        if let Some(servings) = s.servings {
            println!("   Servings: {servings}");
        }

        println!(
            "\n   Available ({}/{}): {}",
            s.matched_ingredients.len(),
            s.ingredients.len(),
            s.matched_ingredients.join(", ")
        );

        if !s.missing_ingredients.is_empty() {
            println!("   Missing: {}", s.missing_ingredients.join(", "));
            if verbose {
                for missing in &s.missing_ingredients {
                    let alternatives = alternatives_for(missing);
                    if !alternatives.is_empty() {
                        println!("     └─ {missing}: try {}", alternatives.join(", "));
                    }
                }
            }
        }

        if verbose && !s.instructions.is_empty() {
            println!("\n   {}", truncate(&s.instructions, 200));
        }
    }
}

fn print_tsv_results(suggestions: &[Suggestion]) {
    println!("rank\tid\ttitle\tscore\texpiry_bonus\tmatched\tmissing\tmatched_ingredients\tmissing_ingredients");
    for (i, s) in suggestions.iter().enumerate() {
        println!(
            "{}\t{}\t{}\t{:.4}\t{:.2}\t{}\t{}\t{}\t{}",
            i + 1,
            s.id.map(|id| id.to_string()).unwrap_or_default(),
            s.title,
            s.match_score,
            s.expiry_bonus,
            s.matched_ingredients.len(),
            s.missing_ingredients.len(),
            s.matched_ingredients.join(","),
            s.missing_ingredients.join(","),
        );
    }
}
