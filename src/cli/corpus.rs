use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};

use crate::cli::{load_corpus, truncate, OutputFormat};
use crate::core::recipe::Recipe;

#[derive(Args)]
pub struct CorpusArgs {
    #[command(subcommand)]
    pub command: CorpusCommands,
}

#[derive(Subcommand)]
pub enum CorpusCommands {
    /// List all recipes in the corpus
    List {
        /// Path to custom recipe corpus
        #[arg(long)]
        recipes: Option<PathBuf>,

        /// Only list recipes whose title contains this text
        #[arg(long)]
        title: Option<String>,
    },

    /// Show details of a specific recipe
    Show {
        /// Recipe ID
        #[arg(required = true)]
        id: i64,

        /// Path to custom recipe corpus
        #[arg(long)]
        recipes: Option<PathBuf>,
    },

    /// Export the corpus to a file
    Export {
        /// Output file path
        #[arg(required = true)]
        output: PathBuf,

        /// Path to custom recipe corpus to export (defaults to embedded)
        #[arg(long)]
        recipes: Option<PathBuf>,
    },
}

/// Execute corpus subcommand
///
/// # Errors
///
/// Returns an error if the corpus cannot be loaded, the recipe does not
/// exist, or the export cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: CorpusArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    match args.command {
        CorpusCommands::List { recipes, title } => {
            run_list(recipes.as_deref(), title.as_deref(), format, verbose)
        }
        CorpusCommands::Show { id, recipes } => run_show(id, recipes.as_deref(), format, verbose),
        CorpusCommands::Export { output, recipes } => {
            run_export(&output, recipes.as_deref(), verbose)
        }
    }
}

fn run_list(
    corpus_path: Option<&Path>,
    title_filter: Option<&str>,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let corpus = load_corpus(corpus_path, verbose)?;

    let needle = title_filter.map(str::to_lowercase);
    let filtered: Vec<&Recipe> = corpus
        .recipes
        .iter()
        .filter(|r| {
            needle
                .as_deref()
                .map_or(true, |n| r.title.to_lowercase().contains(n))
        })
        .collect();

    match format {
        OutputFormat::Text => {
            let title_width = filtered
                .iter()
                .map(|r| r.title.chars().count().min(40))
                .max()
                .unwrap_or(5)
                .max(5);

            println!("Recipe Corpus ({} recipes)\n", filtered.len());
            println!(
                "{:>4}  {:<title_w$} {:>11} {:>8}",
                "ID",
                "Title",
                "Ingredients",
                "Time",
                title_w = title_width
            );
            println!("{}", "-".repeat(title_width + 27));

            for r in &filtered {
                println!(
                    "{:>4}  {:<title_w$} {:>11} {:>8}",
                    r.id.map(|id| id.to_string()).unwrap_or_default(),
                    truncate(&r.title, title_width),
                    r.ingredients.len(),
                    total_time(r).map(|t| format!("{t} min")).unwrap_or_default(),
                    title_w = title_width
                );
                if verbose && !r.diet_tags.is_empty() {
                    println!("      └─ {}", r.diet_tags.join(", "));
                }
            }
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = filtered
                .iter()
                .map(|r| {
                    serde_json::json!({
                        "id": r.id,
                        "title": r.title,
                        "ingredientCount": r.ingredients.len(),
                        "prepTime": r.prep_time,
                        "cookTime": r.cook_time,
                        "servings": r.servings,
                        "tags": r.tags,
                        "dietTags": r.diet_tags,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("id\ttitle\tingredient_count\tprep_time\tcook_time\tservings");
            for r in &filtered {
                println!(
                    "{}\t{}\t{}\t{}\t{}\t{}",
                    r.id.map(|id| id.to_string()).unwrap_or_default(),
                    r.title,
                    r.ingredients.len(),
                    r.prep_time.map(|t| t.to_string()).unwrap_or_default(),
                    r.cook_time.map(|t| t.to_string()).unwrap_or_default(),
                    r.servings.map(|s| s.to_string()).unwrap_or_default(),
                );
            }
        }
    }

    Ok(())
}

fn run_show(
    id: i64,
    corpus_path: Option<&Path>,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let corpus = load_corpus(corpus_path, verbose)?;
    let recipe = corpus
        .get(id)
        .ok_or_else(|| anyhow::anyhow!("Recipe {id} not found"))?;

    match format {
        OutputFormat::Text => {
            println!("{}", recipe.title);
            println!("{}", "=".repeat(recipe.title.chars().count()));
            println!();
            println!("ID:        {id}");
            if let Some(prep) = recipe.prep_time {
                println!("Prep time: {prep} min");
            }
            if let Some(cook) = recipe.cook_time {
                println!("Cook time: {cook} min");
            }
            if let Some(servings) = recipe.servings {
                println!("Servings:  {servings}");
            }
            if !recipe.tags.is_empty() {
                println!("Tags:      {}", recipe.tags.join(", "));
            }
            if !recipe.diet_tags.is_empty() {
                println!("Diets:     {}", recipe.diet_tags.join(", "));
            }

            println!("\nIngredients:");
            for ingredient in &recipe.ingredients {
                match &ingredient.measure {
                    Some(measure) => println!("  - {} ({measure})", ingredient.name),
                    None => println!("  - {}", ingredient.name),
                }
            }

            if !recipe.instructions.is_empty() {
                println!("\nInstructions:\n{}", recipe.instructions);
            }
            if let Some(url) = &recipe.source_url {
                println!("\nSource: {url}");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(recipe)?);
        }
        OutputFormat::Tsv => {
            println!("name\tmeasure");
            for ingredient in &recipe.ingredients {
                println!(
                    "{}\t{}",
                    ingredient.name,
                    ingredient.measure.as_deref().unwrap_or("")
                );
            }
        }
    }

    Ok(())
}

fn run_export(output: &Path, corpus_path: Option<&Path>, verbose: bool) -> anyhow::Result<()> {
    let corpus = load_corpus(corpus_path, verbose)?;

    let json = corpus.to_json()?;
    std::fs::write(output, json)?;

    println!("Exported {} recipes to {}", corpus.len(), output.display());

    Ok(())
}

fn total_time(recipe: &Recipe) -> Option<u32> {
    match (recipe.prep_time, recipe.cook_time) {
        (None, None) => None,
        (prep, cook) => Some(prep.unwrap_or(0) + cook.unwrap_or(0)),
    }
}
