use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;

use crate::cli::{collect_fridge, load_corpus, OutputFormat};
use crate::core::fridge::item_names;
use crate::filter::DietProfile;
use crate::lexicon::resolver::LexicalResolver;
use crate::matching::matcher::IngredientMatcher;
use crate::planning::menu::{plan_week, week_start, WeeklyMenu, DEFAULT_SERVINGS};
use crate::planning::shopping::{shopping_list, ShoppingItem};
use crate::utils::validation::{validate_servings, validate_terms, MAX_FRIDGE_ITEMS};

const DAY_NAMES: [&str; 7] = [
    "Lundi", "Mardi", "Mercredi", "Jeudi", "Vendredi", "Samedi", "Dimanche",
];

#[derive(Args)]
pub struct MenuArgs {
    /// JSON file listing the fridge contents
    #[arg(long)]
    pub fridge: Option<PathBuf>,

    /// Product in the fridge (repeatable)
    #[arg(short = 'i', long = "item")]
    pub items: Vec<String>,

    /// Path to custom recipe corpus
    #[arg(long)]
    pub recipes: Option<PathBuf>,

    /// Any day of the week to plan (default: the current week)
    #[arg(long)]
    pub week_start: Option<NaiveDate>,

    /// Servings per meal
    #[arg(long, default_value_t = DEFAULT_SERVINGS)]
    pub servings: u32,

    /// Diet to respect (repeatable)
    #[arg(long = "diet")]
    pub diets: Vec<String>,

    /// Allergen to avoid (repeatable)
    #[arg(long = "allergen")]
    pub allergens: Vec<String>,

    /// Category excluded by the custom diet (repeatable)
    #[arg(long = "exclude")]
    pub exclude: Vec<String>,

    /// Also list the ingredients to buy
    #[arg(long)]
    pub shopping_list: bool,
}

/// Execute menu subcommand
///
/// # Errors
///
/// Returns an error if an input file cannot be loaded or the options are
/// out of range.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: MenuArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    validate_servings(args.servings)?;
    let fridge = collect_fridge(args.fridge.as_ref(), &args.items)?;
    let names = item_names(&fridge);
    validate_terms(&names, "fridge items", MAX_FRIDGE_ITEMS)?;

    let corpus = load_corpus(args.recipes.as_deref(), verbose)?;
    let profile = DietProfile::from_keys(&args.diets, &args.allergens, &args.exclude);
    let start = week_start(
        args.week_start
            .unwrap_or_else(|| chrono::Local::now().date_naive()),
    );

    let menu = plan_week(&corpus.recipes, &names, &profile, start, args.servings);

    let shopping = if args.shopping_list {
        let resolver = LexicalResolver::french();
        let matcher = IngredientMatcher::new(&resolver);
        Some(shopping_list(&menu.recipes(&corpus.recipes), &names, &matcher))
    } else {
        None
    };

    match format {
        OutputFormat::Text => print_text(&menu, shopping.as_deref(), verbose),
        OutputFormat::Json => {
            let output = match &shopping {
                Some(items) => serde_json::json!({ "menu": menu, "shoppingList": items }),
                None => serde_json::json!({ "menu": menu }),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => print_tsv(&menu, shopping.as_deref()),
    }

    Ok(())
}

fn print_text(menu: &WeeklyMenu, shopping: Option<&[ShoppingItem]>, verbose: bool) {
    println!(
        "Menu for the week of {} ({} servings per meal)",
        menu.week_start.format("%d/%m/%Y"),
        menu.servings
    );

    let mut current_day = None;
    for entry in &menu.entries {
        if current_day != Some(entry.day_of_week) {
            current_day = Some(entry.day_of_week);
            let day = DAY_NAMES
                .get(usize::from(entry.day_of_week))
                .copied()
                .unwrap_or_default();
            println!("\n{day} {}", entry.date.format("%d/%m"));
        }

        match (verbose, entry.match_score) {
            (true, Some(score)) => println!(
                "   {:<9} {} ({score:.0}% in the fridge)",
                entry.meal_type.to_string(),
                entry.recipe_title
            ),
            _ => println!("   {:<9} {}", entry.meal_type.to_string(), entry.recipe_title),
        }
    }

    if let Some(items) = shopping {
        println!("\nShopping list ({} items)", items.len());
        println!("{}", "-".repeat(40));
        for item in items {
            match &item.measure {
                Some(measure) => print!("  - {} ({measure})", item.name),
                None => print!("  - {}", item.name),
            }
            if verbose {
                print!("  [{}]", item.needed_for.join(", "));
            }
            println!();
        }
    }
}

fn print_tsv(menu: &WeeklyMenu, shopping: Option<&[ShoppingItem]>) {
    println!("date\tday\tmeal\trecipe_id\trecipe\tservings\tscore");
    for entry in &menu.entries {
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            entry.date,
            entry.day_of_week,
            entry.meal_type,
            entry.recipe_id.map(|id| id.to_string()).unwrap_or_default(),
            entry.recipe_title,
            entry.servings,
            entry
                .match_score
                .map(|s| format!("{s:.1}"))
                .unwrap_or_default(),
        );
    }

    if let Some(items) = shopping {
        println!();
        println!("ingredient\tmeasure\tneeded_for");
        for item in items {
            println!(
                "{}\t{}\t{}",
                item.name,
                item.measure.as_deref().unwrap_or(""),
                item.needed_for.join(",")
            );
        }
    }
}
