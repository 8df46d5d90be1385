use clap::Args;

use crate::cli::OutputFormat;
use crate::lexicon::resolver::LexicalResolver;
use crate::matching::matcher::{IngredientMatcher, MatchDecision};
use crate::utils::validation::validate_term;

#[derive(Args)]
pub struct CheckArgs {
    /// Product name as found in the fridge
    #[arg(required = true)]
    pub fridge_item: String,

    /// Ingredient name as written in a recipe
    #[arg(required = true)]
    pub ingredient: String,
}

/// Execute check subcommand
///
/// # Errors
///
/// Returns an error if either name is rejected by input validation.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: CheckArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    validate_term(&args.fridge_item)?;
    validate_term(&args.ingredient)?;

    let resolver = LexicalResolver::french();
    let matcher = IngredientMatcher::new(&resolver);
    let decision = matcher.explain(&args.fridge_item, &args.ingredient);

    match format {
        OutputFormat::Text => print_text(&decision, &resolver, verbose),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&decision)?),
        OutputFormat::Tsv => {
            println!("fridge_item\tingredient\tmatch\tdecided_by\tsimilarity");
            println!(
                "{}\t{}\t{}\t{}\t{}",
                decision.fridge_item,
                decision.ingredient,
                decision.is_match,
                decision
                    .decided_by
                    .map(|s| s.to_string())
                    .unwrap_or_default(),
                decision
                    .similarity
                    .map(|r| format!("{r:.3}"))
                    .unwrap_or_default(),
            );
        }
    }

    Ok(())
}

fn print_text(decision: &MatchDecision, resolver: &LexicalResolver, verbose: bool) {
    let verdict = if decision.is_match { "MATCH" } else { "NO MATCH" };
    println!(
        "{verdict}: '{}' {} '{}'",
        decision.fridge_item,
        if decision.is_match { "satisfies" } else { "does not satisfy" },
        decision.ingredient
    );

    match decision.decided_by {
        Some(strategy) => println!("   Decided by: {strategy}"),
        None => println!("   Decided by: no rule applied"),
    }
    if let Some(ratio) = decision.similarity {
        println!("   Similarity: {ratio:.3}");
    }

    if verbose {
        println!("\n   Canonical forms:");
        for canonical in [&decision.fridge_canonical, &decision.ingredient_canonical] {
            let group = resolver
                .group_of(canonical)
                .map_or_else(|| "-".to_string(), |g| g.to_string());
            println!("     {canonical:<30} synonym group: {group}");
        }
    }
}
