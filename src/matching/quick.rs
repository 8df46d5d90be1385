//! Substring scorer used for bulk menu planning.
//!
//! Coarser than [`RankingEngine`](crate::matching::engine::RankingEngine):
//! no normalization, no synonyms, no exclusions, and a few staples are
//! always assumed available. Scores range over 0 to 100.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::core::recipe::RecipeIngredient;
use crate::matching::similarity::count_to_f64;

/// Ingredients assumed to be in every kitchen
pub const STAPLES: &[&str] = &["water", "salt", "pepper", "oil", "eau", "sel", "poivre", "huile"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuickScore {
    /// Percentage of satisfied ingredients, one decimal
    pub score: f64,
    /// Names of unsatisfied ingredients, in recipe order
    pub missing: Vec<String>,
}

/// Score a recipe's ingredients against fridge names.
///
/// Each fridge name contributes itself and each of its words as tokens. An
/// ingredient is satisfied when a token is a substring of its lowercase name
/// or the other way round, or when it mentions a staple.
#[must_use]
pub fn quick_score<S: AsRef<str>>(ingredients: &[RecipeIngredient], fridge: &[S]) -> QuickScore {
    if ingredients.is_empty() {
        return QuickScore {
            score: 0.0,
            missing: Vec::new(),
        };
    }

    let tokens = fridge_tokens(fridge);
    let mut satisfied = 0usize;
    let mut missing = Vec::new();

    for ingredient in ingredients {
        let name = ingredient.name.trim().to_lowercase();
        let found = tokens
            .iter()
            .any(|t| name.contains(t.as_str()) || t.contains(name.as_str()));

        if found || STAPLES.iter().any(|s| name.contains(s)) {
            satisfied += 1;
        } else {
            missing.push(ingredient.name.clone());
        }
    }

    let percent = count_to_f64(satisfied) / count_to_f64(ingredients.len()) * 100.0;
    QuickScore {
        score: (percent * 10.0).round() / 10.0,
        missing,
    }
}

fn fridge_tokens<S: AsRef<str>>(fridge: &[S]) -> BTreeSet<String> {
    let mut tokens = BTreeSet::new();
    for name in fridge {
        let name = name.as_ref().trim().to_lowercase();
        if name.is_empty() {
            continue;
        }
        tokens.extend(name.split_whitespace().map(str::to_string));
        tokens.insert(name);
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredients(names: &[&str]) -> Vec<RecipeIngredient> {
        names.iter().map(|n| RecipeIngredient::new(*n)).collect()
    }

    #[test]
    fn test_substring_both_ways() {
        let result = quick_score(
            &ingredients(&["Tomates cerises", "lait", "basilic"]),
            &["tomates", "lait entier"],
        );
        assert!((result.score - 66.7).abs() < 1e-9);
        assert_eq!(result.missing, vec!["basilic"]);
    }

    #[test]
    fn test_staples_always_satisfied() {
        let result = quick_score(&ingredients(&["sel fin", "huile d'olive", "poivre"]), &["riz"]);
        assert!((result.score - 100.0).abs() < 1e-9);
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_multi_word_fridge_items_split() {
        let result = quick_score(&ingredients(&["beurre"]), &["beurre doux"]);
        assert!((result.score - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_recipe_scores_zero() {
        let result = quick_score::<&str>(&[], &["riz"]);
        assert!(result.score.abs() < 1e-12);
    }

    #[test]
    fn test_blank_fridge_names_ignored() {
        // An empty token would be a substring of everything
        let result = quick_score(&ingredients(&["basilic"]), &["", "  "]);
        assert_eq!(result.missing, vec!["basilic"]);
    }
}
