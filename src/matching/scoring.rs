use serde::Serialize;

use crate::core::recipe::Recipe;
use crate::matching::matcher::{IngredientMatcher, PreparedTerm};
use crate::matching::similarity::count_to_f64;

/// Bonus for each matched ingredient that uses up a near-expiry item
pub const EXPIRY_BONUS_PER_ITEM: f64 = 0.1;

/// Cap on the total expiry bonus of one recipe
pub const MAX_EXPIRY_BONUS: f64 = 0.2;

/// Tolerance for threshold comparisons, so that `0.1 + 0.2` passes a `0.3`
/// minimum
pub const SCORE_EPSILON: f64 = 1e-9;

/// Which of a recipe's ingredients the fridge covers.
///
/// Both lists hold ingredient names as written in the recipe, in recipe order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchOutcome {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

impl MatchOutcome {
    /// Number of ingredients partitioned
    #[must_use]
    pub fn total(&self) -> usize {
        self.matched.len() + self.missing.len()
    }

    /// `|matched| / |ingredients|`, zero for an empty recipe
    #[must_use]
    pub fn base_score(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        count_to_f64(self.matched.len()) / count_to_f64(total)
    }
}

/// Score details of one recipe against the fridge
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeScore {
    pub outcome: MatchOutcome,
    pub base_score: f64,
    pub expiry_bonus: f64,
    /// `min(base_score + expiry_bonus, 1.0)`
    pub final_score: f64,
}

impl RecipeScore {
    /// Whether the score reaches `min_score`, within [`SCORE_EPSILON`]
    #[must_use]
    pub fn passes(&self, min_score: f64) -> bool {
        self.final_score + SCORE_EPSILON >= min_score
    }
}

/// Score a recipe against prepared fridge and near-expiry terms.
///
/// Returns `None` for recipes the ranker never emits: no ingredients, or no
/// ingredient covered by the fridge.
#[must_use]
pub fn score_recipe(
    matcher: &IngredientMatcher<'_>,
    recipe: &Recipe,
    fridge: &[PreparedTerm],
    near_expiry: &[PreparedTerm],
) -> Option<RecipeScore> {
    if !recipe.has_ingredients() {
        return None;
    }

    let mut outcome = MatchOutcome::default();
    let mut expiry_hits = 0usize;

    for name in recipe.ingredient_names() {
        let ingredient = PreparedTerm::new(name);
        if matcher.first_match(fridge, &ingredient).is_some() {
            if matcher.first_match(near_expiry, &ingredient).is_some() {
                expiry_hits += 1;
            }
            outcome.matched.push(name.to_string());
        } else {
            outcome.missing.push(name.to_string());
        }
    }

    if outcome.matched.is_empty() {
        return None;
    }

    let base_score = outcome.base_score();
    let expiry_bonus = expiry_bonus(expiry_hits);
    let final_score = (base_score + expiry_bonus).min(1.0);

    Some(RecipeScore {
        outcome,
        base_score,
        expiry_bonus,
        final_score,
    })
}

/// Bonus for `hits` matched ingredients that also match a near-expiry item
#[must_use]
pub fn expiry_bonus(hits: usize) -> f64 {
    (count_to_f64(hits) * EXPIRY_BONUS_PER_ITEM).min(MAX_EXPIRY_BONUS)
}

/// Integer ranking key for a score, so that scores equal up to float noise
/// compare equal
#[must_use]
pub fn score_key(score: f64) -> u64 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Scores lie in [0, 1]
    {
        (score.clamp(0.0, 1.0) * 1_000_000.0).round() as u64
    }
}
