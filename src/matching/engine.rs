use std::borrow::Borrow;
use std::cmp::Reverse;
use std::collections::HashSet;
use std::path::Path;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::recipe::{Recipe, RecipeIngredient};
use crate::filter::DietProfile;
use crate::lexicon::resolver::LexicalResolver;
use crate::matching::matcher::{IngredientMatcher, PreparedTerm};
use crate::matching::scoring::{score_key, score_recipe, RecipeScore};
use crate::utils::validation::{validate_max_results, validate_ratio, ValidationError};

/// Default cap on the number of suggestions
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Default minimum share of a recipe's ingredients the fridge must cover
pub const DEFAULT_MIN_MATCH_RATIO: f64 = 0.3;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ValidationError),
}

/// Options of a suggestion request. Every field has a default, so an empty
/// JSON object is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SuggestionConfig {
    pub max_results: usize,
    pub min_match_ratio: f64,
    /// Names of products to use up first
    pub prioritize_expiring: Option<Vec<String>>,
    pub diets: Vec<String>,
    pub allergens: Vec<String>,
    /// Categories excluded under the custom diet
    pub custom_exclusion_categories: Vec<String>,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            min_match_ratio: DEFAULT_MIN_MATCH_RATIO,
            prioritize_expiring: None,
            diets: Vec::new(),
            allergens: Vec::new(),
            custom_exclusion_categories: Vec::new(),
        }
    }
}

impl SuggestionConfig {
    /// Load and validate a configuration from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or holds
    /// out-of-range values.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns an error if `min_match_ratio` or `max_results` is out of range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_ratio(self.min_match_ratio)?;
        validate_max_results(self.max_results)
    }

    /// The diet/allergen rules this configuration activates
    #[must_use]
    pub fn profile(&self) -> DietProfile {
        DietProfile::from_keys(
            &self.diets,
            &self.allergens,
            &self.custom_exclusion_categories,
        )
    }

    #[must_use]
    pub fn near_expiry(&self) -> &[String] {
        self.prioritize_expiring.as_deref().unwrap_or_default()
    }
}

/// A ranked recipe. Absent recipe metadata serializes as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub id: Option<i64>,
    pub title: String,
    pub ingredients: Vec<RecipeIngredient>,
    pub matched_ingredients: Vec<String>,
    pub missing_ingredients: Vec<String>,
    /// Final score in `[0, 1]`, expiry bonus included
    pub match_score: f64,
    pub expiry_bonus: f64,
    pub instructions: String,
    pub prep_time: Option<u32>,
    pub cook_time: Option<u32>,
    pub servings: Option<u32>,
    pub image_url: Option<String>,
    pub tags: Vec<String>,
    pub diet_tags: Vec<String>,
}

impl Suggestion {
    fn new(recipe: &Recipe, score: RecipeScore) -> Self {
        Self {
            id: recipe.id,
            title: recipe.title.clone(),
            ingredients: recipe.ingredients.clone(),
            matched_ingredients: score.outcome.matched,
            missing_ingredients: score.outcome.missing,
            match_score: score.final_score,
            expiry_bonus: score.expiry_bonus,
            instructions: recipe.instructions.clone(),
            prep_time: recipe.prep_time,
            cook_time: recipe.cook_time,
            servings: recipe.servings,
            image_url: recipe.image_url.clone(),
            tags: recipe.tags.clone(),
            diet_tags: recipe.diet_tags.clone(),
        }
    }
}

/// Ranks recipes against fridge contents
#[derive(Debug, Clone, Copy)]
pub struct RankingEngine<'a> {
    matcher: IngredientMatcher<'a>,
}

impl<'a> RankingEngine<'a> {
    #[must_use]
    pub fn new(resolver: &'a LexicalResolver) -> Self {
        Self {
            matcher: IngredientMatcher::new(resolver),
        }
    }

    #[must_use]
    pub fn matcher(&self) -> &IngredientMatcher<'a> {
        &self.matcher
    }

    /// Score every recipe and return the best `max_results`.
    ///
    /// Recipes are scored in parallel. The result is ordered by descending
    /// score, then fewer missing ingredients, then input order.
    #[must_use]
    pub fn rank<R, F, E>(
        &self,
        recipes: &[R],
        fridge: &[F],
        near_expiry: &[E],
        min_score: f64,
        max_results: usize,
    ) -> Vec<Suggestion>
    where
        R: Borrow<Recipe> + Sync,
        F: AsRef<str>,
        E: AsRef<str>,
    {
        let fridge = prepare_terms(fridge);
        if fridge.is_empty() || max_results == 0 {
            return Vec::new();
        }
        let near_expiry = prepare_terms(near_expiry);

        let mut suggestions: Vec<Suggestion> = recipes
            .par_iter()
            .filter_map(|recipe| {
                let recipe = recipe.borrow();
                let Some(score) = score_recipe(&self.matcher, recipe, &fridge, &near_expiry)
                else {
                    tracing::debug!(recipe = %recipe.title, "No ingredient covered");
                    return None;
                };
                if !score.passes(min_score) {
                    tracing::debug!(
                        recipe = %recipe.title,
                        score = score.final_score,
                        min_score,
                        "Below minimum score"
                    );
                    return None;
                }
                Some(Suggestion::new(recipe, score))
            })
            .collect();

        // Stable: equal keys keep input order
        suggestions.sort_by_key(|s| (Reverse(score_key(s.match_score)), s.missing_ingredients.len()));
        suggestions.truncate(max_results);
        suggestions
    }

    /// Filter by the configured diet profile, then rank
    #[must_use]
    pub fn suggest<F: AsRef<str>>(
        &self,
        recipes: &[Recipe],
        fridge: &[F],
        config: &SuggestionConfig,
    ) -> Vec<Suggestion> {
        let eligible = config.profile().filter(recipes);
        tracing::debug!(
            eligible = eligible.len(),
            total = recipes.len(),
            "Applied diet profile"
        );
        self.rank(
            &eligible,
            fridge,
            config.near_expiry(),
            config.min_match_ratio,
            config.max_results,
        )
    }
}

/// Prepare non-blank terms, dropping repeats of the same canonical form
fn prepare_terms<S: AsRef<str>>(terms: &[S]) -> Vec<PreparedTerm> {
    let mut seen = HashSet::new();
    terms
        .iter()
        .map(|t| PreparedTerm::new(t.as_ref()))
        .filter(|t| !t.is_blank() && seen.insert(t.canonical().clone()))
        .collect()
}
