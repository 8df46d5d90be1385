//! Ingredient matching and recipe ranking.
//!
//! - [`IngredientMatcher`]: decides whether a fridge item satisfies an ingredient
//! - [`RankingEngine`]: scores and orders recipes against the fridge
//! - [`quick_score`](quick::quick_score): coarse substring scorer for menu planning
//!
//! ## Matching Pipeline
//!
//! A pair of names is run through [`MatchStrategy::PIPELINE`] and the first
//! strategy with an opinion decides:
//!
//! 1. **Exact**: canonical forms are equal
//! 2. **Singular**: singular forms are equal
//! 3. **Exclusion**: registered exclusion pair, never a match ("pâtes" / "pâte brisée")
//! 4. **Synonym**: same synonym group ("spaghetti" / "pâtes")
//! 5. **Root word**: "ciboulette" inside "ciboulette fraîche"
//! 6. **Fuzzy**: Ratcliff/Obershelp ratio of at least 0.82 ("courgete" / "courgette")
//!
//! ## Scoring
//!
//! - **Base score**: matched ingredients / all ingredients
//! - **Expiry bonus**: +0.1 per matched ingredient that uses a near-expiry item, at most 0.2
//! - **Final score**: base + bonus, capped at 1.0
//!
//! Recipes with no matched ingredient are never suggested. Ties on score go to
//! the recipe with fewer missing ingredients, then to corpus order.
//!
//! ## Example
//!
//! ```rust
//! use frigo_match::{LexicalResolver, RankingEngine, Recipe};
//!
//! let resolver = LexicalResolver::french();
//! let engine = RankingEngine::new(&resolver);
//!
//! let recipes = vec![Recipe::new("Omelette").with_ingredients(&["oeufs", "ciboulette"])];
//! let suggestions = engine.rank(&recipes, &["Oeufs frais"], &[] as &[&str], 0.3, 10);
//!
//! assert_eq!(suggestions[0].matched_ingredients, vec!["oeufs"]);
//! assert_eq!(suggestions[0].missing_ingredients, vec!["ciboulette"]);
//! ```

pub mod engine;
pub mod matcher;
pub mod quick;
pub mod scoring;
pub mod similarity;
pub mod strategy;
pub mod substitutes;

pub use engine::{RankingEngine, Suggestion, SuggestionConfig};
pub use matcher::{IngredientMatcher, MatchDecision, PreparedTerm};
pub use scoring::{MatchOutcome, RecipeScore};
pub use strategy::MatchStrategy;
