//! # frigo-match
//!
//! A library for deciding what to cook from what is in the fridge.
//!
//! Fridge contents are free text typed by people ("Tomates cerises", "2 oeufs",
//! "spaghetti") and recipe ingredients are free text written by other people
//! ("tomate", "oeuf", "pâtes"). `frigo-match` decides which fridge items
//! satisfy which ingredients, then ranks recipes by how much of them the fridge
//! covers.
//!
//! ## Features
//!
//! - **French normalization**: accents, ligatures, articles, and plurals fold
//!   to one canonical form
//! - **Synonym groups**: interchangeable products (spaghetti / pâtes) match
//! - **Exclusion pairs**: look-alikes (pâtes / pâte brisée) never match
//! - **Fuzzy fallback**: typos such as "courgete" still match "courgette"
//! - **Expiry bonus**: recipes that use up near-expiry products rank higher
//! - **Diet and allergen filters**: whole recipes are excluded by keyword
//! - **Weekly menus**: fourteen meals plus the shopping list they need
//!
//! ## Example
//!
//! ```rust,no_run
//! use frigo_match::{LexicalResolver, RankingEngine, RecipeCorpus, SuggestionConfig};
//!
//! // Load the embedded French recipe corpus
//! let corpus = RecipeCorpus::load_embedded().unwrap();
//!
//! let resolver = LexicalResolver::french();
//! let engine = RankingEngine::new(&resolver);
//! let fridge = ["tomates", "oeufs", "fromage râpé"];
//!
//! for s in engine.suggest(&corpus.recipes, &fridge, &SuggestionConfig::default()) {
//!     println!("{}: {:.0}%", s.title, s.match_score * 100.0);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`lexicon`]: Text normalization, synonym groups, and exclusion pairs
//! - [`matching`]: Ingredient matcher, recipe scoring, and ranking
//! - [`filter`]: Diet, allergen, and custom exclusion rules
//! - [`planning`]: Weekly menus and shopping lists
//! - [`core`]: Recipe and fridge data types
//! - [`corpus`]: Recipe corpus storage
//! - [`cli`]: Command-line interface implementation
//! - [`web`]: JSON web service

pub mod cli;
pub mod core;
pub mod corpus;
pub mod filter;
pub mod lexicon;
pub mod matching;
pub mod planning;
pub mod utils;
pub mod web;

// Re-export commonly used types for convenience
pub use core::fridge::FridgeItem;
pub use core::recipe::{Recipe, RecipeIngredient};
pub use corpus::store::RecipeCorpus;
pub use filter::{Allergen, Diet, DietProfile};
pub use lexicon::resolver::LexicalResolver;
pub use matching::engine::{RankingEngine, Suggestion, SuggestionConfig};
pub use matching::matcher::{IngredientMatcher, MatchDecision};
pub use planning::{MenuEntry, ShoppingItem, WeeklyMenu};
