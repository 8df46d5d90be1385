//! Recipe corpus storage.
//!
//! A default corpus of French home recipes is compiled into the binary (see
//! `data/recipes.json`, validated by `build.rs`). Custom corpora load from
//! JSON files in either of two shapes:
//!
//! ```json
//! [ { "id": 1, "title": "Omelette", "ingredients": ["oeufs", "beurre"] } ]
//! ```
//!
//! or the versioned export format written by `frigo-match corpus export`:
//!
//! ```json
//! { "version": "1.0.0", "created_at": "...", "recipes": [ ... ] }
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use frigo_match::RecipeCorpus;
//!
//! let corpus = RecipeCorpus::load_embedded().unwrap();
//! for recipe in &corpus.recipes {
//!     println!("{}", recipe.title);
//! }
//! ```

pub mod store;
