use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::core::recipe::Recipe;

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("Failed to read recipe corpus: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse recipe corpus: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Recipe corpus must be a JSON array or an object with a 'recipes' array")]
    InvalidShape,
}

/// Corpus file version for compatibility checking
pub const CORPUS_VERSION: &str = "1.0.0";

/// Serializable corpus format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusData {
    pub version: String,
    pub created_at: String,
    pub recipes: Vec<Recipe>,
}

/// An ordered recipe collection with an id index.
///
/// Order is the load order and is the final tie-breaker of the ranking.
#[derive(Debug, Clone, Default)]
pub struct RecipeCorpus {
    pub recipes: Vec<Recipe>,

    /// Index: recipe id -> index in recipes vec
    id_to_index: HashMap<i64, usize>,
}

impl RecipeCorpus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a corpus from already-typed recipes, keeping their order
    #[must_use]
    pub fn from_recipes(recipes: Vec<Recipe>) -> Self {
        let mut corpus = Self::new();
        for recipe in recipes {
            corpus.add_recipe(recipe);
        }
        corpus
    }

    /// Load the embedded default corpus
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded data cannot be parsed.
    pub fn load_embedded() -> Result<Self, CorpusError> {
        // Validated at compile time by build.rs
        const EMBEDDED_CORPUS: &str = include_str!("../../data/recipes.json");
        Self::from_json(EMBEDDED_CORPUS)
    }

    /// Load a corpus from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a corpus.
    pub fn load_from_file(path: &Path) -> Result<Self, CorpusError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a corpus from either a bare array of recipes or a versioned
    /// `{version, created_at, recipes}` document.
    ///
    /// Entries that are not recipe objects are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not JSON or has neither shape.
    pub fn from_json(json: &str) -> Result<Self, CorpusError> {
        let root: Value = serde_json::from_str(json)?;

        let entries = match root {
            Value::Array(entries) => entries,
            Value::Object(mut fields) => {
                if let Some(version) = fields.get("version").and_then(Value::as_str) {
                    if version != CORPUS_VERSION {
                        tracing::warn!(
                            expected = CORPUS_VERSION,
                            found = version,
                            "Recipe corpus version mismatch"
                        );
                    }
                }
                match fields.remove("recipes") {
                    Some(Value::Array(entries)) => entries,
                    _ => return Err(CorpusError::InvalidShape),
                }
            }
            _ => return Err(CorpusError::InvalidShape),
        };

        let mut corpus = Self::new();
        for (position, entry) in entries.into_iter().enumerate() {
            match serde_json::from_value::<Recipe>(entry) {
                Ok(recipe) => corpus.add_recipe(recipe),
                Err(e) => tracing::warn!(position, error = %e, "Skipping unreadable recipe"),
            }
        }

        Ok(corpus)
    }

    /// Append a recipe. A later recipe with the same id takes over the index
    /// entry; both stay in the corpus.
    pub fn add_recipe(&mut self, recipe: Recipe) {
        if let Some(id) = recipe.id {
            self.id_to_index.insert(id, self.recipes.len());
        }
        self.recipes.push(recipe);
    }

    /// Get a recipe by id
    #[must_use]
    pub fn get(&self, id: i64) -> Option<&Recipe> {
        self.id_to_index.get(&id).map(|&idx| &self.recipes[idx])
    }

    /// Export the corpus as a versioned JSON document
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, CorpusError> {
        let data = CorpusData {
            version: CORPUS_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            recipes: self.recipes.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_embedded_corpus() {
        let corpus = RecipeCorpus::load_embedded().unwrap();
        assert!(!corpus.is_empty());
        assert!(corpus.recipes.iter().all(Recipe::has_ingredients));
    }

    #[test]
    fn test_get_by_id() {
        let corpus = RecipeCorpus::load_embedded().unwrap();
        let first_id = corpus.recipes[0].id.unwrap();
        assert_eq!(corpus.get(first_id).unwrap().title, corpus.recipes[0].title);
        assert!(corpus.get(-1).is_none());
    }

    #[test]
    fn test_bare_array_and_skipped_entries() {
        let corpus = RecipeCorpus::from_json(
            r#"[
                {"id": 1, "title": "Omelette", "ingredients": ["oeufs", "beurre"]},
                42,
                {"id": 2, "title": "Soupe", "ingredients_json": "[\"poireaux\"]"}
            ]"#,
        )
        .unwrap();

        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.recipes[0].title, "Omelette");
        assert_eq!(corpus.get(2).unwrap().ingredients[0].name, "poireaux");
    }

    #[test]
    fn test_invalid_shape() {
        assert!(matches!(
            RecipeCorpus::from_json(r#"{"version": "1.0.0"}"#),
            Err(CorpusError::InvalidShape)
        ));
        assert!(matches!(
            RecipeCorpus::from_json("\"recettes\""),
            Err(CorpusError::InvalidShape)
        ));
        assert!(matches!(
            RecipeCorpus::from_json("{"),
            Err(CorpusError::ParseError(_))
        ));
    }

    #[test]
    fn test_to_json_round_trips_order() {
        let corpus = RecipeCorpus::from_recipes(vec![
            Recipe::new("B").with_id(2).with_ingredients(&["riz"]),
            Recipe::new("A").with_id(1).with_ingredients(&["pâtes"]),
        ]);
        let json = corpus.to_json().unwrap();
        assert!(json.contains("\"version\""));

        let reloaded = RecipeCorpus::from_json(&json).unwrap();
        let titles: Vec<_> = reloaded.recipes.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "A"]);
    }
}
