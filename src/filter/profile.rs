use serde::Serialize;

use super::allergen::Allergen;
use super::category::expand_custom_exclusions;
use super::diet::Diet;
use crate::core::recipe::Recipe;
use crate::lexicon::normalize::fold_case;

/// The active dietary rules, resolved from user-facing keys once and then
/// applied to any number of recipes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DietProfile {
    diets: Vec<Diet>,
    allergens: Vec<Allergen>,
    /// Expanded keywords of the custom diet; only used when it is active
    custom_keywords: Vec<String>,
}

impl DietProfile {
    #[must_use]
    pub fn new(diets: Vec<Diet>, allergens: Vec<Allergen>) -> Self {
        Self {
            diets,
            allergens,
            custom_keywords: Vec::new(),
        }
    }

    /// Resolve diet, allergen and custom category keys. Unknown diet and
    /// allergen keys are ignored.
    #[must_use]
    pub fn from_keys<D, A, C>(diets: &[D], allergens: &[A], custom_categories: &[C]) -> Self
    where
        D: AsRef<str>,
        A: AsRef<str>,
        C: AsRef<str>,
    {
        let diets = diets
            .iter()
            .filter_map(|key| {
                let parsed = Diet::parse(key.as_ref());
                if parsed.is_none() {
                    tracing::debug!(key = key.as_ref(), "Ignoring unknown diet");
                }
                parsed
            })
            .collect();

        let allergens = allergens
            .iter()
            .filter_map(|key| {
                let parsed = Allergen::parse(key.as_ref());
                if parsed.is_none() {
                    tracing::debug!(key = key.as_ref(), "Ignoring unknown allergen");
                }
                parsed
            })
            .collect();

        Self {
            diets,
            allergens,
            custom_keywords: expand_custom_exclusions(custom_categories),
        }
    }

    #[must_use]
    pub fn with_custom_keywords(mut self, keywords: Vec<String>) -> Self {
        self.custom_keywords = keywords;
        self
    }

    #[must_use]
    pub fn diets(&self) -> &[Diet] {
        &self.diets
    }

    #[must_use]
    pub fn allergens(&self) -> &[Allergen] {
        &self.allergens
    }

    /// True when no rule can reject anything
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.diets.is_empty() && self.allergens.is_empty()
    }

    /// Whether a recipe passes every active rule
    #[must_use]
    pub fn is_allowed(&self, recipe: &Recipe) -> bool {
        if self.is_empty() {
            return true;
        }

        let ingredient_blob = fold_case(&recipe.ingredient_names().collect::<Vec<_>>().join(" "));
        let diet_blob = format!("{ingredient_blob} {}", fold_case(&recipe.title));

        for diet in &self.diets {
            let rejected = match diet {
                Diet::Custom => self
                    .custom_keywords
                    .iter()
                    .any(|kw| diet_blob.contains(kw.as_str())),
                other => other.excludes(&diet_blob),
            };
            if rejected {
                tracing::debug!(recipe = %recipe.title, diet = %diet, "Rejected by diet");
                return false;
            }
        }

        for allergen in &self.allergens {
            if allergen.excludes(&ingredient_blob) {
                tracing::debug!(recipe = %recipe.title, allergen = %allergen, "Rejected by allergen");
                return false;
            }
        }

        true
    }

    /// Recipes that pass, in input order
    #[must_use]
    pub fn filter<'r>(&self, recipes: &'r [Recipe]) -> Vec<&'r Recipe> {
        recipes.iter().filter(|r| self.is_allowed(r)).collect()
    }
}

/// One-shot form of [`DietProfile::is_allowed`] over raw keys
#[must_use]
pub fn is_allowed<D, A, C>(
    recipe: &Recipe,
    diets: &[D],
    allergens: &[A],
    custom_categories: &[C],
) -> bool
where
    D: AsRef<str>,
    A: AsRef<str>,
    C: AsRef<str>,
{
    DietProfile::from_keys(diets, allergens, custom_categories).is_allowed(recipe)
}
