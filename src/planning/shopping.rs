use std::borrow::Borrow;
use std::collections::HashMap;

use serde::Serialize;

use crate::core::recipe::Recipe;
use crate::matching::matcher::{IngredientMatcher, PreparedTerm};

/// An ingredient to buy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    /// Name as first written in the recipes
    pub name: String,
    /// Measure of the first occurrence
    pub measure: Option<String>,
    /// Titles of the recipes that need it, in encounter order
    pub needed_for: Vec<String>,
}

/// Ingredients of `recipes` that no fridge item satisfies.
///
/// Ingredients sharing a canonical form are listed once, under the name and
/// measure of their first occurrence.
#[must_use]
pub fn shopping_list<R, S>(
    recipes: &[R],
    fridge: &[S],
    matcher: &IngredientMatcher<'_>,
) -> Vec<ShoppingItem>
where
    R: Borrow<Recipe>,
    S: AsRef<str>,
{
    let fridge: Vec<PreparedTerm> = fridge
        .iter()
        .map(|s| PreparedTerm::new(s.as_ref()))
        .filter(|t| !t.is_blank())
        .collect();

    let mut items: Vec<ShoppingItem> = Vec::new();
    let mut by_canonical: HashMap<String, usize> = HashMap::new();

    for recipe in recipes {
        let recipe = recipe.borrow();
        for ingredient in &recipe.ingredients {
            let term = PreparedTerm::new(&ingredient.name);
            if term.is_blank() || matcher.first_match(&fridge, &term).is_some() {
                continue;
            }

            let key = term.canonical().as_str().to_string();
            if let Some(&index) = by_canonical.get(&key) {
                let needed_for = &mut items[index].needed_for;
                if !needed_for.contains(&recipe.title) {
                    needed_for.push(recipe.title.clone());
                }
            } else {
                by_canonical.insert(key, items.len());
                items.push(ShoppingItem {
                    name: ingredient.name.clone(),
                    measure: ingredient.measure.clone(),
                    needed_for: vec![recipe.title.clone()],
                });
            }
        }
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::recipe::RecipeIngredient;
    use crate::lexicon::resolver::LexicalResolver;

    #[test]
    fn test_missing_ingredients_deduplicated() {
        let mut quiche = Recipe::new("Quiche");
        quiche.ingredients = vec![
            RecipeIngredient::new("Lardons").with_measure("200 g"),
            RecipeIngredient::new("oeufs").with_measure("3"),
            RecipeIngredient::new("crème fraîche"),
        ];
        let mut salade = Recipe::new("Salade");
        salade.ingredients = vec![
            RecipeIngredient::new("les lardons").with_measure("100 g"),
            RecipeIngredient::new("salade"),
        ];

        let resolver = LexicalResolver::french();
        let matcher = IngredientMatcher::new(&resolver);
        let list = shopping_list(&[quiche, salade], &["oeufs", "creme fraiche"], &matcher);

        let names: Vec<_> = list.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Lardons", "salade"]);
        assert_eq!(list[0].measure.as_deref(), Some("200 g"));
        assert_eq!(list[0].needed_for, vec!["Quiche", "Salade"]);
    }

    #[test]
    fn test_empty_fridge_needs_everything() {
        let recipes = vec![Recipe::new("Riz").with_ingredients(&["riz", "sel"])];
        let resolver = LexicalResolver::french();
        let matcher = IngredientMatcher::new(&resolver);
        let list = shopping_list(&recipes, &[] as &[&str], &matcher);
        assert_eq!(list.len(), 2);
    }
}
