use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::core::recipe::Recipe;
use crate::filter::DietProfile;
use crate::matching::quick::quick_score;

/// Title of a slot no recipe could fill
pub const FREE_MEAL: &str = "Repas libre";

pub const DAYS_PER_WEEK: u8 = 7;

/// Default number of servings per planned meal
pub const DEFAULT_SERVINGS: u32 = 4;

/// Monday of the week containing `date`
#[must_use]
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Lunch,
    Dinner,
}

impl MealType {
    /// Meals planned each day, in order
    pub const DAILY: [Self; 2] = [Self::Lunch, Self::Dinner];
}

impl std::fmt::Display for MealType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lunch => write!(f, "déjeuner"),
            Self::Dinner => write!(f, "dîner"),
        }
    }
}

/// One planned meal
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuEntry {
    pub date: NaiveDate,
    /// 0 = Monday
    pub day_of_week: u8,
    pub meal_type: MealType,
    pub recipe_id: Option<i64>,
    pub recipe_title: String,
    pub servings: u32,
    /// Quick score (0 to 100) of the recipe against the fridge
    pub match_score: Option<f64>,

    /// Position of the recipe in the slice given to [`plan_week`]
    #[serde(skip)]
    recipe_index: Option<usize>,
}

impl MenuEntry {
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.recipe_index.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyMenu {
    pub week_start: NaiveDate,
    pub servings: u32,
    pub entries: Vec<MenuEntry>,
}

impl WeeklyMenu {
    /// Distinct planned recipes in menu order. `recipes` must be the slice
    /// the menu was planned from.
    #[must_use]
    pub fn recipes<'r>(&self, recipes: &'r [Recipe]) -> Vec<&'r Recipe> {
        let mut seen = Vec::new();
        for index in self.entries.iter().filter_map(|e| e.recipe_index) {
            if !seen.contains(&index) {
                seen.push(index);
            }
        }
        seen.into_iter().filter_map(|i| recipes.get(i)).collect()
    }
}

/// Plan lunch and dinner for the seven days starting at `week_start`.
///
/// Recipes allowed by `profile` are ordered by quick score against the fridge
/// (best first, ties in corpus order) and assigned to the fourteen slots in
/// turn, wrapping around when there are fewer than fourteen. With no allowed
/// recipe every slot is a free meal.
#[must_use]
pub fn plan_week<S: AsRef<str>>(
    recipes: &[Recipe],
    fridge: &[S],
    profile: &DietProfile,
    week_start: NaiveDate,
    servings: u32,
) -> WeeklyMenu {
    let mut ranked: Vec<(usize, f64)> = recipes
        .iter()
        .enumerate()
        .filter(|(_, r)| profile.is_allowed(r))
        .map(|(i, r)| (i, quick_score(&r.ingredients, fridge).score))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    tracing::debug!(candidates = ranked.len(), "Planning weekly menu");

    let mut entries = Vec::with_capacity(usize::from(DAYS_PER_WEEK) * MealType::DAILY.len());
    let mut cursor = ranked.iter().cycle();

    for day in 0..DAYS_PER_WEEK {
        let date = week_start + Duration::days(i64::from(day));
        for meal_type in MealType::DAILY {
            let entry = match cursor.next() {
                Some(&(index, score)) => MenuEntry {
                    date,
                    day_of_week: day,
                    meal_type,
                    recipe_id: recipes[index].id,
                    recipe_title: recipes[index].title.clone(),
                    servings,
                    match_score: Some(score),
                    recipe_index: Some(index),
                },
                None => MenuEntry {
                    date,
                    day_of_week: day,
                    meal_type,
                    recipe_id: None,
                    recipe_title: FREE_MEAL.to_string(),
                    servings,
                    match_score: None,
                    recipe_index: None,
                },
            };
            entries.push(entry);
        }
    }

    WeeklyMenu {
        week_start,
        servings,
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: &[&str] = &[];

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_week_start_is_monday() {
        // 2024-05-08 is a Wednesday
        assert_eq!(week_start(date("2024-05-08")), date("2024-05-06"));
        assert_eq!(week_start(date("2024-05-06")), date("2024-05-06"));
        assert_eq!(week_start(date("2024-05-12")), date("2024-05-06"));
    }

    #[test]
    fn test_fourteen_slots_cycle_by_score() {
        let recipes = vec![
            Recipe::new("Soupe").with_id(1).with_ingredients(&["poireaux", "navets"]),
            Recipe::new("Salade").with_id(2).with_ingredients(&["tomates", "sel"]),
        ];
        let menu = plan_week(
            &recipes,
            &["tomates"],
            &DietProfile::default(),
            date("2024-05-06"),
            DEFAULT_SERVINGS,
        );

        assert_eq!(menu.entries.len(), 14);
        assert_eq!(menu.entries[0].recipe_title, "Salade");
        assert_eq!(menu.entries[0].meal_type, MealType::Lunch);
        assert_eq!(menu.entries[1].recipe_title, "Soupe");
        assert_eq!(menu.entries[1].meal_type, MealType::Dinner);
        assert_eq!(menu.entries[2].recipe_title, "Salade");
        assert_eq!(menu.entries[13].date, date("2024-05-12"));
        assert_eq!(menu.entries[13].day_of_week, 6);

        let planned: Vec<_> = menu.recipes(&recipes).iter().map(|r| r.id).collect();
        assert_eq!(planned, vec![Some(2), Some(1)]);
    }

    #[test]
    fn test_profile_excludes_recipes() {
        let recipes = vec![Recipe::new("Poulet rôti").with_ingredients(&["poulet"])];
        let profile = DietProfile::from_keys(&["végétarien"], NONE, NONE);
        let menu = plan_week(&recipes, NONE, &profile, date("2024-05-06"), 2);

        assert!(menu.entries.iter().all(MenuEntry::is_free));
        assert!(menu.entries.iter().all(|e| e.recipe_title == FREE_MEAL));
        assert!(menu.recipes(&recipes).is_empty());
    }

    #[test]
    fn test_serialization_skips_internal_index() {
        let recipes = vec![Recipe::new("Riz").with_ingredients(&["riz"])];
        let menu = plan_week(&recipes, &["riz"], &DietProfile::default(), date("2024-05-06"), 4);
        let json = serde_json::to_value(&menu).unwrap();

        assert_eq!(json["weekStart"], "2024-05-06");
        assert_eq!(json["entries"][0]["mealType"], "lunch");
        assert!(json["entries"][0]["recipeId"].is_null());
        assert!(json["entries"][0].get("recipeIndex").is_none());
    }
}
