//! Weekly menu generation and shopping lists.
//!
//! Menus are ranked with the coarse [`quick_score`](crate::matching::quick::quick_score),
//! which is cheap enough to run over a whole corpus. Shopping lists use the
//! full [`IngredientMatcher`](crate::matching::IngredientMatcher), so that
//! "spaghetti" in the fridge keeps "pâtes" off the list.

pub mod menu;
pub mod shopping;

pub use menu::{plan_week, week_start, MealType, MenuEntry, WeeklyMenu};
pub use shopping::{shopping_list, ShoppingItem};
