//! Whole-recipe rejection by diet, allergen and custom exclusion keywords.
//!
//! Every active rule is a keyword list searched as substrings in a lowercase
//! text blob built from the recipe:
//!
//! | Rule                     | Searched text                  |
//! |--------------------------|--------------------------------|
//! | [`Diet`]                 | ingredient names + title       |
//! | [`Diet::Custom`]         | ingredient names + title       |
//! | [`Allergen`]             | ingredient names only          |
//!
//! Rules combine with logical AND. Keys are accepted in French or English,
//! and unknown keys apply no keywords.

pub mod allergen;
pub mod category;
pub mod diet;
pub mod profile;

pub use allergen::Allergen;
pub use category::{expand_custom_exclusions, ExclusionCategory};
pub use diet::Diet;
pub use profile::{is_allowed, DietProfile};

use crate::lexicon::normalize::strip_diacritics;

/// Fold a user-facing key: lowercase, no accents, `_` for spaces and hyphens
pub(crate) fn normalize_key(key: &str) -> String {
    strip_diacritics(&key.trim().to_lowercase())
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .collect()
}
