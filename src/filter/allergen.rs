use serde::{Deserialize, Serialize};

use super::diet::{GLUTEN, LACTOSE};
use super::normalize_key;

/// One of the fourteen regulated allergens. Matched against ingredient names
/// only, never the title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Allergen {
    Gluten,
    Lactose,
    Peanuts,
    TreeNuts,
    Egg,
    Fish,
    Shellfish,
    Soy,
    Celery,
    Mustard,
    Sesame,
    Sulfites,
    Lupin,
    Molluscs,
}

impl Allergen {
    pub const ALL: [Self; 14] = [
        Self::Gluten,
        Self::Lactose,
        Self::Peanuts,
        Self::TreeNuts,
        Self::Egg,
        Self::Fish,
        Self::Shellfish,
        Self::Soy,
        Self::Celery,
        Self::Mustard,
        Self::Sesame,
        Self::Sulfites,
        Self::Lupin,
        Self::Molluscs,
    ];

    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        match normalize_key(key).as_str() {
            "gluten" => Some(Self::Gluten),
            "lactose" => Some(Self::Lactose),
            "arachides" | "arachide" | "peanuts" | "peanut" => Some(Self::Peanuts),
            "fruits_a_coque" | "tree_nuts" | "nuts" => Some(Self::TreeNuts),
            "oeufs" | "oeuf" | "eggs" | "egg" => Some(Self::Egg),
            "poisson" | "poissons" | "fish" => Some(Self::Fish),
            "crustaces" | "shellfish" => Some(Self::Shellfish),
            "soja" | "soy" => Some(Self::Soy),
            "celeri" | "celery" => Some(Self::Celery),
            "moutarde" | "mustard" => Some(Self::Mustard),
            "sesame" => Some(Self::Sesame),
            "sulfites" | "sulphites" => Some(Self::Sulfites),
            "lupin" => Some(Self::Lupin),
            "mollusques" | "molluscs" | "mollusks" => Some(Self::Molluscs),
            _ => None,
        }
    }

    #[must_use]
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Gluten => GLUTEN,
            Self::Lactose => LACTOSE,
            Self::Peanuts => &["peanut", "arachide", "cacahuète"],
            Self::TreeNuts => &["almond", "walnut", "hazelnut", "amande", "noix", "noisette"],
            Self::Egg => &["egg", "oeuf"],
            Self::Fish => &["fish", "poisson"],
            Self::Shellfish => &["shrimp", "crab", "lobster", "crevette", "crabe", "homard"],
            Self::Soy => &["soy", "soja", "tofu"],
            Self::Celery => &["celery", "céleri"],
            Self::Mustard => &["mustard", "moutarde"],
            Self::Sesame => &["sesame", "sésame"],
            Self::Sulfites => &["wine", "vin", "sulfite"],
            Self::Lupin => &["lupin"],
            Self::Molluscs => &["mussel", "oyster", "moule", "huître", "mollusque"],
        }
    }

    /// Whether `blob` (folded ingredient names) contains a keyword
    #[must_use]
    pub fn excludes(self, blob: &str) -> bool {
        self.keywords().iter().any(|kw| blob.contains(kw))
    }
}

impl std::fmt::Display for Allergen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Gluten => "gluten",
            Self::Lactose => "lactose",
            Self::Peanuts => "arachides",
            Self::TreeNuts => "fruits à coque",
            Self::Egg => "oeufs",
            Self::Fish => "poisson",
            Self::Shellfish => "crustacés",
            Self::Soy => "soja",
            Self::Celery => "céleri",
            Self::Mustard => "moutarde",
            Self::Sesame => "sésame",
            Self::Sulfites => "sulfites",
            Self::Lupin => "lupin",
            Self::Molluscs => "mollusques",
        };
        write!(f, "{label}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_french_and_english() {
        assert_eq!(Allergen::parse("Fruits à coque"), Some(Allergen::TreeNuts));
        assert_eq!(Allergen::parse("tree-nuts"), Some(Allergen::TreeNuts));
        assert_eq!(Allergen::parse("Crustacés"), Some(Allergen::Shellfish));
        assert_eq!(Allergen::parse("kiwi"), None);
    }

    #[test]
    fn test_display_parses_back() {
        for allergen in Allergen::ALL {
            assert_eq!(Allergen::parse(&allergen.to_string()), Some(allergen), "{allergen}");
        }
    }

    #[test]
    fn test_keyword_substrings() {
        assert!(Allergen::Gluten.excludes("pâtes fraîches"));
        assert!(Allergen::Sulfites.excludes("vin blanc"));
        assert!(!Allergen::Peanuts.excludes("tomates"));
    }

    #[test]
    fn test_egg_keyword_found_inside_beef() {
        let blob = crate::lexicon::normalize::fold_case("Bœuf haché");
        assert!(Allergen::Egg.excludes(&blob));
        assert!(Allergen::Egg.excludes("boeuf"));
    }
}
