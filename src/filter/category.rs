use serde::{Deserialize, Serialize};

use super::normalize_key;
use crate::lexicon::normalize::fold_case;

/// Food families a user can exclude under the custom diet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionCategory {
    RedMeat,
    WhiteMeat,
    Pork,
    Charcuterie,
    Fish,
    Shellfish,
    Eggs,
    Dairy,
    Gluten,
    Alcohol,
    Sugar,
    Fried,
}

impl ExclusionCategory {
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        match normalize_key(key).as_str() {
            "viande_rouge" | "red_meat" => Some(Self::RedMeat),
            "viande_blanche" | "white_meat" | "poultry" => Some(Self::WhiteMeat),
            "porc" | "pork" => Some(Self::Pork),
            "charcuterie" | "cured_meat" => Some(Self::Charcuterie),
            "poisson" | "fish" => Some(Self::Fish),
            "fruits_de_mer" | "shellfish" | "seafood" => Some(Self::Shellfish),
            "oeufs" | "eggs" => Some(Self::Eggs),
            "produits_laitiers" | "dairy" => Some(Self::Dairy),
            "gluten" => Some(Self::Gluten),
            "alcool" | "alcohol" => Some(Self::Alcohol),
            "sucre" | "sugar" => Some(Self::Sugar),
            "friture" | "fried" => Some(Self::Fried),
            _ => None,
        }
    }

    #[must_use]
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::RedMeat => &["beef", "boeuf", "lamb", "agneau", "veau", "steak", "gibier"],
            Self::WhiteMeat => &["chicken", "poulet", "dinde", "lapin", "canard"],
            Self::Pork => &[
                "pork", "porc", "lardon", "bacon", "jambon", "saucisson", "saucisse", "chorizo",
                "rosette", "andouille", "boudin", "pancetta", "rillettes",
            ],
            Self::Charcuterie => &[
                "lardon", "saucisson", "jambon", "bacon", "chorizo", "rosette", "rillettes",
                "pâté", "andouille", "boudin", "salami", "pancetta", "prosciutto", "merguez",
            ],
            Self::Fish => &[
                "fish", "poisson", "saumon", "thon", "cabillaud", "sardine", "truite",
                "maquereau", "dorade", "bar", "anchois",
            ],
            Self::Shellfish => &[
                "shrimp", "crab", "lobster", "crevette", "crabe", "homard", "moule", "huître",
                "coquille", "langoustine", "crustacé",
            ],
            Self::Eggs => &["egg", "oeuf"],
            Self::Dairy => &[
                "milk", "cream", "cheese", "butter", "lait", "crème", "fromage", "beurre",
                "yaourt", "mozzarella", "emmental", "comté", "camembert",
            ],
            Self::Gluten => super::diet::GLUTEN,
            Self::Alcohol => &[
                "wine", "vin", "beer", "bière", "alcool", "alcohol", "rhum", "vodka", "whisky",
            ],
            Self::Sugar => &["sugar", "sucre", "sirop", "caramel", "chocolat"],
            Self::Fried => &["frit", "friture", "beignet", "panure"],
        }
    }
}

/// Expand category names into concrete keywords.
///
/// Unrecognized names are kept as literal keywords (folded to lowercase).
/// The result is deduplicated and keeps first-seen order.
#[must_use]
pub fn expand_custom_exclusions<S: AsRef<str>>(categories: &[S]) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();
    let mut push = |kw: String| {
        if !kw.is_empty() && !keywords.contains(&kw) {
            keywords.push(kw);
        }
    };

    for category in categories {
        let category = category.as_ref();
        match ExclusionCategory::parse(category) {
            Some(known) => known.keywords().iter().for_each(|kw| push((*kw).to_string())),
            None => push(fold_case(category.trim())),
        }
    }

    keywords
}
