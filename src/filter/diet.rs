use serde::{Deserialize, Serialize};

use super::normalize_key;

/// Meat and charcuterie words shared by the vegetarian-style diets
const MEAT: &[&str] = &[
    "chicken", "beef", "pork", "lamb", "poulet", "boeuf", "porc", "agneau", "viande", "meat",
    "lardon", "saucisse", "saucisson", "jambon", "bacon", "canard", "dinde", "veau", "lapin",
    "steak", "merguez", "chorizo", "rosette", "rillettes", "pâté", "gibier", "andouille",
    "boudin", "pancetta", "prosciutto", "salami",
];

const FISH: &[&str] = &["fish", "poisson"];

const ANIMAL_PRODUCTS: &[&str] = &[
    "milk", "cream", "cheese", "butter", "egg", "honey", "lait", "crème", "fromage", "beurre",
    "oeuf", "miel", "yaourt", "yogurt", "mozzarella", "emmental", "comté", "camembert",
];

const RED_MEAT: &[&str] = &["beef", "boeuf", "lamb", "agneau", "veau", "steak", "gibier"];

pub(crate) const GLUTEN: &[&str] = &[
    "wheat", "flour", "bread", "pasta", "blé", "farine", "pain", "pâte",
];

pub(crate) const LACTOSE: &[&str] = &[
    "milk", "cream", "cheese", "butter", "lait", "crème", "fromage", "beurre",
];

const HALAL: &[&str] = &[
    "pork", "porc", "ham", "lard", "bacon", "jambon", "saucisson", "rosette", "rillettes",
    "chorizo", "andouille", "boudin", "pancetta", "prosciutto", "salami", "wine", "vin",
    "alcool", "alcohol", "beer", "bière",
];

const KOSHER: &[&str] = &["pork", "porc", "shellfish", "crustacé", "lardon"];

/// A dietary regime. Each one rejects recipes whose ingredient names or
/// title contain any of its keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Diet {
    Vegetarian,
    Vegan,
    PescoVegetarian,
    Flexitarian,
    GlutenFree,
    LactoseFree,
    Halal,
    Kosher,
    /// Keywords come from the caller's exclusion categories
    Custom,
}

impl Diet {
    pub const ALL: [Self; 9] = [
        Self::Vegetarian,
        Self::Vegan,
        Self::PescoVegetarian,
        Self::Flexitarian,
        Self::GlutenFree,
        Self::LactoseFree,
        Self::Halal,
        Self::Kosher,
        Self::Custom,
    ];

    /// Parse a French or English diet key; case, accents, spaces and hyphens
    /// are ignored.
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        match normalize_key(key).as_str() {
            "vegetarien" | "vegetarienne" | "vegetarian" => Some(Self::Vegetarian),
            "vegan" | "vegane" | "vegetalien" => Some(Self::Vegan),
            "pesco_vegetarien" | "pesco_vegetarian" | "pescetarien" | "pescatarian" => {
                Some(Self::PescoVegetarian)
            }
            "flexitarien" | "flexitarian" => Some(Self::Flexitarian),
            "sans_gluten" | "gluten_free" => Some(Self::GlutenFree),
            "sans_lactose" | "lactose_free" => Some(Self::LactoseFree),
            "halal" => Some(Self::Halal),
            "casher" | "kasher" | "kosher" => Some(Self::Kosher),
            "regime_personnalise" | "personnalise" | "custom" => Some(Self::Custom),
            _ => None,
        }
    }

    /// Keyword lists whose union this diet excludes. Empty for
    /// [`Diet::Custom`].
    #[must_use]
    pub fn keyword_sets(self) -> &'static [&'static [&'static str]] {
        match self {
            Self::Vegetarian => &[MEAT, FISH],
            Self::Vegan => &[MEAT, FISH, ANIMAL_PRODUCTS],
            Self::PescoVegetarian => &[MEAT],
            Self::Flexitarian => &[RED_MEAT],
            Self::GlutenFree => &[GLUTEN],
            Self::LactoseFree => &[LACTOSE],
            Self::Halal => &[HALAL],
            Self::Kosher => &[KOSHER],
            Self::Custom => &[],
        }
    }

    /// Whether `blob` (folded ingredient names and title) contains a keyword
    #[must_use]
    pub fn excludes(self, blob: &str) -> bool {
        self.keyword_sets()
            .iter()
            .flat_map(|set| set.iter())
            .any(|kw| blob.contains(kw))
    }
}

impl std::fmt::Display for Diet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Vegetarian => write!(f, "végétarien"),
            Self::Vegan => write!(f, "végan"),
            Self::PescoVegetarian => write!(f, "pesco-végétarien"),
            Self::Flexitarian => write!(f, "flexitarien"),
            Self::GlutenFree => write!(f, "sans gluten"),
            Self::LactoseFree => write!(f, "sans lactose"),
            Self::Halal => write!(f, "halal"),
            Self::Kosher => write!(f, "casher"),
            Self::Custom => write!(f, "régime personnalisé"),
        }
    }
}
