use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Title given to recipes that arrive without one
pub const UNTITLED_RECIPE: &str = "Recette sans nom";

/// One line of a recipe: a free-text name plus an opaque measure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub name: String,

    /// Passed through untouched; never used for matching
    #[serde(default, deserialize_with = "lenient_measure")]
    pub measure: Option<String>,
}

impl RecipeIngredient {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            measure: None,
        }
    }

    #[must_use]
    pub fn with_measure(mut self, measure: impl Into<String>) -> Self {
        self.measure = Some(measure.into());
        self
    }
}

/// A recipe from the corpus.
///
/// Deserialization is tolerant: malformed metadata becomes `None`, and an
/// ingredient list that cannot be read becomes empty (such recipes are
/// skipped by the ranker rather than failing the whole corpus).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<i64>,

    #[serde(default = "untitled", alias = "name", deserialize_with = "lenient_title")]
    pub title: String,

    /// Order-significant
    #[serde(
        default,
        alias = "ingredients_json",
        deserialize_with = "lenient_ingredients"
    )]
    pub ingredients: Vec<RecipeIngredient>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub instructions: String,

    /// Minutes
    #[serde(default, alias = "prep_time", deserialize_with = "lenient_count")]
    pub prep_time: Option<u32>,

    /// Minutes
    #[serde(default, alias = "cook_time", deserialize_with = "lenient_count")]
    pub cook_time: Option<u32>,

    #[serde(default, deserialize_with = "lenient_count")]
    pub servings: Option<u32>,

    #[serde(default, alias = "image_url", deserialize_with = "lenient_string")]
    pub image_url: Option<String>,

    #[serde(default, alias = "source_url", deserialize_with = "lenient_string")]
    pub source_url: Option<String>,

    #[serde(default, alias = "tags_json", deserialize_with = "lenient_string_list")]
    pub tags: Vec<String>,

    #[serde(
        default,
        alias = "diet_tags",
        alias = "diet_tags_json",
        deserialize_with = "lenient_string_list"
    )]
    pub diet_tags: Vec<String>,
}

impl Recipe {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            ingredients: Vec::new(),
            instructions: String::new(),
            prep_time: None,
            cook_time: None,
            servings: None,
            image_url: None,
            source_url: None,
            tags: Vec::new(),
            diet_tags: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Replace the ingredient list with measure-less ingredients
    #[must_use]
    pub fn with_ingredients<S: AsRef<str>>(mut self, names: &[S]) -> Self {
        self.ingredients = names
            .iter()
            .map(|n| RecipeIngredient::new(n.as_ref()))
            .collect();
        self
    }

    #[must_use]
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    pub fn ingredient_names(&self) -> impl Iterator<Item = &str> {
        self.ingredients.iter().map(|i| i.name.as_str())
    }

    /// A recipe the ranker can score
    #[must_use]
    pub fn has_ingredients(&self) -> bool {
        !self.ingredients.is_empty()
    }
}

fn untitled() -> String {
    UNTITLED_RECIPE.to_string()
}

/// Read an ingredient list from any JSON shape seen in the wild.
///
/// Accepts an array of names, an array of `{name, measure}` objects, a mix of
/// both, or a string holding one of those encoded as JSON. Entries without a
/// usable name are dropped; anything else yields an empty list.
#[must_use]
pub fn ingredients_from_value(value: &Value) -> Vec<RecipeIngredient> {
    match value {
        Value::Array(items) => items.iter().filter_map(ingredient_from_value).collect(),
        Value::String(encoded) => match serde_json::from_str::<Value>(encoded) {
            Ok(inner @ Value::Array(_)) => ingredients_from_value(&inner),
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

fn ingredient_from_value(value: &Value) -> Option<RecipeIngredient> {
    let (name, measure) = match value {
        Value::String(name) => (name.as_str(), None),
        Value::Object(fields) => (
            fields.get("name")?.as_str()?,
            fields.get("measure").and_then(text_from_value),
        ),
        _ => return None,
    };

    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    Some(RecipeIngredient {
        name: name.to_string(),
        measure,
    })
}

fn text_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Leading integer of a number or of a string like "30 min"
fn count_from_value(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite() && *f >= 0.0)
                    .map(round_to_u64)
            })
            .and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => {
            let digits: String = s.trim().chars().take_while(char::is_ascii_digit).collect();
            digits.parse().ok()
        }
        _ => None,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Callers filter negatives
fn round_to_u64(f: f64) -> u64 {
    f.round() as u64
}

fn lenient_ingredients<'de, D>(deserializer: D) -> Result<Vec<RecipeIngredient>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(ingredients_from_value(&value))
}

fn lenient_measure<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(text_from_value(&value))
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    })
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        _ => String::new(),
    })
}

fn lenient_title<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(text_from_value(&value).unwrap_or_else(untitled))
}

fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(count_from_value(&value))
}

fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

fn lenient_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(string_list_from_value(&value))
}

fn string_list_from_value(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().filter_map(text_from_value).collect(),
        Value::String(encoded) => match serde_json::from_str::<Value>(encoded) {
            Ok(inner @ Value::Array(_)) => string_list_from_value(&inner),
            _ => encoded
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect(),
        },
        _ => Vec::new(),
    }
}
