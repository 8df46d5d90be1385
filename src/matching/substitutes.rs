/// Replacement ideas for common ingredients, keyed by French and English
/// names. "boeuf" must come before "oeuf".
const ALTERNATIVES: &[(&str, &[&str])] = &[
    ("beef", &["lentilles", "champignons", "protéines de soja"]),
    ("boeuf", &["lentilles", "champignons", "protéines de soja"]),
    ("butter", &["huile d'olive", "margarine", "huile de coco"]),
    ("beurre", &["huile d'olive", "margarine", "huile de coco"]),
    ("cream", &["lait de coco", "crème de soja", "yaourt"]),
    ("crème", &["lait de coco", "crème de soja", "yaourt"]),
    ("milk", &["lait d'amande", "lait de soja", "lait d'avoine"]),
    ("lait", &["lait d'amande", "lait de soja", "lait d'avoine"]),
    ("egg", &["compote de pommes", "graines de chia", "banane"]),
    ("oeuf", &["compote de pommes", "graines de chia", "banane"]),
    ("flour", &["farine de riz", "fécule de maïs", "farine de sarrasin"]),
    ("farine", &["farine de riz", "fécule de maïs", "farine de sarrasin"]),
    ("chicken", &["tofu", "tempeh", "seitan"]),
    ("poulet", &["tofu", "tempeh", "seitan"]),
    ("rice", &["quinoa", "boulgour", "couscous"]),
    ("riz", &["quinoa", "boulgour", "couscous"]),
    ("pasta", &["nouilles de riz", "spirales de courgette", "gnocchi"]),
    ("pâtes", &["nouilles de riz", "spirales de courgette", "gnocchi"]),
];

/// Alternatives for a missing ingredient, or an empty slice.
///
/// The first table key that is a substring of the lowercase ingredient, or
/// contains it, wins.
///
/// ```
/// use frigo_match::matching::substitutes::alternatives_for;
///
/// assert_eq!(alternatives_for("Beurre doux")[0], "huile d'olive");
/// assert!(alternatives_for("safran").is_empty());
/// ```
#[must_use]
pub fn alternatives_for(missing_ingredient: &str) -> &'static [&'static str] {
    let key = crate::lexicon::normalize::fold_case(missing_ingredient.trim());
    if key.is_empty() {
        return &[];
    }

    ALTERNATIVES
        .iter()
        .find(|(name, _)| key.contains(name) || name.contains(key.as_str()))
        .map(|(_, alternatives)| *alternatives)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_both_directions() {
        assert_eq!(alternatives_for("crème fraîche")[1], "crème de soja");
        // Ingredient shorter than the key
        assert_eq!(alternatives_for("pâte")[2], "gnocchi");
        assert_eq!(alternatives_for("Bœuf haché")[0], "lentilles");
    }

    #[test]
    fn test_unknown_and_blank() {
        assert!(alternatives_for("cardamome").is_empty());
        assert!(alternatives_for("   ").is_empty());
    }
}
