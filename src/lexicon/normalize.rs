use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Leading determiners stripped by [`normalize`], longest first so that
/// "de la " wins over "de ".
const DETERMINERS: &[&str] = &[
    "de la ", "les ", "des ", "une ", "le ", "la ", "du ", "de ", "un ", "l'", "d'",
];

/// Tokens that never carry meaning on their own in a French product name.
const STOP_WORDS: &[&str] = &[
    "de", "du", "la", "le", "les", "l", "d", "a", "au", "aux", "en", "et", "un", "une", "des",
];

/// A product or ingredient name after normalization: lowercase,
/// accent-stripped, without its leading determiner.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CanonicalTerm(String);

impl CanonicalTerm {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for CanonicalTerm {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CanonicalTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Canonicalize free text.
///
/// 1. Lowercase and trim
/// 2. Fold typographic apostrophes and expand the `œ`/`æ` ligatures
/// 3. Strip diacritics (NFKD, combining marks dropped)
/// 4. Strip one leading determiner (`le`, `la`, `les`, `l'`, `du`, `de la`, ...)
/// 5. Trim again
///
/// ```
/// use frigo_match::lexicon::normalize::normalize;
///
/// assert_eq!(normalize("Les Pâtes").as_str(), "pates");
/// assert_eq!(normalize("l'Huile d'olive").as_str(), "huile d'olive");
/// assert_eq!(normalize("Bœuf").as_str(), "boeuf");
/// ```
#[must_use]
pub fn normalize(text: &str) -> CanonicalTerm {
    let lowered = text.trim().to_lowercase();
    let folded = fold_apostrophes_and_ligatures(&lowered);
    let stripped = strip_diacritics(&folded);
    let without_determiner = strip_determiner(&stripped);
    CanonicalTerm(without_determiner.trim().to_string())
}

/// Remove accents while keeping base letters: "crème brûlée" -> "creme brulee".
#[must_use]
pub fn strip_diacritics(text: &str) -> String {
    text.nfkd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Lowercase with apostrophes and ligatures folded, accents kept:
/// "Bœuf Bourguignon" -> "boeuf bourguignon".
#[must_use]
pub fn fold_case(text: &str) -> String {
    fold_apostrophes_and_ligatures(&text.to_lowercase())
}

fn fold_apostrophes_and_ligatures(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\u{2019}' | '\u{02BC}' | '`' => out.push('\''),
            'œ' => out.push_str("oe"),
            'æ' => out.push_str("ae"),
            other => out.push(other),
        }
    }
    out
}

fn strip_determiner(text: &str) -> &str {
    DETERMINERS
        .iter()
        .find_map(|det| text.strip_prefix(det))
        .unwrap_or(text)
}

/// Content-bearing words of an already normalized text.
///
/// Splits on whitespace, apostrophes and hyphens, then drops stop words and
/// single-character tokens.
#[must_use]
pub fn root_words(text: &str) -> BTreeSet<String> {
    text.split(|c: char| c.is_whitespace() || c == '\'' || c == '-')
        .filter(|w| !w.is_empty())
        .filter(|w| !STOP_WORDS.contains(w))
        .filter(|w| w.chars().count() > 1)
        .map(str::to_string)
        .collect()
}

/// Heuristic French singular: `chevaux` -> `cheval`, `tomates` -> `tomate`.
///
/// Irregular nouns are knowingly mishandled; words ending in `ss` are kept.
#[must_use]
pub fn singularize(word: &str) -> String {
    if word.ends_with("aux") && word.chars().count() > 4 {
        return format!("{}al", &word[..word.len() - 3]);
    }
    if word.ends_with('s') && !word.ends_with("ss") {
        return word[..word.len() - 1].to_string();
    }
    word.to_string()
}

/// Singularize every whitespace-separated word of a phrase:
/// "pommes de terre" -> "pomme de terre".
#[must_use]
pub fn singularize_phrase(text: &str) -> String {
    text.split_whitespace()
        .map(singularize)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_case_and_accents() {
        assert_eq!(normalize("Café").as_str(), "cafe");
        assert_eq!(normalize("CRÈME FRAÎCHE").as_str(), "creme fraiche");
        assert_eq!(normalize("  Pâtes  ").as_str(), "pates");
    }

    #[test]
    fn test_normalize_strips_one_determiner() {
        assert_eq!(normalize("la tomate").as_str(), "tomate");
        assert_eq!(normalize("de la crème").as_str(), "creme");
        assert_eq!(normalize("des oeufs").as_str(), "oeufs");
        assert_eq!(normalize("l'ail").as_str(), "ail");
        assert_eq!(normalize("d'olive").as_str(), "olive");
        assert_eq!(normalize("une courgette").as_str(), "courgette");
        // Applied once only
        assert_eq!(normalize("le la").as_str(), "la");
        // Not a determiner when glued to the word
        assert_eq!(normalize("lentilles").as_str(), "lentilles");
        assert_eq!(normalize("dessert").as_str(), "dessert");
    }

    #[test]
    fn test_normalize_typographic_apostrophe_and_ligature() {
        assert_eq!(normalize("L’huile").as_str(), "huile");
        assert_eq!(normalize("œufs").as_str(), "oeufs");
        assert_eq!(normalize("bœuf"), normalize("boeuf"));
    }

    #[test]
    fn test_root_words() {
        let words = root_words("gousse d'ail");
        assert_eq!(
            words,
            ["ail", "gousse"].iter().map(|s| (*s).to_string()).collect()
        );

        let words = root_words("pomme de terre");
        assert!(words.contains("pomme"));
        assert!(words.contains("terre"));
        assert!(!words.contains("de"));

        let words = root_words("lait demi-ecreme");
        assert_eq!(words.len(), 3);
        assert!(words.contains("demi"));

        assert!(root_words("a b c").is_empty());
    }

    #[test]
    fn test_singularize() {
        assert_eq!(singularize("tomates"), "tomate");
        assert_eq!(singularize("animaux"), "animal");
        assert_eq!(singularize("noix"), "noix");
        assert_eq!(singularize("cress"), "cress");
        // Too short for the -aux rule, falls through unchanged
        assert_eq!(singularize("faux"), "faux");
        assert_eq!(singularize(""), "");
    }

    #[test]
    fn test_singularize_phrase() {
        assert_eq!(singularize_phrase("pommes de terre"), "pomme de terre");
        assert_eq!(singularize_phrase("pates brisees"), "pate brisee");
    }

    #[test]
    fn test_fold_case_keeps_accents() {
        assert_eq!(fold_case("Bœuf Braisé"), "boeuf braisé");
        assert_eq!(fold_case("L\u{2019}Huile"), "l'huile");
    }
}
