use std::collections::BTreeSet;

use serde::Serialize;

use crate::lexicon::normalize::{normalize, root_words, singularize, CanonicalTerm};
use crate::lexicon::resolver::LexicalResolver;
use crate::matching::similarity::similarity_ratio;
use crate::matching::strategy::{MatchStrategy, Verdict};

/// A fridge item or ingredient name with every derived form computed once
#[derive(Debug, Clone)]
pub struct PreparedTerm {
    raw: String,
    canonical: CanonicalTerm,
    singular: String,
    /// Root words as written
    roots: BTreeSet<String>,
    /// Root words, each singularized
    singular_roots: BTreeSet<String>,
}

impl PreparedTerm {
    #[must_use]
    pub fn new(text: &str) -> Self {
        let canonical = normalize(text);
        let singular = singularize(canonical.as_str());
        let roots = root_words(canonical.as_str());
        let singular_roots = roots.iter().map(|w| singularize(w)).collect();

        Self {
            raw: text.to_string(),
            canonical,
            singular,
            roots,
            singular_roots,
        }
    }

    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn canonical(&self) -> &CanonicalTerm {
        &self.canonical
    }

    #[must_use]
    pub fn singular(&self) -> &str {
        &self.singular
    }

    #[must_use]
    pub fn singular_roots(&self) -> &BTreeSet<String> {
        &self.singular_roots
    }

    /// Number of distinct root words as written
    #[must_use]
    pub fn root_count(&self) -> usize {
        self.roots.len()
    }

    /// The singularized root when the term has exactly one root word
    #[must_use]
    pub fn single_root(&self) -> Option<&str> {
        if self.roots.len() == 1 {
            self.singular_roots.iter().next().map(String::as_str)
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.canonical.is_empty()
    }
}

/// Why a pair did or did not match
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDecision {
    pub fridge_item: String,
    pub ingredient: String,
    pub fridge_canonical: String,
    pub ingredient_canonical: String,
    pub is_match: bool,
    /// Strategy that settled the pair; `None` when every stage passed
    pub decided_by: Option<MatchStrategy>,
    /// Fuzzy ratio, when the pipeline got that far
    pub similarity: Option<f64>,
}

/// Decides whether a fridge item satisfies a recipe ingredient.
///
/// Pure and deterministic: the answer depends only on the two texts and the
/// resolver tables.
#[derive(Debug, Clone, Copy)]
pub struct IngredientMatcher<'a> {
    resolver: &'a LexicalResolver,
}

impl<'a> IngredientMatcher<'a> {
    #[must_use]
    pub fn new(resolver: &'a LexicalResolver) -> Self {
        Self { resolver }
    }

    #[must_use]
    pub fn resolver(&self) -> &'a LexicalResolver {
        self.resolver
    }

    /// Match two raw texts
    #[must_use]
    pub fn matches(&self, fridge_item: &str, ingredient: &str) -> bool {
        self.matches_prepared(&PreparedTerm::new(fridge_item), &PreparedTerm::new(ingredient))
    }

    /// Match two prepared terms
    #[must_use]
    pub fn matches_prepared(&self, fridge_item: &PreparedTerm, ingredient: &PreparedTerm) -> bool {
        self.decide(fridge_item, ingredient).0
    }

    /// First fridge item, in the given order, that satisfies the ingredient
    #[must_use]
    pub fn first_match<'t>(
        &self,
        fridge: &'t [PreparedTerm],
        ingredient: &PreparedTerm,
    ) -> Option<&'t PreparedTerm> {
        fridge
            .iter()
            .find(|item| self.matches_prepared(item, ingredient))
    }

    /// Match two raw texts and report which strategy decided
    #[must_use]
    pub fn explain(&self, fridge_item: &str, ingredient: &str) -> MatchDecision {
        let fridge = PreparedTerm::new(fridge_item);
        let recipe = PreparedTerm::new(ingredient);
        let (is_match, decided_by) = self.decide(&fridge, &recipe);

        let reached_fuzzy = matches!(decided_by, None | Some(MatchStrategy::Fuzzy));
        let similarity = (reached_fuzzy && !fridge.is_blank() && !recipe.is_blank())
            .then(|| similarity_ratio(fridge.singular(), recipe.singular()));

        MatchDecision {
            fridge_item: fridge_item.to_string(),
            ingredient: ingredient.to_string(),
            fridge_canonical: fridge.canonical().to_string(),
            ingredient_canonical: recipe.canonical().to_string(),
            is_match,
            decided_by,
            similarity,
        }
    }

    fn decide(
        &self,
        fridge_item: &PreparedTerm,
        ingredient: &PreparedTerm,
    ) -> (bool, Option<MatchStrategy>) {
        if fridge_item.is_blank() || ingredient.is_blank() {
            return (false, None);
        }

        for strategy in MatchStrategy::PIPELINE {
            match strategy.evaluate(fridge_item, ingredient, self.resolver) {
                Verdict::Match => return (true, Some(strategy)),
                Verdict::NoMatch => return (false, Some(strategy)),
                Verdict::Continue => {}
            }
        }

        (false, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher_matches(fridge: &str, ingredient: &str) -> bool {
        let resolver = LexicalResolver::french();
        IngredientMatcher::new(&resolver).matches(fridge, ingredient)
    }

    #[test]
    fn test_exclusion_precedence() {
        assert!(!matcher_matches("pâtes", "pâte brisée"));
        assert!(!matcher_matches("pomme", "pomme de terre"));
        assert!(!matcher_matches("pommes", "pommes de terre"));
        assert!(!matcher_matches("pâte brisée", "pâtes"));
    }

    #[test]
    fn test_plural_equivalence() {
        assert!(matcher_matches("tomates", "tomate"));
        assert!(matcher_matches("Oeufs", "oeuf"));
        assert!(matcher_matches("carotte", "Carottes"));
    }

    #[test]
    fn test_synonym_equivalence() {
        assert!(matcher_matches("spaghetti", "pâtes"));
        assert!(matcher_matches("tagliatelles", "penne"));
        assert!(matcher_matches("emmental", "fromage râpé"));
        assert!(!matcher_matches("spaghetti", "riz"));
    }

    #[test]
    fn test_distinct_groups_never_match() {
        assert!(!matcher_matches("huile", "huile d'olive"));
        assert!(!matcher_matches("fromage", "fromage de chèvre"));
    }

    #[test]
    fn test_root_word_matching() {
        assert!(matcher_matches("ciboulette", "ciboulette fraîche"));
        assert!(matcher_matches("Lentilles corail bio", "lentilles"));
        assert!(!matcher_matches("sel", "poivre"));
    }

    #[test]
    fn test_fuzzy_fallback() {
        assert!(matcher_matches("courgete", "courgette"));
        assert!(!matcher_matches("citron", "cornichon"));
    }

    #[test]
    fn test_blank_never_matches() {
        assert!(!matcher_matches("", ""));
        assert!(!matcher_matches("   ", "tomate"));
        assert!(!matcher_matches("tomate", ""));
    }

    #[test]
    fn test_deterministic() {
        let resolver = LexicalResolver::french();
        let matcher = IngredientMatcher::new(&resolver);
        for _ in 0..3 {
            assert!(matcher.matches("tomates", "tomate"));
            assert!(!matcher.matches("pâtes", "pâte brisée"));
        }
    }

    #[test]
    fn test_explain_reports_strategy() {
        let resolver = LexicalResolver::french();
        let matcher = IngredientMatcher::new(&resolver);

        let decision = matcher.explain("pâtes", "pâte brisée");
        assert!(!decision.is_match);
        assert_eq!(decision.decided_by, Some(MatchStrategy::Exclusion));
        assert_eq!(decision.fridge_canonical, "pates");
        assert!(decision.similarity.is_none());

        let decision = matcher.explain("tomates", "tomate");
        assert_eq!(decision.decided_by, Some(MatchStrategy::Singular));

        let decision = matcher.explain("courgete", "courgette");
        assert_eq!(decision.decided_by, Some(MatchStrategy::Fuzzy));
        assert!(decision.similarity.unwrap() >= 0.82);

        let decision = matcher.explain("citron", "cornichon");
        assert!(!decision.is_match);
        assert_eq!(decision.decided_by, None);
        assert!(decision.similarity.unwrap() < 0.82);
    }

    #[test]
    fn test_first_match_respects_order() {
        let resolver = LexicalResolver::french();
        let matcher = IngredientMatcher::new(&resolver);
        let fridge: Vec<PreparedTerm> = ["riz", "spaghetti", "pâtes"]
            .iter()
            .map(|s| PreparedTerm::new(s))
            .collect();

        let hit = matcher.first_match(&fridge, &PreparedTerm::new("pâtes"));
        assert_eq!(hit.map(PreparedTerm::raw), Some("spaghetti"));

        assert!(matcher
            .first_match(&fridge, &PreparedTerm::new("basilic"))
            .is_none());
    }
}
