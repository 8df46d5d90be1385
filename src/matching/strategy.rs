use serde::{Deserialize, Serialize};

use crate::lexicon::resolver::LexicalResolver;
use crate::matching::matcher::PreparedTerm;
use crate::matching::similarity::similarity_ratio;

/// Minimum Ratcliff/Obershelp ratio accepted by [`MatchStrategy::Fuzzy`]
pub const FUZZY_THRESHOLD: f64 = 0.82;

/// A one-word fridge item only matches ingredient phrases up to this many
/// root words ("tomate" matches "sauce tomate" but not a long compound name).
pub const MAX_INGREDIENT_ROOTS: usize = 3;

/// Outcome of a single strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The pair matches; stop here
    Match,
    /// The pair never matches; stop here
    NoMatch,
    /// This strategy has no opinion; try the next one
    Continue,
}

/// Named stages of the ingredient matching pipeline, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// Canonical forms are equal
    Exact,
    /// Singular forms are equal
    Singular,
    /// Registered exclusion pair: always a terminal no-match
    Exclusion,
    /// Same synonym group, or one side listed in the other's group
    Synonym,
    /// A single root word contained in the other side's root words
    RootWord,
    /// Character-level similarity above [`FUZZY_THRESHOLD`]
    Fuzzy,
}

impl MatchStrategy {
    /// Evaluation order. Exclusion sits before every heuristic that could
    /// accept an excluded pair.
    pub const PIPELINE: [Self; 6] = [
        Self::Exact,
        Self::Singular,
        Self::Exclusion,
        Self::Synonym,
        Self::RootWord,
        Self::Fuzzy,
    ];

    #[must_use]
    pub fn evaluate(
        self,
        fridge: &PreparedTerm,
        ingredient: &PreparedTerm,
        resolver: &LexicalResolver,
    ) -> Verdict {
        match self {
            Self::Exact => accept_if(fridge.canonical() == ingredient.canonical()),
            Self::Singular => accept_if(fridge.singular() == ingredient.singular()),
            Self::Exclusion => {
                if resolver.are_excluded(fridge.canonical().as_str(), ingredient.canonical().as_str())
                {
                    Verdict::NoMatch
                } else {
                    Verdict::Continue
                }
            }
            Self::Synonym => synonym_verdict(fridge, ingredient, resolver),
            Self::RootWord => accept_if(root_word_match(fridge, ingredient)),
            Self::Fuzzy => accept_if(
                similarity_ratio(fridge.singular(), ingredient.singular()) >= FUZZY_THRESHOLD,
            ),
        }
    }
}

impl std::fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact => write!(f, "exact"),
            Self::Singular => write!(f, "singular/plural"),
            Self::Exclusion => write!(f, "exclusion"),
            Self::Synonym => write!(f, "synonym"),
            Self::RootWord => write!(f, "root word"),
            Self::Fuzzy => write!(f, "fuzzy"),
        }
    }
}

fn accept_if(condition: bool) -> Verdict {
    if condition {
        Verdict::Match
    } else {
        Verdict::Continue
    }
}

fn synonym_verdict(
    fridge: &PreparedTerm,
    ingredient: &PreparedTerm,
    resolver: &LexicalResolver,
) -> Verdict {
    let fridge_group = resolver.group_of(fridge.canonical().as_str());
    let ingredient_group = resolver.group_of(ingredient.canonical().as_str());

    match (fridge_group, ingredient_group) {
        // Two known products: the table is authoritative
        (Some(f), Some(i)) if f == i => Verdict::Match,
        (Some(_), Some(_)) => Verdict::NoMatch,
        (Some(group), None) => {
            accept_if(resolver.group_contains(group, ingredient.canonical().as_str()))
        }
        (None, Some(group)) => {
            accept_if(resolver.group_contains(group, fridge.canonical().as_str()))
        }
        (None, None) => Verdict::Continue,
    }
}

fn root_word_match(fridge: &PreparedTerm, ingredient: &PreparedTerm) -> bool {
    if let Some(word) = fridge.single_root() {
        if ingredient.singular_roots().contains(word)
            && ingredient.root_count() <= MAX_INGREDIENT_ROOTS
        {
            return true;
        }
    }

    if let Some(word) = ingredient.single_root() {
        if fridge.singular_roots().contains(word) {
            return true;
        }
    }

    false
}
