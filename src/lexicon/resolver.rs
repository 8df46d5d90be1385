use std::collections::{BTreeSet, HashMap, HashSet};

use thiserror::Error;

use crate::lexicon::normalize::{singularize, singularize_phrase};
use crate::lexicon::tables::{EXCLUSION_PAIRS, SYNONYM_GROUPS};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LexiconError {
    #[error("Term '{term}' appears in synonym groups {first} and {second}")]
    OverlappingGroups {
        term: String,
        first: usize,
        second: usize,
    },

    #[error("Exclusion pair ('{0}', '{1}') excludes a term from itself")]
    ReflexiveExclusion(String, String),
}

/// Index of a synonym group inside a [`LexicalResolver`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(pub usize);

impl std::fmt::Display for GroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An immutable set of interchangeable canonical terms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynonymGroup {
    terms: BTreeSet<String>,
}

impl SynonymGroup {
    #[must_use]
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Synonym classes and exclusion pairs over canonical terms.
///
/// Built once, then shared by reference: nothing mutates it after
/// construction, so any number of threads may query it concurrently.
#[derive(Debug)]
pub struct LexicalResolver {
    groups: Vec<SynonymGroup>,

    /// Index: term -> group containing it
    term_to_group: HashMap<String, GroupId>,

    /// Both orders of every pair, plus the word-by-word singular forms
    exclusions: HashSet<(String, String)>,
}

impl LexicalResolver {
    /// Build a resolver from canonical-form tables.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError::OverlappingGroups`] if a term belongs to two
    /// groups, or [`LexiconError::ReflexiveExclusion`] if a pair names the
    /// same term twice.
    pub fn new(groups: &[&[&str]], exclusions: &[(&str, &str)]) -> Result<Self, LexiconError> {
        let mut resolver = Self {
            groups: Vec::with_capacity(groups.len()),
            term_to_group: HashMap::new(),
            exclusions: HashSet::new(),
        };

        for terms in groups {
            resolver.add_group(terms)?;
        }
        for (a, b) in exclusions {
            resolver.add_exclusion(a, b)?;
        }

        Ok(resolver)
    }

    /// The built-in French foodstuff tables
    #[must_use]
    #[allow(clippy::missing_panics_doc)] // Built-in tables are checked by unit tests
    pub fn french() -> Self {
        Self::new(SYNONYM_GROUPS, EXCLUSION_PAIRS).expect("built-in lexicon tables are consistent")
    }

    fn add_group(&mut self, terms: &[&str]) -> Result<(), LexiconError> {
        let id = GroupId(self.groups.len());

        for term in terms {
            if let Some(existing) = self.term_to_group.get(*term) {
                if *existing != id {
                    return Err(LexiconError::OverlappingGroups {
                        term: (*term).to_string(),
                        first: existing.0,
                        second: id.0,
                    });
                }
            }
            self.term_to_group.insert((*term).to_string(), id);
        }

        self.groups.push(SynonymGroup {
            terms: terms.iter().map(|t| (*t).to_string()).collect(),
        });
        Ok(())
    }

    fn add_exclusion(&mut self, a: &str, b: &str) -> Result<(), LexiconError> {
        if a == b {
            return Err(LexiconError::ReflexiveExclusion(a.to_string(), b.to_string()));
        }

        let forms = [
            (a.to_string(), b.to_string()),
            (singularize_phrase(a), singularize_phrase(b)),
        ];
        for (x, y) in forms {
            if x != y {
                self.exclusions.insert((y.clone(), x.clone()));
                self.exclusions.insert((x, y));
            }
        }
        Ok(())
    }

    /// Group of a canonical term, trying its singular form second
    #[must_use]
    pub fn group_of(&self, term: &str) -> Option<GroupId> {
        self.term_to_group
            .get(term)
            .or_else(|| self.term_to_group.get(&singularize(term)))
            .copied()
    }

    #[must_use]
    pub fn group(&self, id: GroupId) -> Option<&SynonymGroup> {
        self.groups.get(id.0)
    }

    /// True if `term` (or its singular form) is listed in group `id`
    #[must_use]
    pub fn group_contains(&self, id: GroupId, term: &str) -> bool {
        self.group(id)
            .is_some_and(|g| g.contains(term) || g.contains(&singularize(term)))
    }

    /// True if the two canonical terms must never be matched.
    ///
    /// Checked in both orders, with literal, singular and word-by-word
    /// singular forms of each side.
    #[must_use]
    pub fn are_excluded(&self, a: &str, b: &str) -> bool {
        let a_forms = [a.to_string(), singularize(a), singularize_phrase(a)];
        let b_forms = [b.to_string(), singularize(b), singularize_phrase(b)];

        a_forms.iter().any(|x| {
            b_forms
                .iter()
                .any(|y| self.exclusions.contains(&(x.clone(), y.clone())))
        })
    }

    /// Number of synonym groups
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Default for LexicalResolver {
    fn default() -> Self {
        Self::french()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_are_consistent() {
        let resolver = LexicalResolver::new(SYNONYM_GROUPS, EXCLUSION_PAIRS);
        assert!(resolver.is_ok(), "{:?}", resolver.err());
        assert_eq!(resolver.unwrap().len(), SYNONYM_GROUPS.len());
    }

    #[test]
    fn test_overlapping_groups_rejected() {
        let err = LexicalResolver::new(&[&["pates", "penne"], &["penne", "rigatoni"]], &[])
            .unwrap_err();
        assert_eq!(
            err,
            LexiconError::OverlappingGroups {
                term: "penne".to_string(),
                first: 0,
                second: 1,
            }
        );
    }

    #[test]
    fn test_reflexive_exclusion_rejected() {
        assert!(LexicalResolver::new(&[], &[("pate", "pate")]).is_err());
    }

    #[test]
    fn test_group_of_uses_singular_fallback() {
        let resolver = LexicalResolver::french();

        let pasta = resolver.group_of("pates").unwrap();
        assert_eq!(resolver.group_of("spaghetti"), Some(pasta));
        assert_eq!(resolver.group_of("penne"), Some(pasta));

        // "carottes" is listed, "courgettes" is listed; "basilics" only via singular
        let basil = resolver.group_of("basilic").unwrap();
        assert_eq!(resolver.group_of("basilics"), Some(basil));

        assert_eq!(resolver.group_of("quinoa"), None);
    }

    #[test]
    fn test_first_group_is_reachable() {
        // Group 0 must behave like any other group
        let resolver = LexicalResolver::french();
        assert_eq!(resolver.group_of("pates"), Some(GroupId(0)));
    }

    #[test]
    fn test_group_contains() {
        let resolver = LexicalResolver::french();
        let tomato = resolver.group_of("tomate").unwrap();
        assert!(resolver.group_contains(tomato, "sauce tomate"));
        assert!(resolver.group_contains(tomato, "tomates cerises"));
        assert!(!resolver.group_contains(tomato, "poivron"));
    }

    #[test]
    fn test_exclusions_symmetric() {
        let resolver = LexicalResolver::french();
        assert!(resolver.are_excluded("pates", "pate brisee"));
        assert!(resolver.are_excluded("pate brisee", "pates"));
        assert!(resolver.are_excluded("pomme", "pomme de terre"));
        assert!(resolver.are_excluded("pomme de terre", "pomme"));
    }

    #[test]
    fn test_exclusions_closed_over_plurals() {
        let resolver = LexicalResolver::french();
        assert!(resolver.are_excluded("pommes", "pomme de terre"));
        assert!(resolver.are_excluded("pomme", "pommes de terre"));
        assert!(resolver.are_excluded("pates", "pates brisees"));
        assert!(resolver.are_excluded("pates", "pate feuilletee"));
    }

    #[test]
    fn test_unrelated_terms_not_excluded() {
        let resolver = LexicalResolver::french();
        assert!(!resolver.are_excluded("pates", "spaghetti"));
        assert!(!resolver.are_excluded("pomme", "poire"));
        assert!(!resolver.are_excluded("pate brisee", "pate sablee"));
    }
}
