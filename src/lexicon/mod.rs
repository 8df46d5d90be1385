//! French food vocabulary: normalization, synonyms and exclusions.
//!
//! - [`normalize`]: canonical forms, root words, singularization
//! - [`resolver`]: [`LexicalResolver`], the immutable synonym/exclusion index
//! - [`tables`]: the curated built-in tables
//!
//! ## Canonical forms
//!
//! | Input             | Canonical       |
//! |-------------------|-----------------|
//! | `Les Pâtes`       | `pates`         |
//! | `de la crème`     | `creme`         |
//! | `L’huile d’olive` | `huile d'olive` |
//!
//! The resolver answers two questions about canonical terms: do they denote the
//! same foodstuff (same [`resolver::SynonymGroup`]), and must they never be
//! matched (an exclusion pair such as `pates` / `pate brisee`).

pub mod normalize;
pub mod resolver;
pub mod tables;

pub use normalize::{normalize, root_words, singularize, CanonicalTerm};
pub use resolver::{GroupId, LexicalResolver, LexiconError};
