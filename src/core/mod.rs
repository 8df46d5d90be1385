//! Core data types shared by the matcher, the ranker and the outer layers.
//!
//! - [`Recipe`](recipe::Recipe): a corpus entry with its ordered ingredient list
//! - [`RecipeIngredient`](recipe::RecipeIngredient): an ingredient name and its opaque measure
//! - [`FridgeItem`](fridge::FridgeItem): a product on hand, optionally dated
//!
//! ## Tolerant input
//!
//! Recipe corpora come from many sources. Deserialization never fails on a
//! malformed optional field: a bad measure, duration or URL becomes `None`,
//! and an ingredient list that cannot be read becomes empty (such recipes are
//! skipped by the ranker).

pub mod fridge;
pub mod recipe;
