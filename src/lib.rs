// src/lib.rs
//! Ingredient/additive label matching.
//!
//! Given a raw ingredient declaration as printed on a food or cosmetic
//! product ("Vitamin C (ascorbic acid), Niacinamide, Fragrance/Parfum"),
//! this crate decomposes it into normalized candidate tokens and matches
//! each token exactly against a reference dictionary of canonical additive
//! names, returning the stable codes of the entries that matched. Callers
//! use those codes to fetch full records (risk level, description) from
//! their own store.

pub mod matching;
pub mod models;
pub mod resource;

pub use matching::{lookup_additives, normalize_label};
pub use models::{ReferenceDictionary, ReferenceEntry};
