// src/matching/mod.rs

pub mod lookup;
pub mod normalize;

pub use lookup::lookup_additives;
pub use normalize::normalize_label;
