//! Fuzzy dish search for Dishfinder.
//!
//! This crate provides:
//! - Levenshtein edit distance over Unicode characters
//! - Case- and whitespace-insensitive similarity scoring
//! - Stable ranking of any labeled record type
//! - Optional parallel scoring and WASM bindings
//!
//! Ranking is a pure function of the query and the records: there is no
//! index, no cache and no shared state, so it is safe to call on every
//! keystroke from any thread.
//!
//! # Example
//!
//! ```
//! use dishfinder_search::{rank_scored, Record};
//!
//! let dishes = vec![
//!     Record::new("stir fry", 520.0),
//!     Record::new("stir-fry noodles", 610.0),
//!     Record::new("pizza", 285.0),
//! ];
//!
//! let ranked = rank_scored("Stir Fry ", &dishes);
//! assert_eq!(ranked[0].record.label, "stir fry");
//! assert_eq!(ranked[0].score, 1.0);
//! assert_eq!(ranked[2].record.label, "pizza");
//! ```

mod fuzzy;
mod rank;

#[cfg(feature = "wasm")]
mod wasm;

pub use fuzzy::{levenshtein_distance, normalize, similarity_score};
pub use rank::{
    rank, rank_refs, rank_scored, rank_with, Labeled, MaybeSync, RankOptions, Record,
    ScoredRecord,
};
