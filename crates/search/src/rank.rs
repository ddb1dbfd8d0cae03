//! Ranking labeled records against a query.
//!
//! Every record's label is scored with [`similarity_score`](crate::similarity_score)
//! semantics and the collection is returned best match first. The sort is
//! stable: records with equal scores keep their input order.

use crate::fuzzy::{char_similarity, normalize};
use serde::{Deserialize, Serialize};

/// An item that can be ranked by its label.
///
/// Only the label takes part in matching; everything else about the
/// implementing type is carried through untouched.
pub trait Labeled {
    /// The text matched against the query.
    fn label(&self) -> &str;
}

impl Labeled for String {
    fn label(&self) -> &str {
        self
    }
}

impl Labeled for str {
    fn label(&self) -> &str {
        self
    }
}

impl<T: Labeled + ?Sized> Labeled for &T {
    fn label(&self) -> &str {
        (**self).label()
    }
}

/// Thread-safety bound required by the scoring pass.
///
/// With the `parallel` feature labels are scored on the rayon pool, so
/// records must be `Sync`. Without it this bound is empty.
#[cfg(feature = "parallel")]
pub trait MaybeSync: Sync {}
#[cfg(feature = "parallel")]
impl<T: Sync + ?Sized> MaybeSync for T {}

/// Thread-safety bound required by the scoring pass.
#[cfg(not(feature = "parallel"))]
pub trait MaybeSync {}
#[cfg(not(feature = "parallel"))]
impl<T: ?Sized> MaybeSync for T {}

/// A generic labeled record with an opaque payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record<P> {
    /// The matched text
    pub label: String,
    /// Anything else; never inspected by the ranker
    #[serde(flatten)]
    pub payload: P,
}

impl<P> Record<P> {
    /// Creates a new record.
    pub fn new(label: impl Into<String>, payload: P) -> Self {
        Self {
            label: label.into(),
            payload,
        }
    }
}

impl<P> Labeled for Record<P> {
    fn label(&self) -> &str {
        &self.label
    }
}

/// A record paired with its similarity to the query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredRecord<'a, T> {
    /// Similarity in `[0.0, 1.0]`, higher is better
    pub score: f64,
    /// The record that was scored
    pub record: &'a T,
}

/// Post-ranking filters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankOptions {
    /// Keep at most this many results
    #[serde(default)]
    pub limit: Option<usize>,
    /// Drop results scoring strictly below this
    #[serde(default)]
    pub min_score: f64,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            limit: None,
            min_score: 0.0,
        }
    }
}

impl RankOptions {
    /// Limit the number of results.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the minimum score a result needs to be kept.
    pub fn with_min_score(mut self, min_score: f64) -> Self {
        self.min_score = min_score;
        self
    }

    fn keeps_everything(&self) -> bool {
        self.limit.is_none() && self.min_score <= 0.0
    }
}

/// Rank records against a query, consuming the input.
///
/// Returns the same records reordered by descending similarity. Never
/// fails; an empty input yields an empty output.
///
/// # Example
/// ```
/// use dishfinder_search::rank;
///
/// let dishes = vec!["pizza".to_string(), "stir-fry noodles".to_string(), "stir fry".to_string()];
/// let ranked = rank("Stir Fry", dishes);
/// assert_eq!(ranked, ["stir fry", "stir-fry noodles", "pizza"]);
/// ```
pub fn rank<T: Labeled + MaybeSync>(query: &str, records: Vec<T>) -> Vec<T> {
    let order = ranked_order(query, &records);
    permute(records, &order)
}

/// Rank records against a query, returning references in ranked order.
pub fn rank_refs<'a, T: Labeled + MaybeSync>(query: &str, records: &'a [T]) -> Vec<&'a T> {
    rank_scored(query, records)
        .into_iter()
        .map(|scored| scored.record)
        .collect()
}

/// Rank records and keep the scores alongside them.
pub fn rank_scored<'a, T: Labeled + MaybeSync>(
    query: &str,
    records: &'a [T],
) -> Vec<ScoredRecord<'a, T>> {
    let scores = score_all(query, records);
    let mut scored: Vec<ScoredRecord<'a, T>> = scores
        .into_iter()
        .zip(records)
        .map(|(score, record)| ScoredRecord { score, record })
        .collect();

    // sort_by is stable; equal scores keep input order
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored
}

/// Rank records with a result limit and score floor applied.
///
/// With [`RankOptions::default`] this is exactly [`rank_refs`].
pub fn rank_with<'a, T: Labeled + MaybeSync>(
    query: &str,
    records: &'a [T],
    options: &RankOptions,
) -> Vec<ScoredRecord<'a, T>> {
    let mut scored = rank_scored(query, records);
    if options.keeps_everything() {
        return scored;
    }

    scored.retain(|s| s.score >= options.min_score);
    if let Some(limit) = options.limit {
        scored.truncate(limit);
    }
    scored
}

/// Score every record's label against the query, in input order.
fn score_all<T: Labeled + MaybeSync>(query: &str, records: &[T]) -> Vec<f64> {
    let query_chars: Vec<char> = normalize(query).chars().collect();
    let score_one = |record: &T| {
        let label_chars: Vec<char> = normalize(record.label()).chars().collect();
        char_similarity(&query_chars, &label_chars)
    };

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        records.par_iter().map(score_one).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        records.iter().map(score_one).collect()
    }
}

/// Input indices in ranked order.
fn ranked_order<T: Labeled + MaybeSync>(query: &str, records: &[T]) -> Vec<usize> {
    let scores = score_all(query, records);
    let mut order: Vec<usize> = (0..records.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
    order
}

/// Move each record into its ranked slot without cloning.
fn permute<T>(records: Vec<T>, order: &[usize]) -> Vec<T> {
    let mut slots: Vec<Option<T>> = records.into_iter().map(Some).collect();
    order
        .iter()
        .filter_map(|&index| slots[index].take())
        .collect()
}
