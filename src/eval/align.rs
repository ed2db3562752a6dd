//! Aligning a clustering result with the problem's text index.
//!
//! The result document names its members by text content, not by position,
//! so each member is resolved back to its position in [`Problem::texts`]
//! by exact string match. Reconciliation is best-effort: members that
//! don't resolve (truncated, reformatted, or absent texts) are skipped and
//! counted, and positions no group claims stay unmatched.
//!
//! [`Problem::texts`]: crate::problem::Problem::texts

use serde::{Serialize, Serializer};
use std::collections::HashMap;

use super::config::LengthPolicy;
use crate::problem::ClusterResult;
use crate::{Error, Result};

/// Integer marker for "not assigned to any predicted cluster".
pub const UNMATCHED: i64 = -1;

// =============================================================================
// Text Index
// =============================================================================

/// Exact-match index from text content to its position.
#[derive(Debug, Clone)]
pub struct TextIndex<'a> {
    positions: HashMap<&'a str, usize>,
    collisions: usize,
}

impl<'a> TextIndex<'a> {
    /// Index `texts`. A text that occurs more than once resolves to its last
    /// position; earlier occurrences can never be assigned.
    pub fn new(texts: &'a [String]) -> Self {
        let mut positions = HashMap::with_capacity(texts.len());
        let mut collisions = 0;
        for (i, text) in texts.iter().enumerate() {
            if positions.insert(text.as_str(), i).is_some() {
                collisions += 1;
            }
        }
        Self {
            positions,
            collisions,
        }
    }

    /// Position of `text`, if indexed.
    #[must_use]
    pub fn position(&self, text: &str) -> Option<usize> {
        self.positions.get(text).copied()
    }

    /// Number of texts shadowed by a later duplicate.
    #[must_use]
    pub fn collisions(&self) -> usize {
        self.collisions
    }
}

// =============================================================================
// Predicted Labels
// =============================================================================

/// Dense predicted cluster id per sample (`None` = unmatched).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PredictedLabels {
    labels: Vec<Option<usize>>,
    unresolved: usize,
    duplicate_texts: usize,
}

impl PredictedLabels {
    /// Wrap an existing assignment.
    pub fn from_labels(labels: Vec<Option<usize>>) -> Self {
        Self {
            labels,
            unresolved: 0,
            duplicate_texts: 0,
        }
    }

    /// Per-sample assignment.
    #[must_use]
    pub fn as_slice(&self) -> &[Option<usize>] {
        &self.labels
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// True when there are no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Samples no predicted cluster claims.
    #[must_use]
    pub fn unmatched(&self) -> usize {
        self.labels.iter().filter(|l| l.is_none()).count()
    }

    /// Result-document members that matched no problem text.
    #[must_use]
    pub fn unresolved(&self) -> usize {
        self.unresolved
    }

    /// Problem texts shadowed by a later identical text.
    #[must_use]
    pub fn duplicate_texts(&self) -> usize {
        self.duplicate_texts
    }

    /// Integer form with [`UNMATCHED`] for unassigned samples.
    #[must_use]
    pub fn to_sentinel_vec(&self) -> Vec<i64> {
        self.labels
            .iter()
            .map(|l| l.map_or(UNMATCHED, |id| id as i64))
            .collect()
    }

    fn truncate(&mut self, len: usize) {
        self.labels.truncate(len);
    }
}

impl Serialize for PredictedLabels {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_sentinel_vec().serialize(serializer)
    }
}

/// Resolve every member of every predicted group against `texts`.
///
/// Groups get ids `0..k` in document order. A text listed under several
/// groups keeps the id of the last one.
#[must_use]
pub fn align_predictions(texts: &[String], result: &ClusterResult) -> PredictedLabels {
    let index = TextIndex::new(texts);
    if index.collisions() > 0 {
        log::warn!(
            "{} duplicate text(s) in problem; only the last occurrence of each can be matched",
            index.collisions()
        );
    }

    let mut labels = vec![None; texts.len()];
    let mut unresolved = 0;
    for (cluster_id, description, members) in result.iter() {
        for text in members {
            match index.position(text) {
                Some(pos) => {
                    if let Some(previous) = labels[pos].replace(cluster_id) {
                        if previous != cluster_id {
                            log::debug!(
                                "text {} reassigned from cluster {} to {} ({})",
                                pos,
                                previous,
                                cluster_id,
                                description
                            );
                        }
                    }
                }
                None => unresolved += 1,
            }
        }
    }
    if unresolved > 0 {
        log::debug!("{} result text(s) did not match any problem text", unresolved);
    }

    PredictedLabels {
        labels,
        unresolved,
        duplicate_texts: index.collisions(),
    }
}

// =============================================================================
// Length Reconciliation
// =============================================================================

/// Ground truth and predictions cut to a common length.
#[derive(Debug, Clone)]
pub struct Reconciled {
    /// Ground-truth ids.
    pub truth: Vec<i64>,
    /// Predicted ids, same length as `truth`.
    pub predicted: PredictedLabels,
    /// Set when the inputs disagreed in length.
    pub mismatch: Option<LengthMismatch>,
}

/// Lengths before truncation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LengthMismatch {
    /// Number of ground-truth labels.
    pub labels: usize,
    /// Number of predicted entries (problem texts).
    pub predicted: usize,
}

impl std::fmt::Display for LengthMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Length mismatch. GT: {}, Pred: {}",
            self.labels, self.predicted
        )
    }
}

/// Bring `truth` and `predicted` to the same length according to `policy`.
///
/// # Errors
///
/// [`Error::LengthMismatch`] under [`LengthPolicy::Strict`] when the lengths
/// differ.
pub fn reconcile_lengths(
    truth: &[i64],
    mut predicted: PredictedLabels,
    policy: LengthPolicy,
) -> Result<Reconciled> {
    if truth.len() == predicted.len() {
        return Ok(Reconciled {
            truth: truth.to_vec(),
            predicted,
            mismatch: None,
        });
    }

    let mismatch = LengthMismatch {
        labels: truth.len(),
        predicted: predicted.len(),
    };
    match policy {
        LengthPolicy::Strict => Err(Error::LengthMismatch {
            labels: mismatch.labels,
            texts: mismatch.predicted,
        }),
        LengthPolicy::Truncate => {
            log::warn!("{}; truncating to the shorter length", mismatch);
            let len = truth.len().min(predicted.len());
            predicted.truncate(len);
            Ok(Reconciled {
                truth: truth[..len].to_vec(),
                predicted,
                mismatch: Some(mismatch),
            })
        }
    }
}

/// Keep only positions with a prediction.
///
/// Returns `(truth, predicted)` as parallel arrays ready for scoring.
#[must_use]
pub fn matched_pairs(truth: &[i64], predicted: &PredictedLabels) -> (Vec<i64>, Vec<i64>) {
    truth
        .iter()
        .zip(predicted.as_slice())
        .filter_map(|(&t, p)| p.map(|p| (t, p as i64)))
        .unzip()
}
