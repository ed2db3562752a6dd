//! Clustering quality metrics.
//!
//! | Metric | Depends on mapping | Range | Perfect |
//! |--------|--------------------|-------|---------|
//! | NMI | no | [0, 1] | 1.0 |
//! | ARI | no | ~[-1, 1] | 1.0 |
//! | Macro F1 | yes | [0, 1] | 1.0 |
//! | Accuracy (Hungarian) | yes | [0, 1] | 1.0 |
//!
//! NMI and ARI are invariant under any relabeling of the predicted ids.
//! Macro F1 and accuracy first map each predicted cluster to at most one
//! true class with the optimal assignment from [`ClusterMapping::optimal`].
//!
//! # Example
//!
//! ```rust
//! use cluster_eval::eval::{score_clustering, EvalConfig};
//!
//! let truth = [0, 0, 1, 1];
//! let predicted = [1, 1, 0, 0]; // same partition, swapped ids
//! let eval = score_clustering(&truth, &predicted, &EvalConfig::default()).unwrap();
//! assert!((eval.scores.nmi - 1.0).abs() < 1e-9);
//! assert!((eval.scores.accuracy - 1.0).abs() < 1e-9);
//! assert_eq!(eval.mapping.get(1), Some(0));
//! ```

use serde::Serialize;

use super::assignment::ClusterMapping;
use super::config::{AverageMethod, EvalConfig};
use super::contingency::Contingency;
use crate::{Error, Result};

// =============================================================================
// Result Types
// =============================================================================

/// Precision/recall/F1 for one true class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassF1 {
    /// True class id.
    pub class_id: i64,
    /// Precision
    pub precision: f64,
    /// Recall
    pub recall: f64,
    /// F1 score
    pub f1: f64,
    /// Samples of this class.
    pub support: u64,
}

/// The four headline scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterScores {
    /// Normalized mutual information
    pub nmi: f64,
    /// Adjusted Rand index
    pub ari: f64,
    /// Unweighted mean of per-class F1
    pub macro_f1: f64,
    /// Accuracy after optimal relabeling
    pub accuracy: f64,
    /// Per-class breakdown behind `macro_f1`, ordered by class id.
    pub per_class: Vec<ClassF1>,
}

/// Scores plus the predicted→true mapping they were computed with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterEvaluation {
    /// Headline scores.
    pub scores: ClusterScores,
    /// Optimal predicted→true mapping.
    pub mapping: ClusterMapping,
    /// Number of samples scored.
    pub samples: usize,
}

/// Score a predicted clustering against ground truth.
///
/// Both slices must be the same length and contain only scored samples
/// (unmatched positions removed beforehand).
///
/// # Errors
///
/// [`Error::NoSamples`] on empty input, [`Error::InvalidInput`] on a length
/// mismatch.
pub fn score_clustering(
    truth: &[i64],
    predicted: &[i64],
    config: &EvalConfig,
) -> Result<ClusterEvaluation> {
    if truth.is_empty() && predicted.is_empty() {
        return Err(Error::NoSamples);
    }
    let table = Contingency::new(truth, predicted)?;
    let mapping = ClusterMapping::optimal(&table);

    let per_class = per_class_f1(truth, predicted, &mapping, table.classes());
    let macro_f1 = if per_class.is_empty() {
        0.0
    } else {
        per_class.iter().map(|c| c.f1).sum::<f64>() / per_class.len() as f64
    };

    let scores = ClusterScores {
        nmi: normalized_mutual_info(&table, config.nmi_average),
        ari: adjusted_rand_index(&table),
        macro_f1,
        accuracy: mapping.agreement() as f64 / table.total() as f64,
        per_class,
    };

    Ok(ClusterEvaluation {
        scores,
        mapping,
        samples: truth.len(),
    })
}

// =============================================================================
// Information-Theoretic
// =============================================================================

/// Shannon entropy (nats) of a count distribution.
fn entropy(counts: &[u64], n: f64) -> f64 {
    counts
        .iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let p = c as f64 / n;
            -p * p.ln()
        })
        .sum()
}

/// Mutual information (nats) between the two labelings of a table.
#[must_use]
pub fn mutual_info(table: &Contingency) -> f64 {
    let n = table.total() as f64;
    if n == 0.0 {
        return 0.0;
    }
    let rows = table.row_sums();
    let cols = table.col_sums();
    let mut mi = 0.0;
    for (i, row) in table.rows().iter().enumerate() {
        for (j, &nij) in row.iter().enumerate() {
            if nij == 0 {
                continue;
            }
            let nij = nij as f64;
            mi += (nij / n) * ((n * nij) / (rows[i] as f64 * cols[j] as f64)).ln();
        }
    }
    // Rounding can push an exact zero slightly negative.
    mi.max(0.0)
}

/// Normalized mutual information: `MI / avg(H(truth), H(pred))`.
///
/// Two single-cluster labelings agree perfectly (1.0). Zero mutual
/// information scores 0.0 regardless of the normalizer.
#[must_use]
pub fn normalized_mutual_info(table: &Contingency, average: AverageMethod) -> f64 {
    let n_classes = table.classes().len();
    let n_clusters = table.clusters().len();
    if n_classes == n_clusters && n_classes <= 1 {
        return 1.0;
    }

    let mi = mutual_info(table);
    if mi <= f64::EPSILON {
        return 0.0;
    }

    let n = table.total() as f64;
    let h_true = entropy(&table.row_sums(), n);
    let h_pred = entropy(&table.col_sums(), n);
    let normalizer = average.combine(h_true, h_pred).max(f64::EPSILON);
    (mi / normalizer).clamp(0.0, 1.0)
}

// =============================================================================
// Pair Counting
// =============================================================================

/// Adjusted Rand index from pair-confusion counts.
///
/// Returns 1.0 when no pair of samples is split differently by the two
/// labelings (this covers the single-sample and identical cases).
#[must_use]
pub fn adjusted_rand_index(table: &Contingency) -> f64 {
    let n = table.total() as i128;
    let sum_squares: i128 = table
        .rows()
        .iter()
        .flatten()
        .map(|&c| (c as i128) * (c as i128))
        .sum();
    let sum_row_sq: i128 = table.row_sums().iter().map(|&c| (c as i128).pow(2)).sum();
    let sum_col_sq: i128 = table.col_sums().iter().map(|&c| (c as i128).pow(2)).sum();

    // Ordered pair counts: together in both, split only in truth, etc.
    let tp = sum_squares - n;
    let fp = sum_col_sq - sum_squares;
    let fn_ = sum_row_sq - sum_squares;
    let tn = n * n - fp - fn_ - sum_squares;

    if fn_ == 0 && fp == 0 {
        return 1.0;
    }

    let (tp, fp, fn_, tn) = (tp as f64, fp as f64, fn_ as f64, tn as f64);
    2.0 * (tp * tn - fn_ * fp) / ((tp + fn_) * (fn_ + tn) + (tp + fp) * (fp + tn))
}

// =============================================================================
// Mapping-Dependent
// =============================================================================

/// Per-class precision/recall/F1 after relabeling predictions through
/// `mapping`. Predictions with no mapping count against every class.
fn per_class_f1(
    truth: &[i64],
    predicted: &[i64],
    mapping: &ClusterMapping,
    classes: &[i64],
) -> Vec<ClassF1> {
    let relabeled: Vec<Option<i64>> = predicted.iter().map(|&p| mapping.get(p)).collect();

    classes
        .iter()
        .map(|&class| {
            let mut tp = 0u64;
            let mut fp = 0u64;
            let mut fn_ = 0u64;
            for (&t, &p) in truth.iter().zip(&relabeled) {
                match (t == class, p == Some(class)) {
                    (true, true) => tp += 1,
                    (false, true) => fp += 1,
                    (true, false) => fn_ += 1,
                    (false, false) => {}
                }
            }
            let precision = ratio(tp, tp + fp);
            let recall = ratio(tp, tp + fn_);
            let f1 = ratio(2 * tp, 2 * tp + fp + fn_);
            ClassF1 {
                class_id: class,
                precision,
                recall,
                f1,
                support: tp + fn_,
            }
        })
        .collect()
}

fn ratio(num: u64, den: u64) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}
