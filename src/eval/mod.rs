//! Clustering evaluation pipeline.
//!
//! # Overview
//!
//! One pass, no feedback:
//!
//! ```text
//! loader ──► align ──► reconcile lengths ──► drop unmatched ──► score ──► report
//! ```
//!
//! | Stage | Module | Output |
//! |-------|--------|--------|
//! | Load documents | [`loader`] | [`EvalInputs`] |
//! | Resolve texts to positions | [`align`] | [`PredictedLabels`] |
//! | Contingency + assignment | [`contingency`], [`assignment`] | [`ClusterMapping`] |
//! | NMI, ARI, Macro F1, accuracy | [`metrics`] | [`ClusterEvaluation`] |
//! | Human / JSON output | [`report`] | [`EvalReport`] |
//!
//! # Example
//!
//! ```rust
//! use cluster_eval::eval::{evaluate, EvalConfig, EvalInputs};
//! use cluster_eval::problem::{ClusterResult, Label, Problem};
//!
//! let inputs = EvalInputs::new(
//!     Problem {
//!         goal: "group by topic".into(),
//!         texts: vec!["a".into(), "b".into(), "c".into(), "d".into()],
//!         example_descriptions: None,
//!     },
//!     Label {
//!         class_descriptions: vec!["first".into(), "second".into()],
//!         labels: vec![0, 0, 1, 1],
//!     },
//!     ClusterResult::from_groups([("G1", vec!["a", "x"]), ("G2", vec!["c", "d"])]),
//! );
//!
//! let report = evaluate(&inputs, &EvalConfig::default()).unwrap();
//! assert_eq!(report.unmatched_samples, 1);
//! assert_eq!(report.predicted_labels.to_sentinel_vec(), vec![0, -1, 1, 1]);
//! assert!((report.scores.accuracy - 1.0).abs() < 1e-9);
//! ```

pub mod align;
pub mod assignment;
pub mod config;
pub mod contingency;
pub mod loader;
pub mod metrics;
pub mod report;

pub use align::{
    align_predictions, matched_pairs, reconcile_lengths, LengthMismatch, PredictedLabels,
    Reconciled, TextIndex, UNMATCHED,
};
pub use assignment::{max_weight_assignment, min_cost_assignment, ClusterMapping};
pub use config::{AverageMethod, EvalConfig, LengthPolicy};
pub use contingency::Contingency;
pub use loader::{load_cluster_result, load_label, load_problem, EvalInputs};
pub use metrics::{
    adjusted_rand_index, mutual_info, normalized_mutual_info, score_clustering, ClassF1,
    ClusterEvaluation, ClusterScores,
};
pub use report::{EvalReport, MappingRow};

use crate::{Error, Result};

/// Run the full pipeline on loaded inputs.
///
/// # Errors
///
/// - [`Error::LengthMismatch`] under [`LengthPolicy::Strict`]
/// - [`Error::NoSamples`] when no text was assigned to any predicted cluster
pub fn evaluate(inputs: &EvalInputs, config: &EvalConfig) -> Result<EvalReport> {
    let predicted = align_predictions(&inputs.problem.texts, &inputs.result);
    let reconciled = reconcile_lengths(&inputs.label.labels, predicted, config.length_policy)?;

    let (truth, pred) = matched_pairs(&reconciled.truth, &reconciled.predicted);
    log::debug!(
        "{} of {} samples matched",
        pred.len(),
        reconciled.truth.len()
    );
    if pred.is_empty() {
        return Err(Error::NoSamples);
    }

    let evaluation = score_clustering(&truth, &pred, config)?;
    Ok(EvalReport::build(inputs, &reconciled, &evaluation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::{ClusterResult, Label, Problem};

    fn inputs(labels: Vec<i64>, groups: Vec<(&str, Vec<&str>)>) -> EvalInputs {
        EvalInputs::new(
            Problem {
                goal: "g".into(),
                texts: ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect(),
                example_descriptions: None,
            },
            Label {
                class_descriptions: vec!["zero".into(), "one".into()],
                labels,
            },
            ClusterResult::from_groups(groups),
        )
    }

    #[test]
    fn perfect_run() {
        let inputs = inputs(
            vec![0, 0, 1, 1],
            vec![("G1", vec!["a", "b"]), ("G2", vec!["c", "d"])],
        );
        let report = evaluate(&inputs, &EvalConfig::default()).unwrap();
        assert_eq!(report.total_samples, 4);
        assert_eq!(report.unmatched_samples, 0);
        assert!((report.scores.nmi - 1.0).abs() < 1e-9);
        assert!((report.scores.ari - 1.0).abs() < 1e-9);
        assert!((report.scores.accuracy - 1.0).abs() < 1e-9);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn nothing_clustered() {
        let inputs = inputs(vec![0, 0, 1, 1], vec![("G1", vec!["x", "y"])]);
        let err = evaluate(&inputs, &EvalConfig::default()).unwrap_err();
        assert!(matches!(err, Error::NoSamples));
    }

    #[test]
    fn strict_policy_rejects_mismatch() {
        let inputs = inputs(vec![0, 0, 1], vec![("G1", vec!["a"])]);
        let config = EvalConfig::new().with_length_policy(LengthPolicy::Strict);
        let err = evaluate(&inputs, &config).unwrap_err();
        assert!(matches!(err, Error::LengthMismatch { labels: 3, texts: 4 }));
    }

    #[test]
    fn truncate_policy_scores_common_prefix() {
        let inputs = inputs(
            vec![0, 0, 1],
            vec![("G1", vec!["a", "b"]), ("G2", vec!["c", "d"])],
        );
        let report = evaluate(&inputs, &EvalConfig::default()).unwrap();
        assert_eq!(report.total_samples, 3);
        assert_eq!(report.predicted_labels.len(), 3);
        assert_eq!(report.warnings.len(), 1);
    }
}
