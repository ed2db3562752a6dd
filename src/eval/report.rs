//! Evaluation report: sample counts, scores, and the cluster mapping.
//!
//! `summary()` is the human-readable form printed by the CLI; `to_json()`
//! serializes the same data for downstream tooling.

use serde::Serialize;
use std::fmt;

use super::align::{PredictedLabels, Reconciled};
use super::metrics::{ClusterEvaluation, ClusterScores};
use super::loader::EvalInputs;
use crate::Result;

// =============================================================================
// Core Report Structure
// =============================================================================

/// One true class and the predicted clusters mapped onto it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappingRow {
    /// True class id.
    pub class_id: i64,
    /// True class description.
    pub class_description: String,
    /// Descriptions of predicted clusters whose id maps to this class.
    /// May be empty.
    pub predicted: Vec<String>,
}

/// Complete result of one evaluation run.
#[derive(Debug, Clone, Serialize)]
pub struct EvalReport {
    /// Samples after length reconciliation.
    pub total_samples: usize,
    /// Samples no predicted cluster claims (excluded from scoring).
    pub unmatched_samples: usize,
    /// Result-document texts that matched no problem text.
    pub unresolved_texts: usize,
    /// Headline scores on matched samples.
    pub scores: ClusterScores,
    /// One row per true class, in class-id order.
    pub mapping: Vec<MappingRow>,
    /// Dense predicted cluster ids (`-1` = unmatched).
    pub predicted_labels: PredictedLabels,
    /// Non-fatal problems found while aligning.
    pub warnings: Vec<String>,
}

impl EvalReport {
    /// Assemble a report from the pipeline's intermediate results.
    pub fn build(
        inputs: &EvalInputs,
        reconciled: &Reconciled,
        evaluation: &ClusterEvaluation,
    ) -> Self {
        let mut warnings = Vec::new();
        if let Some(mismatch) = reconciled.mismatch {
            warnings.push(mismatch.to_string());
        }
        let duplicates = reconciled.predicted.duplicate_texts();
        if duplicates > 0 {
            warnings.push(format!(
                "{} duplicate text(s) in data.json; only the last occurrence of each can be matched",
                duplicates
            ));
        }

        let mapping = inputs
            .label
            .class_descriptions
            .iter()
            .enumerate()
            .map(|(i, description)| {
                let class_id = i as i64;
                let predicted = evaluation
                    .mapping
                    .clusters_for(class_id)
                    .into_iter()
                    .filter_map(|p| usize::try_from(p).ok())
                    .filter_map(|p| inputs.result.description(p))
                    .map(str::to_string)
                    .collect();
                MappingRow {
                    class_id,
                    class_description: description.clone(),
                    predicted,
                }
            })
            .collect();

        Self {
            total_samples: reconciled.truth.len(),
            unmatched_samples: reconciled.predicted.unmatched(),
            unresolved_texts: reconciled.predicted.unresolved(),
            scores: evaluation.scores.clone(),
            mapping,
            predicted_labels: reconciled.predicted.clone(),
            warnings,
        }
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl EvalReport {
    /// Generate a human-readable summary.
    pub fn summary(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!("Total samples: {}\n", self.total_samples));
        out.push_str(&format!("Unmatched samples: {}\n", self.unmatched_samples));

        out.push_str("\nEvaluation Results (on matched texts):\n");
        out.push_str(&format!("Normalized Mutual Info (NMI): {:.4}\n", self.scores.nmi));
        out.push_str(&format!("Adjusted Rand Index (ARI):    {:.4}\n", self.scores.ari));
        out.push_str(&format!("Macro F1 Score:               {:.4}\n", self.scores.macro_f1));
        out.push_str(&format!("Accuracy (Hungarian):         {:.4}\n", self.scores.accuracy));

        out.push_str("\nCluster Mapping:\n");
        for row in &self.mapping {
            out.push_str(&format!(
                "GT: {} <==> Pred: {:?}\n",
                row.class_description, row.predicted
            ));
        }

        out
    }

    /// Export report as JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| crate::Error::invalid_input(format!("JSON serialization failed: {}", e)))
    }
}

impl fmt::Display for EvalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary())
    }
}
