//! Property tests for alignment and scoring.
//!
//! Invariants that should hold for every input, not just the hand-picked ones
//! in the unit tests.

use cluster_eval::eval::{
    adjusted_rand_index, align_predictions, max_weight_assignment, min_cost_assignment,
    normalized_mutual_info, score_clustering, AverageMethod, Contingency, EvalConfig,
};
use cluster_eval::ClusterResult;
use proptest::prelude::*;

/// Ground truth and predictions of equal length.
fn labelings() -> impl Strategy<Value = (Vec<i64>, Vec<i64>)> {
    (1usize..40).prop_flat_map(|n| {
        (
            prop::collection::vec(0i64..5, n),
            prop::collection::vec(0i64..6, n),
        )
    })
}

/// A permutation of `0..6`, used to relabel predicted ids.
fn relabeling() -> impl Strategy<Value = Vec<i64>> {
    Just((0i64..6).collect::<Vec<_>>()).prop_shuffle()
}

proptest! {
    #[test]
    fn nmi_ari_invariant_under_relabeling(
        (truth, pred) in labelings(),
        perm in relabeling(),
    ) {
        let relabeled: Vec<i64> = pred.iter().map(|&p| perm[p as usize]).collect();
        let config = EvalConfig::default();
        let a = score_clustering(&truth, &pred, &config).unwrap();
        let b = score_clustering(&truth, &relabeled, &config).unwrap();

        prop_assert!((a.scores.nmi - b.scores.nmi).abs() < 1e-9);
        prop_assert!((a.scores.ari - b.scores.ari).abs() < 1e-9);
        // the optimal total doesn't depend on ids either
        prop_assert!((a.scores.accuracy - b.scores.accuracy).abs() < 1e-9);
    }

    #[test]
    fn identical_partitions_score_one(
        truth in prop::collection::vec(0i64..5, 1..40),
        perm in relabeling(),
    ) {
        let pred: Vec<i64> = truth.iter().map(|&t| perm[t as usize]).collect();
        let eval = score_clustering(&truth, &pred, &EvalConfig::default()).unwrap();
        prop_assert!((eval.scores.nmi - 1.0).abs() < 1e-9);
        prop_assert!((eval.scores.ari - 1.0).abs() < 1e-9);
        prop_assert!((eval.scores.accuracy - 1.0).abs() < 1e-9);
        prop_assert!((eval.scores.macro_f1 - 1.0).abs() < 1e-9);
    }

    #[test]
    fn scores_bounded((truth, pred) in labelings()) {
        let eval = score_clustering(&truth, &pred, &EvalConfig::default()).unwrap();
        let s = &eval.scores;
        prop_assert!((0.0..=1.0).contains(&s.nmi), "nmi {}", s.nmi);
        prop_assert!((-1.0..=1.0).contains(&s.ari), "ari {}", s.ari);
        prop_assert!((0.0..=1.0).contains(&s.macro_f1), "f1 {}", s.macro_f1);
        prop_assert!((0.0..=1.0).contains(&s.accuracy), "acc {}", s.accuracy);
    }

    #[test]
    fn nmi_symmetric_in_arguments((truth, pred) in labelings()) {
        let forward = Contingency::new(&truth, &pred).unwrap();
        let backward = Contingency::new(&pred, &truth).unwrap();
        for method in [AverageMethod::Arithmetic, AverageMethod::Geometric] {
            let a = normalized_mutual_info(&forward, method);
            let b = normalized_mutual_info(&backward, method);
            prop_assert!((a - b).abs() < 1e-9);
        }
        prop_assert!((adjusted_rand_index(&forward) - adjusted_rand_index(&backward)).abs() < 1e-9);
    }

    #[test]
    fn mapping_is_injective((truth, pred) in labelings()) {
        let eval = score_clustering(&truth, &pred, &EvalConfig::default()).unwrap();
        let mut targets: Vec<i64> = eval.mapping.iter().map(|(_, t)| t).collect();
        let before = targets.len();
        targets.sort_unstable();
        targets.dedup();
        prop_assert_eq!(before, targets.len());
    }

    #[test]
    fn accuracy_at_least_best_single_cell((truth, pred) in labelings()) {
        let table = Contingency::new(&truth, &pred).unwrap();
        let best_cell = table.rows().iter().flatten().copied().max().unwrap_or(0);
        let eval = score_clustering(&truth, &pred, &EvalConfig::default()).unwrap();
        prop_assert!(eval.mapping.agreement() >= best_cell);
    }

    #[test]
    fn assignment_min_and_max_are_consistent(
        weights in prop::collection::vec(prop::collection::vec(0i64..50, 1..6), 1..6)
    ) {
        // make the matrix rectangular
        let cols = weights.iter().map(Vec::len).min().unwrap_or(0);
        let weights: Vec<Vec<i64>> = weights.into_iter().map(|mut r| { r.truncate(cols); r }).collect();

        let max_pairs = max_weight_assignment(&weights);
        let negated: Vec<Vec<i64>> = weights.iter().map(|r| r.iter().map(|w| -w).collect()).collect();
        let min_pairs = min_cost_assignment(&negated);

        let max_total: i64 = max_pairs.iter().map(|&(i, j)| weights[i][j]).sum();
        let min_total: i64 = min_pairs.iter().map(|&(i, j)| negated[i][j]).sum();
        prop_assert_eq!(max_total, -min_total);
        prop_assert_eq!(max_pairs.len(), weights.len().min(cols));
    }

    #[test]
    fn aligner_output_shape(
        n in 1usize..20,
        groups in prop::collection::vec(prop::collection::vec(0usize..30, 0..8), 0..5),
    ) {
        let texts: Vec<String> = (0..n).map(|i| format!("t{i}")).collect();
        // indices >= n name texts that don't exist
        let result = ClusterResult::from_groups(
            groups.iter().enumerate().map(|(g, members)| {
                (format!("G{g}"), members.iter().map(|i| format!("t{i}")).collect::<Vec<_>>())
            }),
        );
        let predicted = align_predictions(&texts, &result);

        prop_assert_eq!(predicted.len(), n);
        for (pos, label) in predicted.to_sentinel_vec().into_iter().enumerate() {
            prop_assert!(label == -1 || (0..groups.len() as i64).contains(&label));
            let last_group = groups.iter().rposition(|members| members.contains(&pos));
            prop_assert_eq!(label, last_group.map_or(-1, |g| g as i64));
        }
    }
}
