//! Optimal one-to-one assignment (Hungarian / Kuhn-Munkres).
//!
//! Solves the rectangular linear assignment problem exactly with the
//! shortest-augmenting-path formulation using row and column potentials,
//! O(n²·m) for an n×m cost matrix with n ≤ m. Wider-than-tall inputs are
//! solved on the transpose.
//!
//! Ties between equally good assignments are broken by the order rows are
//! inserted and columns are scanned (lowest index first). This is
//! deterministic but implementation-defined: another solver may pick a
//! different assignment with the same total.

use std::collections::BTreeMap;

use super::contingency::Contingency;

/// Minimum-cost assignment for a rectangular cost matrix.
///
/// Returns `(row, col)` pairs, one per row when `rows <= cols`, otherwise one
/// per column. Pairs are sorted by row.
#[must_use]
pub fn min_cost_assignment(cost: &[Vec<i64>]) -> Vec<(usize, usize)> {
    let rows = cost.len();
    let cols = cost.first().map_or(0, Vec::len);
    if rows == 0 || cols == 0 {
        return Vec::new();
    }

    if rows <= cols {
        solve(rows, cols, |i, j| cost[i][j])
    } else {
        let mut pairs: Vec<(usize, usize)> = solve(cols, rows, |i, j| cost[j][i])
            .into_iter()
            .map(|(c, r)| (r, c))
            .collect();
        pairs.sort_unstable();
        pairs
    }
}

/// Maximum-weight assignment, via the negated weights.
#[must_use]
pub fn max_weight_assignment(weight: &[Vec<i64>]) -> Vec<(usize, usize)> {
    let negated: Vec<Vec<i64>> = weight
        .iter()
        .map(|row| row.iter().map(|&w| -w).collect())
        .collect();
    min_cost_assignment(&negated)
}

/// Core solver for `n <= m`. Indices in the potentials are 1-based; slot 0
/// is the virtual source row/column.
fn solve(n: usize, m: usize, cost: impl Fn(usize, usize) -> i64) -> Vec<(usize, usize)> {
    let mut u = vec![0i64; n + 1];
    let mut v = vec![0i64; m + 1];
    // owner[j] = row currently assigned to column j (0 = free)
    let mut owner = vec![0usize; m + 1];
    let mut way = vec![0usize; m + 1];

    for i in 1..=n {
        owner[0] = i;
        let mut j0 = 0usize;
        let mut min_v = vec![i64::MAX; m + 1];
        let mut used = vec![false; m + 1];

        loop {
            used[j0] = true;
            let i0 = owner[j0];
            let mut delta = i64::MAX;
            let mut j1 = 0usize;
            for j in 1..=m {
                if used[j] {
                    continue;
                }
                let reduced = cost(i0 - 1, j - 1) - u[i0] - v[j];
                if reduced < min_v[j] {
                    min_v[j] = reduced;
                    way[j] = j0;
                }
                if min_v[j] < delta {
                    delta = min_v[j];
                    j1 = j;
                }
            }
            for j in 0..=m {
                if used[j] {
                    u[owner[j]] += delta;
                    v[j] -= delta;
                } else {
                    min_v[j] -= delta;
                }
            }
            j0 = j1;
            if owner[j0] == 0 {
                break;
            }
        }

        loop {
            let j1 = way[j0];
            owner[j0] = owner[j1];
            j0 = j1;
            if j0 == 0 {
                break;
            }
        }
    }

    let mut pairs: Vec<(usize, usize)> = (1..=m)
        .filter(|&j| owner[j] != 0)
        .map(|j| (owner[j] - 1, j - 1))
        .collect();
    pairs.sort_unstable();
    pairs
}

// =============================================================================
// Cluster Mapping
// =============================================================================

/// Partial injective mapping from predicted cluster id to true class id.
///
/// Predicted clusters left out of the optimal assignment (more clusters than
/// classes) have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct ClusterMapping {
    pairs: BTreeMap<i64, i64>,
    agreement: u64,
}

impl ClusterMapping {
    /// Find the mapping that maximizes the number of agreeing samples.
    #[must_use]
    pub fn optimal(table: &Contingency) -> Self {
        let weights: Vec<Vec<i64>> = table
            .rows()
            .iter()
            .map(|row| row.iter().map(|&c| c as i64).collect())
            .collect();

        let mut pairs = BTreeMap::new();
        let mut agreement = 0;
        for (i, j) in max_weight_assignment(&weights) {
            pairs.insert(table.clusters()[j], table.classes()[i]);
            agreement += table.get(i, j);
        }
        Self { pairs, agreement }
    }

    /// True class a predicted cluster maps to.
    #[must_use]
    pub fn get(&self, cluster: i64) -> Option<i64> {
        self.pairs.get(&cluster).copied()
    }

    /// Predicted clusters mapped to `class`, ascending.
    #[must_use]
    pub fn clusters_for(&self, class: i64) -> Vec<i64> {
        self.pairs
            .iter()
            .filter(|(_, &c)| c == class)
            .map(|(&p, _)| p)
            .collect()
    }

    /// Samples on the diagonal of the optimal assignment.
    #[must_use]
    pub fn agreement(&self) -> u64 {
        self.agreement
    }

    /// Number of mapped clusters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// True when no cluster is mapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// `(predicted, true)` pairs ordered by predicted id.
    pub fn iter(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.pairs.iter().map(|(&p, &t)| (p, t))
    }
}
