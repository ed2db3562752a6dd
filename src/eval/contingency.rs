//! Contingency table between two labelings of the same samples.
//!
//! Rows are the distinct true class ids (sorted ascending), columns the
//! distinct predicted cluster ids (sorted ascending). Cell `(i, j)` counts
//! samples with true class `classes[i]` and predicted cluster `clusters[j]`.

use crate::{Error, Result};

/// Dense contingency table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contingency {
    classes: Vec<i64>,
    clusters: Vec<i64>,
    counts: Vec<Vec<u64>>,
    n: u64,
}

impl Contingency {
    /// Count co-occurrences of `truth[i]` and `predicted[i]`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`] if the arrays differ in length.
    pub fn new(truth: &[i64], predicted: &[i64]) -> Result<Self> {
        if truth.len() != predicted.len() {
            return Err(Error::invalid_input(format!(
                "truth has {} entries, predictions have {}",
                truth.len(),
                predicted.len()
            )));
        }

        let classes = sorted_unique(truth);
        let clusters = sorted_unique(predicted);
        let mut counts = vec![vec![0u64; clusters.len()]; classes.len()];
        for (t, p) in truth.iter().zip(predicted) {
            // Both ids come from the sorted unique lists above.
            let (Ok(i), Ok(j)) = (classes.binary_search(t), clusters.binary_search(p)) else {
                continue;
            };
            counts[i][j] += 1;
        }

        Ok(Self {
            classes,
            clusters,
            counts,
            n: truth.len() as u64,
        })
    }

    /// Distinct true class ids, ascending.
    #[must_use]
    pub fn classes(&self) -> &[i64] {
        &self.classes
    }

    /// Distinct predicted cluster ids, ascending.
    #[must_use]
    pub fn clusters(&self) -> &[i64] {
        &self.clusters
    }

    /// Count for row `i`, column `j`.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> u64 {
        self.counts[i][j]
    }

    /// Table rows.
    #[must_use]
    pub fn rows(&self) -> &[Vec<u64>] {
        &self.counts
    }

    /// Total number of samples.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.n
    }

    /// Samples per true class.
    #[must_use]
    pub fn row_sums(&self) -> Vec<u64> {
        self.counts.iter().map(|row| row.iter().sum()).collect()
    }

    /// Samples per predicted cluster.
    #[must_use]
    pub fn col_sums(&self) -> Vec<u64> {
        let mut sums = vec![0u64; self.clusters.len()];
        for row in &self.counts {
            for (s, &c) in sums.iter_mut().zip(row) {
                *s += c;
            }
        }
        sums
    }
}

fn sorted_unique(values: &[i64]) -> Vec<i64> {
    let mut out = values.to_vec();
    out.sort_unstable();
    out.dedup();
    out
}
