//! Input documents: the clustering problem, its ground truth, and a candidate result.
//!
//! | Document | File | Rust type |
//! |----------|------|-----------|
//! | Problem definition | `data.json` | [`Problem`] |
//! | Ground-truth labels | `labels.json` | [`Label`] |
//! | Candidate clustering | `cluster_result.json` | [`ClusterResult`] |
//!
//! `Problem::texts` defines the canonical index space `0..n` that every
//! downstream array is expressed in.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A text-clustering problem: a goal and the texts to cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    /// Natural-language clustering goal.
    pub goal: String,
    /// Texts to cluster. Position `i` is sample `i` everywhere else.
    pub texts: Vec<String>,
    /// Optional example cluster descriptions given to the clusterer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example_descriptions: Option<Vec<String>>,
}

impl Problem {
    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    /// True when the problem has no texts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

/// Ground-truth labels, parallel to [`Problem::texts`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Human-readable description of each true class, indexed by class id.
    pub class_descriptions: Vec<String>,
    /// `labels[i]` is the true class id of `texts[i]`.
    pub labels: Vec<i64>,
}

impl Label {
    /// Description for a true class id, if one exists.
    #[must_use]
    pub fn description(&self, class_id: i64) -> Option<&str> {
        usize::try_from(class_id)
            .ok()
            .and_then(|i| self.class_descriptions.get(i))
            .map(String::as_str)
    }
}

/// A candidate clustering: predicted-cluster description → member texts.
///
/// Key order in the source document is preserved and defines the predicted
/// cluster ids: the first key is cluster `0`, the next `1`, and so on. A key
/// repeated in the document keeps its first position and takes the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClusterResult {
    groups: IndexMap<String, Vec<String>>,
}

impl ClusterResult {
    /// Build a result from `(description, members)` pairs in cluster-id order.
    pub fn from_groups<I, D, T>(groups: I) -> Self
    where
        I: IntoIterator<Item = (D, Vec<T>)>,
        D: Into<String>,
        T: Into<String>,
    {
        let mut map = IndexMap::new();
        for (description, members) in groups {
            map.insert(
                description.into(),
                members.into_iter().map(Into::into).collect(),
            );
        }
        Self { groups: map }
    }

    /// Number of predicted clusters (`k`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// True when the result has no clusters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterate `(cluster_id, description, members)` in cluster-id order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str, &[String])> {
        self.groups
            .iter()
            .enumerate()
            .map(|(id, (desc, members))| (id, desc.as_str(), members.as_slice()))
    }

    /// Description of a predicted cluster id.
    #[must_use]
    pub fn description(&self, cluster_id: usize) -> Option<&str> {
        self.groups
            .get_index(cluster_id)
            .map(|(desc, _)| desc.as_str())
    }

    /// All descriptions in cluster-id order.
    #[must_use]
    pub fn descriptions(&self) -> Vec<&str> {
        self.groups.keys().map(String::as_str).collect()
    }
}
