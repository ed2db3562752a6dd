//! Evaluation configuration.
//!
//! Every field has a default, so an empty TOML file is a valid config:
//!
//! ```toml
//! length_policy = "truncate"   # or "strict"
//! nmi_average = "arithmetic"   # geometric | min | max
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::{Error, Result};

// =============================================================================
// Policies
// =============================================================================

/// What to do when `labels.json` and `data.json` disagree in length.
///
/// This happens when a run was made on a subsample of the texts but the full
/// dataset is pointed at (or the other way around). There is no reliable way
/// to tell which samples were kept, so the default only compares the common
/// prefix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthPolicy {
    /// Truncate both arrays to the shorter length and warn.
    #[default]
    Truncate,
    /// Fail with [`Error::LengthMismatch`].
    Strict,
}

/// Normalizer used for NMI: a generalized mean of the two entropies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AverageMethod {
    /// `(H(U) + H(V)) / 2`
    #[default]
    Arithmetic,
    /// `sqrt(H(U) * H(V))`
    Geometric,
    /// `min(H(U), H(V))`
    Min,
    /// `max(H(U), H(V))`
    Max,
}

impl AverageMethod {
    /// Combine two entropies.
    #[must_use]
    pub fn combine(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Arithmetic => (a + b) / 2.0,
            Self::Geometric => (a * b).sqrt(),
            Self::Min => a.min(b),
            Self::Max => a.max(b),
        }
    }
}

// =============================================================================
// EvalConfig
// =============================================================================

/// Configuration for one evaluation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EvalConfig {
    /// Label/text length mismatch handling.
    pub length_policy: LengthPolicy,
    /// NMI normalizer.
    pub nmi_average: AverageMethod,
}

impl EvalConfig {
    /// Default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the length mismatch policy.
    pub fn with_length_policy(mut self, policy: LengthPolicy) -> Self {
        self.length_policy = policy;
        self
    }

    /// Set the NMI normalizer.
    pub fn with_nmi_average(mut self, method: AverageMethod) -> Self {
        self.nmi_average = method;
        self
    }

    /// Parse a config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(e.to_string()))
    }

    /// Load a config from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read {}: {}", path.display(), e)))?;
        toml::from_str(&content).map_err(|e| Error::config(format!("{}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(EvalConfig::from_toml_str("").unwrap(), EvalConfig::default());
    }

    #[test]
    fn parses_all_fields() {
        let config =
            EvalConfig::from_toml_str("length_policy = \"strict\"\nnmi_average = \"geometric\"\n")
                .unwrap();
        assert_eq!(config.length_policy, LengthPolicy::Strict);
        assert_eq!(config.nmi_average, AverageMethod::Geometric);
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = EvalConfig::from_toml_str("subsample = true").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn rejects_unknown_policy() {
        assert!(EvalConfig::from_toml_str("length_policy = \"pad\"").is_err());
    }

    #[test]
    fn average_methods() {
        assert!((AverageMethod::Arithmetic.combine(1.0, 3.0) - 2.0).abs() < 1e-12);
        assert!((AverageMethod::Geometric.combine(1.0, 4.0) - 2.0).abs() < 1e-12);
        assert_eq!(AverageMethod::Min.combine(1.0, 3.0), 1.0);
        assert_eq!(AverageMethod::Max.combine(1.0, 3.0), 3.0);
    }

    #[test]
    fn builder() {
        let config = EvalConfig::new()
            .with_length_policy(LengthPolicy::Strict)
            .with_nmi_average(AverageMethod::Max);
        assert_eq!(config.length_policy, LengthPolicy::Strict);
        assert_eq!(config.nmi_average, AverageMethod::Max);
    }

    #[test]
    fn missing_file_is_config_error() {
        let err = EvalConfig::from_file("/nonexistent/eval.toml").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
