//! Error types for cluster-eval.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for cluster-eval operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for cluster-eval operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A required input document is absent.
    #[error("{file} not found in {}", dir.display())]
    MissingFile {
        /// File name that was expected (e.g. `labels.json`).
        file: &'static str,
        /// Directory that was searched.
        dir: PathBuf,
    },

    /// Ground-truth labels and problem texts disagree in length (strict policy only).
    #[error("Length mismatch: {labels} labels for {texts} texts")]
    LengthMismatch {
        /// Number of ground-truth labels.
        labels: usize,
        /// Number of problem texts.
        texts: usize,
    },

    /// Nothing survived unmatched-filtering.
    #[error("No samples were clustered.")]
    NoSamples,

    /// Invalid input provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error (malformed JSON document).
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// Create a missing-file error.
    pub fn missing_file(file: &'static str, dir: impl Into<PathBuf>) -> Self {
        Error::MissingFile {
            file,
            dir: dir.into(),
        }
    }

    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Error::Parse(msg.into())
    }

    /// Create a config error.
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_message_names_file_and_dir() {
        let err = Error::missing_file("cluster_result.json", "/tmp/run-3");
        assert_eq!(
            err.to_string(),
            "cluster_result.json not found in /tmp/run-3"
        );
    }

    #[test]
    fn no_samples_message() {
        assert_eq!(Error::NoSamples.to_string(), "No samples were clustered.");
    }
}
