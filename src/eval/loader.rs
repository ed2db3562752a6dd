//! Loading the three input documents from disk.
//!
//! ```text
//! <data_path>/data.json            -> Problem
//! <data_path>/labels.json          -> Label
//! <exp_dir>/cluster_result.json    -> ClusterResult
//! ```
//!
//! Each file is read in one call and parsed from memory; no handle outlives
//! the read. Only structural deserialization is done here.

use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

use crate::problem::{ClusterResult, Label, Problem};
use crate::{Error, Result};

/// Problem definition file name.
pub const DATA_FILE: &str = "data.json";
/// Ground-truth label file name.
pub const LABELS_FILE: &str = "labels.json";
/// Candidate clustering file name.
pub const RESULT_FILE: &str = "cluster_result.json";

/// Everything one evaluation run reads.
#[derive(Debug, Clone)]
pub struct EvalInputs {
    /// Problem definition.
    pub problem: Problem,
    /// Ground-truth labels.
    pub label: Label,
    /// Candidate clustering.
    pub result: ClusterResult,
}

impl EvalInputs {
    /// Bundle already-parsed documents.
    pub fn new(problem: Problem, label: Label, result: ClusterResult) -> Self {
        Self {
            problem,
            label,
            result,
        }
    }

    /// Load all three documents.
    ///
    /// # Errors
    ///
    /// [`Error::MissingFile`] if any document is absent, [`Error::Parse`] if
    /// one is not valid JSON of the expected shape.
    pub fn load(data_dir: impl AsRef<Path>, exp_dir: impl AsRef<Path>) -> Result<Self> {
        let data_dir = data_dir.as_ref();
        let problem = load_problem(data_dir)?;
        let label = load_label(data_dir)?;
        let result = load_cluster_result(exp_dir)?;
        log::debug!(
            "Loaded {} texts, {} labels, {} predicted clusters",
            problem.len(),
            label.labels.len(),
            result.len()
        );
        Ok(Self::new(problem, label, result))
    }
}

/// Load `data.json` from a data directory.
pub fn load_problem(data_dir: impl AsRef<Path>) -> Result<Problem> {
    read_json(data_dir.as_ref(), DATA_FILE)
}

/// Load `labels.json` from a data directory.
pub fn load_label(data_dir: impl AsRef<Path>) -> Result<Label> {
    read_json(data_dir.as_ref(), LABELS_FILE)
}

/// Load `cluster_result.json` from an experiment directory.
pub fn load_cluster_result(exp_dir: impl AsRef<Path>) -> Result<ClusterResult> {
    read_json(exp_dir.as_ref(), RESULT_FILE)
}

fn read_json<T: DeserializeOwned>(dir: &Path, file: &'static str) -> Result<T> {
    let path: PathBuf = dir.join(file);
    if !path.is_file() {
        return Err(Error::missing_file(file, dir));
    }
    let content = fs::read_to_string(&path)?;
    serde_json::from_str(&content)
        .map_err(|e| Error::parse(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, file: &str, content: &str) {
        fs::write(dir.join(file), content).expect("write fixture");
    }

    fn full_fixture() -> TempDir {
        let dir = tempfile::tempdir().expect("tempdir");
        write(dir.path(), DATA_FILE, r#"{"goal": "g", "texts": ["a", "b"]}"#);
        write(
            dir.path(),
            LABELS_FILE,
            r#"{"class_descriptions": ["x"], "labels": [0, 0]}"#,
        );
        write(dir.path(), RESULT_FILE, r#"{"G1": ["a", "b"]}"#);
        dir
    }

    #[test]
    fn loads_all_documents() {
        let dir = full_fixture();
        let inputs = EvalInputs::load(dir.path(), dir.path()).unwrap();
        assert_eq!(inputs.problem.texts, vec!["a", "b"]);
        assert_eq!(inputs.label.labels, vec![0, 0]);
        assert_eq!(inputs.result.len(), 1);
    }

    #[test]
    fn missing_labels_is_reported() {
        let dir = full_fixture();
        fs::remove_file(dir.path().join(LABELS_FILE)).unwrap();
        let err = EvalInputs::load(dir.path(), dir.path()).unwrap_err();
        assert!(matches!(err, Error::MissingFile { file: LABELS_FILE, .. }));
    }

    #[test]
    fn missing_result_is_reported() {
        let data = full_fixture();
        let exp = tempfile::tempdir().unwrap();
        let err = EvalInputs::load(data.path(), exp.path()).unwrap_err();
        match err {
            Error::MissingFile { file, dir } => {
                assert_eq!(file, RESULT_FILE);
                assert_eq!(dir, exp.path());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_data_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_problem(dir.path()).unwrap_err();
        assert!(matches!(err, Error::MissingFile { file: DATA_FILE, .. }));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let dir = full_fixture();
        write(dir.path(), RESULT_FILE, "{not json");
        let err = load_cluster_result(dir.path()).unwrap_err();
        match err {
            Error::Parse(msg) => assert!(msg.contains(RESULT_FILE)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn wrong_shape_is_parse_error() {
        let dir = full_fixture();
        write(dir.path(), LABELS_FILE, r#"{"labels": [0]}"#);
        assert!(matches!(load_label(dir.path()), Err(Error::Parse(_))));
    }
}
