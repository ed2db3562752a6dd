//! # cluster-eval
//!
//! Evaluate text-clustering results against ground-truth labels.
//!
//! - **Align**: resolve a result document's member texts back to sample positions
//! - **Score**: NMI, ARI, Macro F1, and accuracy under the optimal (Hungarian) relabeling
//! - **Report**: sample counts, scores, and which predicted clusters map to each true class
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cluster_eval::eval::{evaluate, EvalConfig, EvalInputs};
//!
//! let inputs = EvalInputs::load("data/topics", "runs/exp-01")?;
//! let report = evaluate(&inputs, &EvalConfig::default())?;
//! println!("{}", report);
//! # Ok::<(), cluster_eval::Error>(())
//! ```
//!
//! ## Input Files
//!
//! | File | Shape |
//! |------|-------|
//! | `data.json` | `{"goal": str, "texts": [str], "example_descriptions"?: [str]}` |
//! | `labels.json` | `{"class_descriptions": [str], "labels": [int]}` |
//! | `cluster_result.json` | `{"<cluster description>": [str], ...}` |
//!
//! ## Feature Flags
//!
//! - `cli` (default): the `cluster-eval` binary and the [`cli`] module

#![warn(missing_docs)]

mod error;
pub mod eval;
pub mod problem;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Error, Result};
pub use eval::{evaluate, EvalConfig, EvalInputs, EvalReport};
pub use problem::{ClusterResult, Label, Problem};
