//! CLI argument parsing and structure definitions

use clap::{Parser, ValueEnum};

use crate::eval::{AverageMethod, LengthPolicy};

/// Evaluate a clustering result against ground-truth labels
#[derive(Parser, Debug)]
#[command(name = "cluster-eval")]
#[command(
    author,
    version,
    about = "Evaluate a clustering result against ground-truth labels",
    long_about = r#"
cluster-eval - score a text clustering against ground truth

INPUTS:
  <data_path>/data.json            {"goal", "texts", "example_descriptions"?}
  <data_path>/labels.json          {"class_descriptions", "labels"}
  <exp_dir>/cluster_result.json    {"<cluster description>": [texts...]}

METRICS (on texts assigned to some predicted cluster):
  • NMI       - normalized mutual information
  • ARI       - adjusted Rand index
  • Macro F1  - per-class F1 after optimal relabeling, unweighted mean
  • Accuracy  - fraction correct after optimal (Hungarian) relabeling

EXAMPLES:
  cluster-eval --data_path data/topics --exp_dir runs/exp-01
  cluster-eval --data_path data/topics --exp_dir runs/exp-01 --format json
  cluster-eval --data_path data/topics --exp_dir runs/sub --length-policy strict
"#
)]
pub struct Cli {
    /// Directory containing data.json and labels.json
    #[arg(long = "data_path", visible_alias = "data-path", value_name = "DIR")]
    pub data_path: String,

    /// Directory containing cluster_result.json
    #[arg(long = "exp_dir", visible_alias = "exp-dir", value_name = "DIR")]
    pub exp_dir: String,

    /// Output format
    #[arg(long, default_value = "human")]
    pub format: OutputFormat,

    /// Load evaluation settings from a TOML file
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// How to handle labels.json / data.json length mismatch (overrides --config)
    #[arg(long, value_name = "POLICY")]
    pub length_policy: Option<LengthPolicyArg>,

    /// NMI normalizer (overrides --config)
    #[arg(long, value_name = "METHOD")]
    pub nmi_average: Option<NmiAverageArg>,

    /// Also print the per-class breakdown
    #[arg(short, long)]
    pub verbose: bool,

    /// Minimal output (suppress warnings)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report (default)
    #[default]
    Human,
    /// Full report as JSON
    Json,
}

/// Length mismatch policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LengthPolicyArg {
    /// Truncate to the shorter length and warn
    Truncate,
    /// Fail
    Strict,
}

impl From<LengthPolicyArg> for LengthPolicy {
    fn from(arg: LengthPolicyArg) -> Self {
        match arg {
            LengthPolicyArg::Truncate => Self::Truncate,
            LengthPolicyArg::Strict => Self::Strict,
        }
    }
}

/// NMI normalizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NmiAverageArg {
    /// Arithmetic mean of the entropies
    Arithmetic,
    /// Geometric mean of the entropies
    Geometric,
    /// Smaller entropy
    Min,
    /// Larger entropy
    Max,
}

impl From<NmiAverageArg> for AverageMethod {
    fn from(arg: NmiAverageArg) -> Self {
        match arg {
            NmiAverageArg::Arithmetic => Self::Arithmetic,
            NmiAverageArg::Geometric => Self::Geometric,
            NmiAverageArg::Min => Self::Min,
            NmiAverageArg::Max => Self::Max,
        }
    }
}
