//! cluster-eval - score a text clustering against ground-truth labels
//!
//! # Usage
//!
//! ```bash
//! # Human-readable report
//! cluster-eval --data_path data/topics --exp_dir runs/exp-01
//!
//! # JSON report with per-sample predicted ids
//! cluster-eval --data_path data/topics --exp_dir runs/exp-01 --format json
//!
//! # Fail instead of truncating when labels.json and data.json disagree in length
//! cluster-eval --data_path data/topics --exp_dir runs/sub --length-policy strict
//! ```

use std::process::ExitCode;

use clap::Parser;

use cluster_eval::cli::commands::evaluate;
use cluster_eval::cli::{color, init_logging, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match evaluate::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", color("31", "error:"), e);
            ExitCode::FAILURE
        }
    }
}
