//! Utility functions for CLI commands

use crate::eval::{AverageMethod, EvalConfig, LengthPolicy};

/// Build the effective config: file values first, then flag overrides.
pub fn resolve_config(
    path: Option<&str>,
    length_policy: Option<LengthPolicy>,
    nmi_average: Option<AverageMethod>,
) -> Result<EvalConfig, String> {
    let mut config = match path {
        Some(path) => EvalConfig::from_file(path).map_err(|e| e.to_string())?,
        None => EvalConfig::default(),
    };
    if let Some(policy) = length_policy {
        config = config.with_length_policy(policy);
    }
    if let Some(method) = nmi_average {
        config = config.with_nmi_average(method);
    }
    Ok(config)
}

/// Install the stderr log subscriber. `RUST_LOG` takes precedence.
///
/// Library code logs through the `log` facade; the subscriber's log bridge
/// picks those records up.
pub fn init_logging(verbose: bool, quiet: bool) {
    use tracing_subscriber::EnvFilter;

    let default = if quiet {
        "off"
    } else if verbose {
        "cluster_eval=debug"
    } else {
        // Warnings already reach the user through the report.
        "error"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
