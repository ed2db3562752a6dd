//! Evaluate command - score cluster_result.json against labels.json

use super::super::output::{color, log_warning, metric_colored, write_output};
use super::super::parser::{Cli, OutputFormat};
use super::super::utils::resolve_config;

use crate::eval::{evaluate, EvalInputs, EvalReport};

/// Load inputs, evaluate, and print the report.
pub fn run(args: &Cli) -> Result<(), String> {
    let config = resolve_config(
        args.config.as_deref(),
        args.length_policy.map(Into::into),
        args.nmi_average.map(Into::into),
    )?;

    let inputs = EvalInputs::load(&args.data_path, &args.exp_dir).map_err(|e| e.to_string())?;
    let report = evaluate(&inputs, &config).map_err(|e| e.to_string())?;

    for warning in &report.warnings {
        log_warning(warning, args.quiet);
    }

    match args.format {
        OutputFormat::Json => {
            let json = report.to_json().map_err(|e| e.to_string())?;
            write_output(&json)?;
            write_output("\n")?;
        }
        OutputFormat::Human => {
            write_output(&report.summary())?;
            if args.verbose {
                write_output(&per_class_breakdown(&report))?;
            }
        }
    }

    Ok(())
}

fn per_class_breakdown(report: &EvalReport) -> String {
    let mut out = format!("\n{}\n", color("1;36", "Per-Class Breakdown:"));
    for class in &report.scores.per_class {
        let name = report
            .mapping
            .iter()
            .find(|row| row.class_id == class.class_id)
            .map_or_else(|| class.class_id.to_string(), |row| row.class_description.clone());
        out.push_str(&format!(
            "  {:24} P={} R={} F1={} (n={})\n",
            name,
            metric_colored(class.precision),
            metric_colored(class.recall),
            metric_colored(class.f1),
            class.support
        ));
    }
    if report.unresolved_texts > 0 {
        out.push_str(&format!(
            "\n{} result text(s) matched no input text\n",
            report.unresolved_texts
        ));
    }
    out
}
