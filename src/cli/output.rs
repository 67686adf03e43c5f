//! Output formatting for CLI commands.

use serde::Serialize;

use crate::cli::args::{DrachmaArgs, OutputFormat};
use crate::error::Result;
use crate::pipeline::TrainingReport;

/// One input/prediction pair for JSON output.
#[derive(Debug, Serialize)]
struct PredictionLine<'a> {
    input: &'a str,
    predicted: &'a str,
}

/// Render a training report in the requested format.
pub fn output_training_report(report: &TrainingReport, cli_args: &DrachmaArgs) -> Result<()> {
    match cli_args.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
        OutputFormat::Human => {
            println!(
                "Loaded {} transactions ({} train / {} test)",
                report.total_records, report.train_records, report.test_records
            );
            println!("Vocabulary size: {}", report.vocabulary_size);
            if !report.converged {
                println!("Warning: solver did not converge; results are best-effort");
            }
            println!("Accuracy: {:.2}", report.accuracy);
            println!();
            println!("Confusion Matrix:");
            print!("{}", report.confusion);
            println!();
            println!("Smoke test predictions:");
            for smoke in &report.smoke_predictions {
                println!("  {} -> {}", smoke.input, smoke.predicted);
            }
            println!();
            println!("Training pipeline completed successfully.");
        }
    }
    Ok(())
}

/// Render ad-hoc predictions in the requested format.
pub fn output_predictions(
    predictions: &[(String, String)],
    cli_args: &DrachmaArgs,
) -> Result<()> {
    match cli_args.output_format {
        OutputFormat::Json => {
            let lines: Vec<PredictionLine<'_>> = predictions
                .iter()
                .map(|(input, predicted)| PredictionLine {
                    input,
                    predicted,
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&lines)?);
        }
        OutputFormat::Human => {
            for (input, predicted) in predictions {
                println!("{input} -> {predicted}");
            }
        }
    }
    Ok(())
}
