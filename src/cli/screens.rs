//! Text rendering for the Input and Results screens

use std::fmt::Write;

use crate::domain::{FeatureName, ModelInfo, PredictionResult, SubmissionTracker};

pub const INPUT_TITLE: &str = "ML Model Input";
pub const RESULTS_TITLE: &str = "Prediction Results";
pub const SUBMIT_LABEL: &str = "Get Prediction";
pub const BACK_LABEL: &str = "Make Another Prediction";

fn title_bar(title: &str) -> String {
    format!("== {} ==\n", title)
}

/// Header of the Input screen, with the last error if any
pub fn render_input_screen(tracker: &SubmissionTracker) -> String {
    let mut out = title_bar(INPUT_TITLE);
    out.push_str("Enter Model Features\n");

    if let Some(error) = tracker.last_error() {
        let _ = writeln!(out, "Error: {}", error);
    }

    out
}

/// Prompt for a single field
pub fn render_field_prompt(name: FeatureName) -> String {
    format!("{}: ", name.label())
}

/// Shown while the request is outstanding; the submit control is disabled
pub fn render_submitting() -> String {
    format!("[{}] Requesting prediction... (Ctrl-C to cancel)\n", SUBMIT_LABEL)
}

/// The Results screen: prediction and inputs, four decimals each
pub fn render_results_screen(result: &PredictionResult) -> String {
    let mut out = title_bar(RESULTS_TITLE);

    let _ = writeln!(out, "Prediction: {:.4}", result.prediction);
    out.push('\n');
    out.push_str("Input Features:\n");

    for (name, value) in result.features.iter() {
        let _ = writeln!(out, "  {}: {:.4}", name, value);
    }

    out
}

/// Action line under the Results screen in the interactive client
pub fn render_back_prompt() -> String {
    format!("\n[{}] press Enter, or q to quit\n", BACK_LABEL)
}

pub fn render_model_info(info: &ModelInfo) -> String {
    let mut out = title_bar("Model Info");

    let _ = writeln!(out, "Model type: {}", info.model_type);
    let _ = writeln!(out, "Intercept: {:.4}", info.model_parameters.intercept);
    out.push_str("Coefficients:\n");

    for (index, coefficient) in info.model_parameters.coefficients.iter().enumerate() {
        let name = info
            .features
            .get(index)
            .map(String::as_str)
            .unwrap_or("?");
        let _ = writeln!(out, "  {}: {:.4}", name, coefficient);
    }

    out
}
