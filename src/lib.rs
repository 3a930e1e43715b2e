//! Feature Predict
//!
//! A client for a remote prediction service with support for:
//! - Validating three numeric feature inputs before anything is sent
//! - A single bounded, cancellable prediction request per submission
//! - A two-screen terminal front end (Input and Results)

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use infrastructure::prediction::{HttpClient, HttpPredictionClient};
use infrastructure::services::{SubmissionService, SubmissionServiceConfig};
use tracing::info;

/// Submission service backed by the real HTTP client
pub type HttpSubmissionService = SubmissionService<HttpPredictionClient<HttpClient>>;

/// Create the submission service from validated configuration
pub fn create_submission_service(config: &AppConfig) -> anyhow::Result<HttpSubmissionService> {
    config.validate()?;

    let provider = HttpPredictionClient::new(HttpClient::new(), &config.prediction.base_url);
    info!(
        base_url = %provider.base_url(),
        timeout_secs = config.prediction.timeout_secs,
        "Using prediction service"
    );

    Ok(SubmissionService::with_config(
        Arc::new(provider),
        SubmissionServiceConfig::with_timeout(config.prediction.timeout()),
    ))
}
