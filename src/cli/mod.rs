//! CLI module for Feature Predict
//!
//! Provides subcommands:
//! - `app`: interactive Input/Results screens
//! - `predict`: a single submission from flags
//! - `model-info`: describe the model behind the service

pub mod app;
pub mod model_info;
pub mod predict;
pub mod screens;

use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use tokio::signal;
use tokio::sync::Notify;
use tracing::debug;

use crate::config::AppConfig;
use crate::domain::{
    cancellation, DomainError, PredictionProvider, PredictionResult, RawFeatureInput,
    SubmissionTracker,
};
use crate::infrastructure::logging;
use crate::infrastructure::services::SubmissionService;

/// Feature Predict - Client for a remote feature prediction service
#[derive(Parser)]
#[command(name = "feature-predict")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the interactive two-screen client
    App(ConnectionArgs),

    /// Submit one set of features and print the result
    Predict(predict::PredictArgs),

    /// Print the model description reported by the service
    ModelInfo(ConnectionArgs),
}

/// Overrides for the configured prediction service
#[derive(Args, Clone, Debug, Default)]
pub struct ConnectionArgs {
    /// Base URL of the prediction service (overrides config)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Request timeout in seconds (overrides config)
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

impl ConnectionArgs {
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(base_url) = &self.base_url {
            config.prediction.base_url = base_url.clone();
        }
        if let Some(timeout_secs) = self.timeout_secs {
            config.prediction.timeout_secs = timeout_secs;
        }
    }
}

/// Load `.env` and layered config, apply flag overrides, start logging
pub fn load_config(args: &ConnectionArgs) -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();

    let config = resolve_config(args)?;
    logging::init_logging(&config.logging);

    Ok(config)
}

/// Layered config with flag overrides applied; malformed values are an error
pub fn resolve_config(args: &ConnectionArgs) -> Result<AppConfig, config::ConfigError> {
    let mut config = AppConfig::load()?;
    args.apply(&mut config);
    Ok(config)
}

/// Fire `notify` on every Ctrl-C
///
/// Installing the handler replaces the default SIGINT behaviour, so every
/// screen that waits must also listen on `notify`.
pub fn watch_interrupts() -> Arc<Notify> {
    let notify = Arc::new(Notify::new());
    let sender = notify.clone();

    tokio::spawn(async move {
        while signal::ctrl_c().await.is_ok() {
            debug!("Received Ctrl+C");
            sender.notify_one();
        }
    });

    notify
}

/// Run one submission; a Ctrl-C while it is pending cancels and discards it
pub async fn submit_interruptible<P: PredictionProvider>(
    service: &SubmissionService<P>,
    tracker: &mut SubmissionTracker,
    input: &RawFeatureInput,
    interrupts: &Notify,
) -> Result<PredictionResult, DomainError> {
    let (handle, signal) = cancellation();
    let submission = service.submit(tracker, input, signal);
    tokio::pin!(submission);

    tokio::select! {
        outcome = &mut submission => outcome,
        _ = interrupts.notified() => {
            handle.cancel();
            submission.await
        }
    }
}
