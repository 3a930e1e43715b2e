//! Predict command - one submission from flags, no interaction

use clap::Args;

use super::screens::render_results_screen;
use super::{load_config, submit_interruptible, watch_interrupts, ConnectionArgs};
use crate::domain::{RawFeatureInput, SubmissionTracker};

/// Arguments for the predict command
#[derive(Args, Clone, Debug)]
pub struct PredictArgs {
    /// Value for feature1
    #[arg(long, allow_hyphen_values = true)]
    pub feature1: String,

    /// Value for feature2
    #[arg(long, allow_hyphen_values = true)]
    pub feature2: String,

    /// Value for feature3
    #[arg(long, allow_hyphen_values = true)]
    pub feature3: String,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

impl PredictArgs {
    pub fn raw_input(&self) -> RawFeatureInput {
        RawFeatureInput::new(&self.feature1, &self.feature2, &self.feature3)
    }
}

/// Run a single prediction and print the Results screen
pub async fn run(args: PredictArgs) -> anyhow::Result<()> {
    let config = load_config(&args.connection)?;
    let service = crate::create_submission_service(&config)?;
    let interrupts = watch_interrupts();

    let mut tracker = SubmissionTracker::new();
    let result =
        submit_interruptible(&service, &mut tracker, &args.raw_input(), &interrupts).await?;

    print!("{}", render_results_screen(&result));

    Ok(())
}
