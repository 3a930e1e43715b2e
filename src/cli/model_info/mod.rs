//! Model info command - print what the service reports about its model

use super::screens::render_model_info;
use super::{load_config, ConnectionArgs};

/// Fetch and print the model description
pub async fn run(args: ConnectionArgs) -> anyhow::Result<()> {
    let config = load_config(&args)?;
    let service = crate::create_submission_service(&config)?;

    let info = service.model_info().await?;
    print!("{}", render_model_info(&info));

    Ok(())
}
