use clap::Parser;
use feature_predict::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::App(args) => cli::app::run(args).await,
        Command::Predict(args) => cli::predict::run(args).await,
        Command::ModelInfo(args) => cli::model_info::run(args).await,
    }
}
