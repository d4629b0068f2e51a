mod cli;
mod config;
mod data;
mod error;
mod model;
mod runner;
mod service;
mod startup;
mod util;

use clap::Parser;
use dioxus_logger::tracing::{self, Level};
use std::process::ExitCode;

use crate::{
    cli::{Cli, Command},
    config::Config,
    runner::RunStatus,
    service::delivery::DiscordWebhookSink,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    if let Err(e) = dioxus_logger::init(level) {
        eprintln!("Failed to initialise logger: {e}");
    }

    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            return RunStatus::Failed.into();
        }
    };

    let repository = match startup::setup_guide_repository(&config) {
        Ok(repository) => repository,
        Err(e) => {
            tracing::error!("{}", e);
            return RunStatus::Failed.into();
        }
    };

    let status = match cli.command {
        Command::DryRun => runner::dry_run(&repository).await,
        Command::Run(args) => {
            let webhook_id = args.webhook_id.or(config.webhook_id);
            let webhook_token = args.webhook_token.or(config.webhook_token);

            runner::full_run(&repository, webhook_id, webhook_token, |credentials| {
                DiscordWebhookSink::connect(startup::setup_discord_http(), credentials)
            })
            .await
        }
    };

    status.into()
}
