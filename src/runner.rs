//! Entry points driving the fetch, transform, render and deliver pipeline.
//!
//! The runner is the only place errors are handled rather than propagated. A dry run logs
//! failures and still completes; a full run logs them and reports failure so the process
//! exits non-zero.

use dioxus_logger::tracing;
use std::{future::Future, process::ExitCode};

use crate::{
    data::deck_guide::GuideSource,
    error::AppError,
    model::{card::Card, webhook::WebhookCredentials},
    service::{
        deck_guide::DeckGuideService,
        delivery::{deliver_cards, CardSink, SEND_INTERVAL},
    },
};

/// Outcome of a run, mapped to the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Completed,
    Failed,
}

impl From<RunStatus> for ExitCode {
    fn from(status: RunStatus) -> Self {
        match status {
            RunStatus::Completed => ExitCode::SUCCESS,
            RunStatus::Failed => ExitCode::FAILURE,
        }
    }
}

/// Runs fetch, transform and render with default settings.
///
/// # Returns
/// - `Ok(Vec<Card>)` - Cards for every guide in source order
/// - `Err(AppError)` - The first stage failure, unmodified
pub async fn run_pipeline<S: GuideSource>(source: &S) -> Result<Vec<Card>, AppError> {
    let service = DeckGuideService::new(source);

    let raw = service.fetch_data().await?;
    let display = service.process_data(Some(raw), None).await?;
    service.make_cards(Some(display)).await
}

/// Runs the pipeline and prints the resulting cards to standard output.
///
/// Failures are logged with their message and any response body the remote end sent, then
/// swallowed.
pub async fn dry_run<S: GuideSource>(source: &S) -> RunStatus {
    match run_pipeline(source).await {
        Ok(cards) => match serde_json::to_string_pretty(&cards) {
            Ok(output) => println!("{output}"),
            Err(e) => tracing::error!("Failed to serialize cards: {}", e),
        },
        Err(e) => log_failure(&e),
    }

    RunStatus::Completed
}

/// Runs the pipeline and delivers every card to the webhook.
///
/// Credentials are validated before anything touches the network. Cards are posted one at a
/// time with `SEND_INTERVAL` between posts; the first failure aborts the remaining sends.
///
/// # Arguments
/// - `source` - Where raw guides are fetched from
/// - `webhook_id` - Webhook identifier, if supplied
/// - `webhook_token` - Webhook token, if supplied
/// - `connect` - Opens the delivery sink from validated credentials
///
/// # Returns
/// - `RunStatus::Completed` - Every card was delivered
/// - `RunStatus::Failed` - A credential was missing or any stage failed
pub async fn full_run<S, K, F, Fut>(
    source: &S,
    webhook_id: Option<String>,
    webhook_token: Option<String>,
    connect: F,
) -> RunStatus
where
    S: GuideSource,
    K: CardSink,
    F: FnOnce(WebhookCredentials) -> Fut,
    Fut: Future<Output = Result<K, AppError>>,
{
    let credentials = match WebhookCredentials::from_parts(webhook_id, webhook_token) {
        Ok(credentials) => credentials,
        Err(e) => {
            tracing::error!("{}", e);
            return RunStatus::Failed;
        }
    };

    match publish(source, credentials, connect).await {
        Ok(delivered) => {
            tracing::info!("Delivered {} cards", delivered);
            RunStatus::Completed
        }
        Err(e) => {
            log_failure(&e);
            RunStatus::Failed
        }
    }
}

async fn publish<S, K, F, Fut>(
    source: &S,
    credentials: WebhookCredentials,
    connect: F,
) -> Result<usize, AppError>
where
    S: GuideSource,
    K: CardSink,
    F: FnOnce(WebhookCredentials) -> Fut,
    Fut: Future<Output = Result<K, AppError>>,
{
    let cards = run_pipeline(source).await?;
    let sink = connect(credentials).await?;

    deliver_cards(&sink, &cards, SEND_INTERVAL).await
}

fn log_failure(err: &AppError) {
    tracing::error!("{}", err);
    if let Some(body) = err.response_body() {
        tracing::error!("{}", body);
    }
}
