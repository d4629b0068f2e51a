//! Webhook delivery of rendered cards.
//!
//! Cards are posted one at a time, in order, with a fixed pause between posts to stay under
//! Discord's webhook rate limit. The first failure stops the run.

use dioxus_logger::tracing;
use serenity::{
    all::{CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter, ExecuteWebhook, Webhook, WebhookId},
    async_trait,
    http::Http,
};
use std::{sync::Arc, time::Duration};

use crate::{
    error::AppError,
    model::{card::Card, webhook::WebhookCredentials},
};

/// Pause between two consecutive webhook posts.
pub const SEND_INTERVAL: Duration = Duration::from_millis(1000);

/// Destination that accepts one card per call.
#[async_trait]
pub trait CardSink: Send + Sync {
    /// Delivers a single card.
    async fn deliver(&self, card: &Card) -> Result<(), AppError>;
}

/// Discord webhook addressed by ID and token.
pub struct DiscordWebhookSink {
    /// Discord HTTP client used for webhook requests
    http: Arc<Http>,
    /// Resolved webhook, carrying its token
    webhook: Webhook,
}

impl DiscordWebhookSink {
    /// Resolves the webhook from its credentials.
    ///
    /// # Arguments
    /// - `http` - Discord HTTP client; webhooks do not need a bot token
    /// - `credentials` - Validated webhook ID and token
    ///
    /// # Returns
    /// - `Ok(DiscordWebhookSink)` - Webhook exists and the token is valid
    /// - `Err(AppError::DiscordErr)` - Discord rejected the lookup
    pub async fn connect(
        http: Arc<Http>,
        credentials: WebhookCredentials,
    ) -> Result<Self, AppError> {
        let webhook =
            Webhook::from_id_with_token(&http, WebhookId::new(credentials.id), &credentials.token)
                .await?;

        tracing::debug!(
            "Resolved webhook {} ({})",
            webhook.id,
            webhook.name.as_deref().unwrap_or("unnamed")
        );

        Ok(Self { http, webhook })
    }
}

#[async_trait]
impl CardSink for DiscordWebhookSink {
    async fn deliver(&self, card: &Card) -> Result<(), AppError> {
        let message = ExecuteWebhook::new().embeds(vec![build_card_embed(card)]);

        self.webhook.execute(&self.http, true, message).await?;

        Ok(())
    }
}

/// Builds a Discord embed for a card.
///
/// Only the parts present on the card are set, so a continuation card carries no title,
/// author or link.
///
/// # Arguments
/// - `card` - Rendered card
///
/// # Returns
/// - `CreateEmbed` - Discord embed ready for posting
pub fn build_card_embed(card: &Card) -> CreateEmbed {
    let mut embed = CreateEmbed::new().color(card.color);

    if let Some(title) = &card.title {
        embed = embed.title(title);
    }

    if let Some(author) = &card.author {
        embed = embed.author(
            CreateEmbedAuthor::new(&author.name)
                .url(&author.url)
                .icon_url(&author.icon_url),
        );
    }

    if let Some(url) = &card.url {
        embed = embed.url(url);
    }

    embed = embed.fields(
        card.fields
            .iter()
            .map(|field| (field.name.as_str(), field.value.as_str(), false)),
    );

    if let Some(footer) = &card.footer {
        embed = embed.footer(CreateEmbedFooter::new(&footer.text).icon_url(&footer.icon_url));
    }

    embed
}

/// Delivers cards to `sink` one at a time, in order.
///
/// Waits `interval` between consecutive deliveries (never before the first). Stops at the
/// first failure without reporting which earlier cards went out.
///
/// # Arguments
/// - `sink` - Delivery destination
/// - `cards` - Cards in posting order
/// - `interval` - Pause between deliveries
///
/// # Returns
/// - `Ok(usize)` - Number of cards delivered
/// - `Err(AppError)` - The first delivery failure
pub async fn deliver_cards<K: CardSink>(
    sink: &K,
    cards: &[Card],
    interval: Duration,
) -> Result<usize, AppError> {
    for (i, card) in cards.iter().enumerate() {
        if i > 0 {
            tokio::time::sleep(interval).await;
        }

        sink.deliver(card).await?;

        tracing::info!(
            "Delivered card {}/{}: {}",
            i + 1,
            cards.len(),
            card.title.as_deref().unwrap_or("(continued)")
        );
    }

    Ok(cards.len())
}
