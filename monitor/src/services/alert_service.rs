// File: monitor/src/services/alert_service.rs
use anyhow::{anyhow, Result};
use chrono::Utc;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::constants::alerts;
use crate::health::retry::{retry, RetryPolicy};
use crate::health::types::PerformanceRecord;

const SYNC_ALERT_TITLE: &str = "Celestia DA Node Sync Alert";
const SYNC_ALERT_DESCRIPTION: &str = "*Your node sync check show some problems, please check it*";
const SYNC_BEHIND_MESSAGE: &str = "Your node not synced";

const BALANCE_ALERT_TITLE: &str = "Celestia DA Node Min balance check Alert";
const BALANCE_ALERT_DESCRIPTION: &str =
    "*Your node minimum balance check found some problem, please check it*";
const BALANCE_LOW_MESSAGE: &str = "Your node balance is lower than minimum balance you set";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WebhookPayload {
    pub content: String,
    pub embeds: Vec<Embed>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Embed {
    pub title: String,
    pub description: String,
    pub color: u32,
    pub fields: Vec<EmbedField>,
    pub thumbnail: EmbedThumbnail,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EmbedThumbnail {
    pub url: String,
}

/// Turns failing performance records into Discord webhook alerts.
///
/// Every cycle is alerted on its own: nothing is remembered between calls.
#[derive(Clone)]
pub struct AlertService {
    webhook_url: Option<String>,
    user_ids: Vec<String>,
    role_ids: Vec<String>,
    client: Client,
    retry_policy: RetryPolicy,
}

impl AlertService {
    pub fn new(webhook_url: Option<String>, user_ids: Vec<String>, role_ids: Vec<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(alerts::WEBHOOK_TIMEOUT_SECONDS))
            .build()
            .map_err(|e| anyhow!("Failed to create HTTP client for AlertService: {}", e))?;

        Ok(Self {
            webhook_url: webhook_url.filter(|url| !url.trim().is_empty()),
            user_ids: non_blank(user_ids),
            role_ids: non_blank(role_ids),
            client,
            retry_policy: RetryPolicy::fixed(
                alerts::WEBHOOK_ATTEMPTS,
                Duration::from_secs(alerts::WEBHOOK_RETRY_DELAY_SECONDS),
            ),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.discord_webhook_url.clone(),
            config.discord.alert_user_ids.clone(),
            config.discord.alert_role_ids.clone(),
        )
    }

    /// Override the delivery retry schedule
    pub fn with_retry_policy(mut self, retry_policy: RetryPolicy) -> Self {
        self.retry_policy = retry_policy;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.webhook_url.is_some()
    }

    /// Send one webhook message covering every failing check in `records`
    pub async fn send_alerts(&self, records: &[PerformanceRecord]) -> Result<()> {
        let embeds = build_embeds(records, Utc::now().timestamp());
        if embeds.is_empty() {
            info!("There is no alert to send");
            return Ok(());
        }

        let Some(webhook_url) = &self.webhook_url else {
            warn!(
                "{} alerts pending but no Discord webhook configured, skipping delivery",
                embeds.len()
            );
            return Ok(());
        };

        let payload = WebhookPayload {
            content: self.mention_content(),
            embeds,
        };

        info!("Sending {} alerts via Discord", payload.embeds.len());
        retry(&self.retry_policy, "Discord webhook delivery", || {
            self.send_webhook(webhook_url, &payload)
        })
        .await
        .map_err(|e| anyhow!("failed to send alert via discord: {}", e))?;

        info!("Sent alert via Discord successfully");
        Ok(())
    }

    /// Mentions for configured users followed by configured roles
    pub fn mention_content(&self) -> String {
        let users = self.user_ids.iter().map(|id| format!("<@{}> ", id));
        let roles = self.role_ids.iter().map(|id| format!("<@&{}> ", id));
        users.chain(roles).collect()
    }

    async fn send_webhook(&self, webhook_url: &str, payload: &WebhookPayload) -> Result<()> {
        let response = self
            .client
            .post(webhook_url)
            .json(payload)
            .send()
            .await
            .map_err(|e| anyhow!("failed to send webhook request: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("webhook returned HTTP {}: {}", status, body));
        }

        debug!("Webhook accepted with HTTP {}", status);
        Ok(())
    }
}

fn non_blank(ids: Vec<String>) -> Vec<String> {
    ids.into_iter()
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .collect()
}

/// One embed per failing check; passing checks produce nothing
pub fn build_embeds(records: &[PerformanceRecord], unix_time: i64) -> Vec<Embed> {
    let mut embeds = Vec::new();

    for record in records {
        if !record.sync.synced() {
            let message = record.sync.error().unwrap_or(SYNC_BEHIND_MESSAGE);
            embeds.push(alert_embed(
                SYNC_ALERT_TITLE,
                SYNC_ALERT_DESCRIPTION,
                &record.node_url,
                message,
                unix_time,
            ));
        }

        if !record.balance.sufficient() {
            let message = record.balance.error().unwrap_or(BALANCE_LOW_MESSAGE);
            embeds.push(alert_embed(
                BALANCE_ALERT_TITLE,
                BALANCE_ALERT_DESCRIPTION,
                &record.node_url,
                message,
                unix_time,
            ));
        }
    }

    embeds
}

fn alert_embed(title: &str, description: &str, node_url: &str, message: &str, unix_time: i64) -> Embed {
    Embed {
        title: title.to_string(),
        description: description.to_string(),
        color: alerts::EMBED_COLOR,
        fields: vec![
            field("URL", node_url),
            field("Error", message),
            field("Time", &format!("<t:{}>", unix_time)),
        ],
        thumbnail: EmbedThumbnail {
            url: alerts::EMBED_THUMBNAIL_URL.to_string(),
        },
    }
}

fn field(name: &str, value: &str) -> EmbedField {
    EmbedField {
        name: name.to_string(),
        value: value.to_string(),
        inline: false,
    }
}
