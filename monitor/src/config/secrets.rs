// File: monitor/src/config/secrets.rs
//! Secrets loader for the alert webhook.
//!
//! The Discord webhook URL is kept out of `main.toml` in a separate
//! `config/secrets.toml` that should be excluded from version control. The
//! `DISCORD_WEBHOOK` environment variable takes precedence over the file.
//!
//! Example secrets.toml:
//! ```toml
//! discord_webhook = "https://discord.com/api/webhooks/..."
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{info, warn};

pub const WEBHOOK_ENV_VAR: &str = "DISCORD_WEBHOOK";

/// Structure matching the secrets.toml file format
#[derive(Debug, Deserialize, Default)]
pub struct SecretsFile {
    #[serde(default)]
    pub discord_webhook: Option<String>,
}

/// Loader for secrets from the secrets.toml file
pub struct SecretsLoader {
    secrets: SecretsFile,
}

impl SecretsLoader {
    /// Load secrets from the specified file path.
    /// Returns an empty loader if the file doesn't exist.
    pub fn load(secrets_path: &Path) -> Result<Self> {
        if !secrets_path.exists() {
            warn!(
                "Secrets file not found at {:?}, webhook must come from {}",
                secrets_path, WEBHOOK_ENV_VAR
            );
            return Ok(Self {
                secrets: SecretsFile::default(),
            });
        }

        let content = std::fs::read_to_string(secrets_path)
            .with_context(|| format!("Failed to read secrets file: {:?}", secrets_path))?;

        let secrets: SecretsFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse secrets file: {:?}", secrets_path))?;

        info!("Loaded secrets from {:?}", secrets_path);

        Ok(Self { secrets })
    }

    /// Webhook URL from the file, if set and not blank
    pub fn discord_webhook(&self) -> Option<&str> {
        self.secrets
            .discord_webhook
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Resolve the webhook URL, preferring the environment over the file
    pub fn resolve_webhook(&self) -> Option<String> {
        resolve_webhook(self.discord_webhook(), std::env::var(WEBHOOK_ENV_VAR).ok())
    }
}

fn resolve_webhook(from_file: Option<&str>, from_env: Option<String>) -> Option<String> {
    from_env
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .or_else(|| from_file.map(str::to_string))
}
