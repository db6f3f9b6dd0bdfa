// File: monitor/src/config/manager.rs
use super::{Config, SecretsLoader};
use crate::errors::ConfigError;
use anyhow::Result;
use std::path::Path;
use std::sync::Arc;
use tokio::fs;
use tracing::{debug, info, warn};

pub struct ConfigManager {
    current_config: Arc<Config>,
}

impl ConfigManager {
    pub async fn new(config_dir: String) -> Result<Self> {
        let config = Self::load_configuration(&config_dir).await?;
        Ok(Self {
            current_config: Arc::new(config),
        })
    }

    pub fn get_current_config(&self) -> Arc<Config> {
        self.current_config.clone()
    }

    async fn load_configuration(config_dir: &str) -> Result<Config> {
        let main_config_path = format!("{}/main.toml", config_dir);
        debug!("Loading main config: {}", main_config_path);

        let main_config_content =
            fs::read_to_string(&main_config_path)
                .await
                .map_err(|e| ConfigError::LoadFailed {
                    path: main_config_path.clone(),
                    reason: e.to_string(),
                })?;

        let mut config: Config =
            toml::from_str(&main_config_content).map_err(|e| ConfigError::ParseError {
                reason: e.to_string(),
            })?;

        let secrets_path = format!("{}/secrets.toml", config_dir);
        let secrets = SecretsLoader::load(Path::new(&secrets_path))?;
        config.discord_webhook_url = secrets.resolve_webhook();

        config.validate()?;

        if config.node.apis.is_empty() {
            warn!("No node APIs configured in {}, cycles will be empty", main_config_path);
        }

        info!(
            "Loaded {} node targets, webhook {}",
            config.node.apis.len(),
            if config.discord_webhook_url.is_some() {
                "configured"
            } else {
                "not configured"
            }
        );

        Ok(config)
    }
}
