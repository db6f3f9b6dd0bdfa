// File: monitor/src/config/mod.rs
pub mod manager;
pub mod secrets;

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::constants::{defaults, policy};
use crate::errors::ConfigError;
use crate::health::retry::RetryPolicy;
use crate::health::types::{NodeTarget, ThresholdPolicy};

pub use manager::ConfigManager;
pub use secrets::SecretsLoader;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub node: NodeSection,
    #[serde(default)]
    pub discord: DiscordConfig,
    #[serde(default)]
    pub monitor: MonitorSettings,
    // Resolved from secrets.toml or the environment, never from main.toml
    #[serde(skip)]
    pub discord_webhook_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeSection {
    pub standard_consensus_rpc: String,
    #[serde(default)]
    pub apis: Vec<ApiConfig>,
    #[serde(default)]
    pub minimum_balance: u64,
    #[serde(default = "default_max_height_lag")]
    pub max_height_lag: u64,
}

fn default_max_height_lag() -> u64 {
    policy::MAX_HEIGHT_LAG
}

#[derive(Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub url: String,
    pub token: String,
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("url", &self.url)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiscordConfig {
    #[serde(default)]
    pub alert_user_ids: Vec<String>,
    #[serde(default)]
    pub alert_role_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorSettings {
    pub check_interval_seconds: u64,
    pub request_timeout_seconds: u64,
    pub retry_attempts: u32,
    pub retry_base_delay_ms: u64,
    pub cycle_timeout_seconds: u64,
}

impl Default for MonitorSettings {
    fn default() -> Self {
        Self {
            check_interval_seconds: defaults::CHECK_INTERVAL_SECONDS,
            request_timeout_seconds: defaults::REQUEST_TIMEOUT_SECONDS,
            retry_attempts: policy::RETRY_ATTEMPTS,
            retry_base_delay_ms: policy::RETRY_BASE_DELAY_MS,
            cycle_timeout_seconds: defaults::CYCLE_TIMEOUT_SECONDS,
        }
    }
}

impl Config {
    /// Reject configurations the monitor cannot run with.
    /// Node URLs and tokens are checked per cycle, not here.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.node.standard_consensus_rpc.trim().is_empty() {
            return Err(ConfigError::MissingRequired {
                field: "node.standard_consensus_rpc".to_string(),
            });
        }

        let positive = [
            ("monitor.check_interval_seconds", self.monitor.check_interval_seconds),
            ("monitor.request_timeout_seconds", self.monitor.request_timeout_seconds),
            ("monitor.retry_attempts", u64::from(self.monitor.retry_attempts)),
            ("monitor.cycle_timeout_seconds", self.monitor.cycle_timeout_seconds),
        ];
        for (field, value) in positive {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: "must be at least 1".to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn targets(&self) -> Vec<NodeTarget> {
        self.node
            .apis
            .iter()
            .map(|api| NodeTarget::new(api.url.clone(), api.token.clone()))
            .collect()
    }

    pub fn threshold_policy(&self) -> ThresholdPolicy {
        ThresholdPolicy {
            max_height_lag: self.node.max_height_lag,
            minimum_balance: self.node.minimum_balance,
        }
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::exponential(
            self.monitor.retry_attempts,
            Duration::from_millis(self.monitor.retry_base_delay_ms),
        )
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.monitor.request_timeout_seconds)
    }

    pub fn check_interval(&self) -> Duration {
        Duration::from_secs(self.monitor.check_interval_seconds)
    }

    pub fn cycle_timeout(&self) -> Duration {
        Duration::from_secs(self.monitor.cycle_timeout_seconds)
    }
}
