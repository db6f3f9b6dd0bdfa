//! Test configuration builders

use monitor::Config;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// In-memory config pointing at mock servers, with fast retries
pub fn config_for(reference_rpc: &str, nodes: &[(&str, &str)], minimum_balance: u64) -> Config {
    let mut toml_str = format!(
        r#"
[node]
standard_consensus_rpc = "{}"
minimum_balance = {}

[monitor]
retry_base_delay_ms = 10
"#,
        reference_rpc, minimum_balance
    );

    for (url, token) in nodes {
        toml_str.push_str(&format!(
            "\n[[node.apis]]\nurl = \"{}\"\ntoken = \"{}\"\n",
            url, token
        ));
    }

    toml::from_str(&toml_str).expect("Failed to parse test config")
}

/// Builder that writes `main.toml` and `secrets.toml` into a temp directory
pub struct TestConfigBuilder {
    temp_dir: TempDir,
    reference_rpc: String,
    minimum_balance: u64,
    nodes: Vec<(String, String)>,
    user_ids: Vec<String>,
    role_ids: Vec<String>,
    monitor_section: Option<String>,
    webhook: Option<String>,
}

impl TestConfigBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self {
            temp_dir,
            reference_rpc: "https://rpc.celestia.example".to_string(),
            minimum_balance: 1_000_000,
            nodes: Vec::new(),
            user_ids: Vec::new(),
            role_ids: Vec::new(),
            monitor_section: None,
            webhook: None,
        }
    }

    pub fn reference_rpc(mut self, url: &str) -> Self {
        self.reference_rpc = url.to_string();
        self
    }

    pub fn minimum_balance(mut self, amount: u64) -> Self {
        self.minimum_balance = amount;
        self
    }

    pub fn add_node(mut self, url: &str, token: &str) -> Self {
        self.nodes.push((url.to_string(), token.to_string()));
        self
    }

    pub fn alert_user(mut self, id: &str) -> Self {
        self.user_ids.push(id.to_string());
        self
    }

    pub fn alert_role(mut self, id: &str) -> Self {
        self.role_ids.push(id.to_string());
        self
    }

    /// Raw body of the `[monitor]` section
    pub fn monitor_section(mut self, body: &str) -> Self {
        self.monitor_section = Some(body.to_string());
        self
    }

    pub fn webhook_secret(mut self, url: &str) -> Self {
        self.webhook = Some(url.to_string());
        self
    }

    fn main_toml(&self) -> String {
        let quote = |ids: &[String]| {
            ids.iter()
                .map(|id| format!("\"{}\"", id))
                .collect::<Vec<_>>()
                .join(", ")
        };

        let mut toml = format!(
            r#"
[node]
standard_consensus_rpc = "{}"
minimum_balance = {}
"#,
            self.reference_rpc, self.minimum_balance
        );

        for (url, token) in &self.nodes {
            toml.push_str(&format!(
                "\n[[node.apis]]\nurl = \"{}\"\ntoken = \"{}\"\n",
                url, token
            ));
        }

        toml.push_str(&format!(
            "\n[discord]\nalert_user_ids = [{}]\nalert_role_ids = [{}]\n",
            quote(&self.user_ids),
            quote(&self.role_ids)
        ));

        if let Some(section) = &self.monitor_section {
            toml.push_str(&format!("\n[monitor]\n{}\n", section));
        }

        toml
    }

    /// Write config files and return their directory
    pub fn build(self) -> TestConfig {
        let config_dir = self.temp_dir.path().join("config");
        fs::create_dir_all(&config_dir).expect("Failed to create config dir");

        fs::write(config_dir.join("main.toml"), self.main_toml()).expect("Failed to write main.toml");

        if let Some(webhook) = &self.webhook {
            fs::write(
                config_dir.join("secrets.toml"),
                format!("discord_webhook = \"{}\"\n", webhook),
            )
            .expect("Failed to write secrets.toml");
        }

        TestConfig {
            _temp_dir: self.temp_dir,
            config_dir,
        }
    }
}

impl Default for TestConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Built test configuration with temp directory
pub struct TestConfig {
    _temp_dir: TempDir,
    pub config_dir: PathBuf,
}

impl TestConfig {
    pub fn config_dir_string(&self) -> String {
        self.config_dir.to_string_lossy().to_string()
    }
}
