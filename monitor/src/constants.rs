//! Policy constants and configuration defaults
//!
//! Policy and scheduling values can be overridden from `config/main.toml`;
//! these are used when a setting is omitted.

/// Health check policy
pub mod policy {
    /// Blocks a node may trail the reference RPC before it counts as unsynced
    pub const MAX_HEIGHT_LAG: u64 = 5;

    /// Attempts per fetch before the check is reported as errored
    pub const RETRY_ATTEMPTS: u32 = 3;

    /// First backoff delay; doubled after each failed attempt
    pub const RETRY_BASE_DELAY_MS: u64 = 1000;
}

/// Scheduling defaults
pub mod defaults {
    /// Interval between health check cycles
    pub const CHECK_INTERVAL_SECONDS: u64 = 300;

    /// Deadline for one whole fan-out across all nodes, below the check interval
    pub const CYCLE_TIMEOUT_SECONDS: u64 = 240;

    /// Per-request timeout for reference RPC and node API calls
    pub const REQUEST_TIMEOUT_SECONDS: u64 = 5;
}

/// Alert delivery constants
pub mod alerts {
    /// Attempts to deliver one webhook payload
    pub const WEBHOOK_ATTEMPTS: u32 = 3;

    /// Fixed delay between webhook attempts
    pub const WEBHOOK_RETRY_DELAY_SECONDS: u64 = 3;

    /// Webhook request timeout
    pub const WEBHOOK_TIMEOUT_SECONDS: u64 = 10;

    /// Embed color (red)
    pub const EMBED_COLOR: u32 = 16711680;

    pub const EMBED_THUMBNAIL_URL: &str = "https://i.imgur.com/5NmtLLy.jpg";
}
