//! This module provides reusable test utilities:
//! - Mock HTTP servers (reference RPC, node API, Discord webhook)
//! - Test configuration builders
//! - A reporter that records check outcomes

// Allow unused code in test fixtures - not every test binary uses every helper
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod mock_node_api;
pub mod mock_webhook;
pub mod recording_reporter;
pub mod test_config;

// Re-export commonly used items
pub use mock_node_api::MockNodeApi;
pub use mock_rpc::MockRpcServer;
pub use mock_webhook::MockWebhookServer;
pub use recording_reporter::{RecordingReporter, ReportedEvent};
pub use test_config::{config_for, TestConfigBuilder};
