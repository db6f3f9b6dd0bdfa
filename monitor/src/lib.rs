//! Sync and balance monitoring for Celestia DA nodes, with Discord alerts

pub mod config;
pub mod constants;
pub mod errors;
pub mod health;
pub mod http;
pub mod rpc;
pub mod scheduler;
pub mod services;

// Re-export commonly used types
pub use config::{Config, ConfigManager};
pub use health::{HealthMonitor, NodeTarget, PerformanceRecord};
pub use scheduler::HealthScheduler;
pub use services::AlertService;
