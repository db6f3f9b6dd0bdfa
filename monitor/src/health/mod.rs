//! Health monitoring module
//!
//! This module provides sync and balance checks for Celestia DA nodes.

mod balance;
pub mod monitor;
pub mod reporter;
pub mod retry;
mod sync;
pub mod types;

pub use balance::is_sufficient;
pub use monitor::HealthMonitor;
pub use reporter::{CheckKind, CheckReporter, TracingReporter};
pub use retry::{retry, Backoff, RetryPolicy};
pub use sync::within_lag;
pub use types::{BalanceResult, NodeTarget, PerformanceRecord, SyncResult, ThresholdPolicy};
