//! Operational reporting for health check outcomes
//!
//! The evaluators never log directly. They report through a `CheckReporter`
//! handed to them by the monitor, so tests can observe outcomes and the
//! binary can route them to `tracing`.

use tracing::{error, warn};

use crate::errors::CheckError;

pub trait CheckReporter: Send + Sync {
    /// Node answered but trails the reference by more than the allowed lag
    fn node_behind(&self, node_url: &str, node_height: u64, reference_height: u64, max_lag: u64);

    /// Node balance is below the configured minimum
    fn balance_below_minimum(&self, node_url: &str, balance: i128, minimum: u64);

    /// A check could not complete
    fn check_errored(&self, node_url: &str, check: CheckKind, error: &CheckError);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind {
    Sync,
    Balance,
}

impl std::fmt::Display for CheckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckKind::Sync => write!(f, "sync status"),
            CheckKind::Balance => write!(f, "balance"),
        }
    }
}

/// Reporter that emits `tracing` events
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl CheckReporter for TracingReporter {
    fn node_behind(&self, node_url: &str, node_height: u64, reference_height: u64, max_lag: u64) {
        warn!(
            node = node_url,
            node_height,
            reference_height,
            max_lag,
            "Node {} is not synced, node height is {} standard RPC height is {}",
            node_url,
            node_height,
            reference_height
        );
    }

    fn balance_below_minimum(&self, node_url: &str, balance: i128, minimum: u64) {
        warn!(
            node = node_url,
            "Node {} does not have enough balance, balance is {}, minimum balance is {}",
            node_url,
            balance,
            minimum
        );
    }

    fn check_errored(&self, node_url: &str, check: CheckKind, error: &CheckError) {
        error!(node = node_url, "Failed to check node {} {}: {}", node_url, check, error);
    }
}
