//! Health check types and RPC response structures

use serde::{Deserialize, Serialize};
use std::fmt;

/// One monitored node: its API URL and the token used to authenticate
#[derive(Clone, PartialEq, Eq)]
pub struct NodeTarget {
    pub url: String,
    pub auth_token: String,
}

impl NodeTarget {
    pub fn new(url: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            auth_token: auth_token.into(),
        }
    }
}

impl fmt::Debug for NodeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeTarget")
            .field("url", &self.url)
            .field("auth_token", &"<redacted>")
            .finish()
    }
}

/// Thresholds applied to every node in a cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdPolicy {
    pub max_height_lag: u64,
    pub minimum_balance: u64,
}

/// Outcome of the sync check.
///
/// `error` is set only when the check could not complete; a node that was
/// checked and found behind has `synced == false` and no error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncResult {
    synced: bool,
    error: Option<String>,
}

impl SyncResult {
    pub fn passed() -> Self {
        Self {
            synced: true,
            error: None,
        }
    }

    pub fn failed() -> Self {
        Self {
            synced: false,
            error: None,
        }
    }

    pub fn errored(detail: impl fmt::Display) -> Self {
        Self {
            synced: false,
            error: Some(detail.to_string()),
        }
    }

    pub fn synced(&self) -> bool {
        self.synced
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Outcome of the minimum balance check, same error semantics as [`SyncResult`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BalanceResult {
    sufficient: bool,
    error: Option<String>,
}

impl BalanceResult {
    pub fn passed() -> Self {
        Self {
            sufficient: true,
            error: None,
        }
    }

    pub fn failed() -> Self {
        Self {
            sufficient: false,
            error: None,
        }
    }

    pub fn errored(detail: impl fmt::Display) -> Self {
        Self {
            sufficient: false,
            error: Some(detail.to_string()),
        }
    }

    pub fn sufficient(&self) -> bool {
        self.sufficient
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Per-node result of one health cycle
#[derive(Clone, PartialEq, Eq)]
pub struct PerformanceRecord {
    pub node_url: String,
    pub auth_token: String,
    pub sync: SyncResult,
    pub balance: BalanceResult,
}

impl PerformanceRecord {
    pub fn new(target: &NodeTarget, sync: SyncResult, balance: BalanceResult) -> Self {
        Self {
            node_url: target.url.clone(),
            auth_token: target.auth_token.clone(),
            sync,
            balance,
        }
    }

    /// True when both checks completed and passed
    pub fn is_healthy(&self) -> bool {
        self.sync.synced() && self.balance.sufficient()
    }
}

impl fmt::Debug for PerformanceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PerformanceRecord")
            .field("node_url", &self.node_url)
            .field("auth_token", &"<redacted>")
            .field("sync", &self.sync)
            .field("balance", &self.balance)
            .finish()
    }
}

/// Tendermint RPC `/status` response, only the fields the monitor reads
#[derive(Debug, Clone, Deserialize)]
pub struct StatusResponse {
    pub result: StatusResult,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusResult {
    pub sync_info: SyncInfo,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SyncInfo {
    pub latest_block_height: String,
}

/// JSON-RPC 2.0 response envelope used by the node API
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcResponse<T> {
    pub result: Option<T>,
    pub error: Option<JsonRpcError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
}

/// `header.LocalHead` result; only the header height is needed
#[derive(Debug, Clone, Deserialize)]
pub struct ExtendedHeader {
    pub header: RawHeader,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawHeader {
    pub height: serde_json::Value,
}

/// `state.Balance` result
#[derive(Debug, Clone, Deserialize)]
pub struct Balance {
    #[serde(default)]
    pub denom: String,
    pub amount: String,
}
