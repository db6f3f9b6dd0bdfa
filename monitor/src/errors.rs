//! Error types for the node monitor
//!
//! Fetch and client errors never escape a health cycle: they are rendered into
//! the owning `PerformanceRecord`. Only `ConfigError` stops the process, and
//! only at startup.

use std::fmt;

/// A single failed fetch attempt. Every variant is retryable.
#[derive(Debug)]
pub enum FetchError {
    /// Request could not be sent (connection refused, DNS, TLS, ...)
    Request { url: String, reason: String },

    /// Request exceeded its timeout
    Timeout { url: String },

    /// Endpoint answered with a non-success HTTP status
    Status { url: String, status: u16 },

    /// Body could not be read or did not match the expected schema
    Decode { url: String, reason: String },

    /// Height field present but not an integer
    InvalidHeight { value: String },

    /// JSON-RPC error object returned by the node
    Rpc { code: i64, message: String },
}

/// Node API client failures
#[derive(Debug)]
pub enum ClientError {
    /// Node URL is not a valid http(s) URL
    InvalidUrl { url: String, reason: String },

    /// Auth token cannot be sent as a header value
    InvalidToken,

    /// HTTP client construction failed
    Build { reason: String },

    /// Query against the node failed
    Query(FetchError),
}

/// A check that could not complete after exhausting its retries
#[derive(Debug)]
pub enum CheckError {
    /// Node local head height unavailable
    NodeHeight(ClientError),

    /// Reference RPC height unavailable
    ReferenceHeight(FetchError),

    /// Node balance unavailable
    Balance(ClientError),

    /// Node evaluation did not finish before the cycle deadline
    DeadlineExceeded { seconds: u64 },

    /// Node evaluation task aborted unexpectedly
    TaskFailed { reason: String },
}

/// Configuration error variants
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to load configuration file
    LoadFailed { path: String, reason: String },

    /// Invalid configuration value
    InvalidValue { field: String, reason: String },

    /// Missing required configuration
    MissingRequired { field: String },

    /// Configuration parsing error
    ParseError { reason: String },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Request { url, reason } => {
                write!(f, "request to {} failed: {}", url, reason)
            }
            FetchError::Timeout { url } => write!(f, "request to {} timed out", url),
            FetchError::Status { url, status } => {
                write!(f, "{} returned HTTP {}", url, status)
            }
            FetchError::Decode { url, reason } => {
                write!(f, "failed to decode response from {}: {}", url, reason)
            }
            FetchError::InvalidHeight { value } => {
                write!(f, "invalid block height '{}'", value)
            }
            FetchError::Rpc { code, message } => {
                write!(f, "RPC error {}: {}", code, message)
            }
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::InvalidUrl { url, reason } => {
                write!(f, "invalid node URL '{}': {}", url, reason)
            }
            ClientError::InvalidToken => write!(f, "auth token is not a valid header value"),
            ClientError::Build { reason } => {
                write!(f, "failed to create node client: {}", reason)
            }
            ClientError::Query(e) => write!(f, "{}", e),
        }
    }
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckError::NodeHeight(e) => {
                write!(f, "failed to get latest block from node API: {}", e)
            }
            CheckError::ReferenceHeight(e) => {
                write!(f, "failed to get latest block from RPC: {}", e)
            }
            CheckError::Balance(e) => {
                write!(f, "failed to get balance from node API: {}", e)
            }
            CheckError::DeadlineExceeded { seconds } => {
                write!(f, "evaluation exceeded cycle deadline of {}s", seconds)
            }
            CheckError::TaskFailed { reason } => {
                write!(f, "evaluation task failed: {}", reason)
            }
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::LoadFailed { path, reason } => {
                write!(f, "Failed to load config from '{}': {}", path, reason)
            }
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "Invalid value for '{}': {}", field, reason)
            }
            ConfigError::MissingRequired { field } => {
                write!(f, "Missing required field: {}", field)
            }
            ConfigError::ParseError { reason } => {
                write!(f, "Failed to parse config: {}", reason)
            }
        }
    }
}

impl std::error::Error for FetchError {}
impl std::error::Error for ClientError {}
impl std::error::Error for CheckError {}
impl std::error::Error for ConfigError {}

impl From<FetchError> for ClientError {
    fn from(err: FetchError) -> Self {
        ClientError::Query(err)
    }
}

impl FetchError {
    /// Classify a reqwest failure for the given URL
    pub(crate) fn from_reqwest(url: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
            }
        } else if err.is_decode() || err.is_body() {
            FetchError::Decode {
                url: url.to_string(),
                reason: err.to_string(),
            }
        } else {
            FetchError::Request {
                url: url.to_string(),
                reason: err.to_string(),
            }
        }
    }
}
