//! Reference consensus RPC access
//!
//! The reference endpoint is the ground truth for chain height. It is queried
//! through the Tendermint `/status` route once per attempt, without retries.

use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::errors::FetchError;
use crate::health::types::StatusResponse;

/// Create the HTTP client used for reference RPC requests
pub fn create_client(request_timeout: Duration) -> Result<Client, FetchError> {
    Client::builder()
        .timeout(request_timeout)
        .build()
        .map_err(|e| FetchError::Request {
            url: String::new(),
            reason: format!("failed to create HTTP client: {}", e),
        })
}

/// Fetch the latest block height reported by `GET {rpc_url}/status`
pub async fn fetch_block_height_from_rpc(client: &Client, rpc_url: &str) -> Result<u64, FetchError> {
    let status_url = format!("{}/status", rpc_url.trim_end_matches('/'));

    let response = client
        .get(&status_url)
        .send()
        .await
        .map_err(|e| FetchError::from_reqwest(&status_url, e))?;

    if !response.status().is_success() {
        return Err(FetchError::Status {
            url: status_url,
            status: response.status().as_u16(),
        });
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| FetchError::from_reqwest(&status_url, e))?;

    let status: StatusResponse =
        serde_json::from_slice(&body).map_err(|e| FetchError::Decode {
            url: status_url.clone(),
            reason: e.to_string(),
        })?;

    let height_str = status.result.sync_info.latest_block_height;
    let height = parse_height(&height_str)?;

    debug!("Reference RPC {} at height {}", rpc_url, height);
    Ok(height)
}

/// Parse a decimal block height. Unparsable values are errors, never zero.
pub(crate) fn parse_height(value: &str) -> Result<u64, FetchError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| FetchError::InvalidHeight {
            value: value.to_string(),
        })
}
