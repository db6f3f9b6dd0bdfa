// File: monitor/src/http/node_client.rs
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

use crate::errors::{ClientError, FetchError};
use crate::health::types::{Balance, ExtendedHeader, JsonRpcResponse, NodeTarget};
use crate::rpc::parse_height;

/// Authenticated JSON-RPC client for one node API
#[derive(Clone)]
pub struct NodeClient {
    client: Client,
    url: String,
}

impl NodeClient {
    /// Build a client for `target`. Fails for a malformed URL or token;
    /// no request is sent.
    pub fn new(target: &NodeTarget, request_timeout: Duration) -> Result<Self, ClientError> {
        let parsed = Url::parse(&target.url).map_err(|e| ClientError::InvalidUrl {
            url: target.url.clone(),
            reason: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::InvalidUrl {
                url: target.url.clone(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        let mut headers = HeaderMap::new();
        if !target.auth_token.is_empty() {
            let mut auth = HeaderValue::from_str(&format!("Bearer {}", target.auth_token))
                .map_err(|_| ClientError::InvalidToken)?;
            auth.set_sensitive(true);
            headers.insert(AUTHORIZATION, auth);
        }

        let client = Client::builder()
            .timeout(request_timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| ClientError::Build {
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            url: target.url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Height of the node's local chain head (`header.LocalHead`)
    pub async fn local_head_height(&self) -> Result<u64, ClientError> {
        let head: ExtendedHeader = self.call("header.LocalHead", json!([])).await?;

        let height = match &head.header.height {
            Value::String(s) => parse_height(s)?,
            Value::Number(n) => n.as_u64().ok_or_else(|| FetchError::InvalidHeight {
                value: n.to_string(),
            })?,
            other => {
                return Err(FetchError::InvalidHeight {
                    value: other.to_string(),
                }
                .into())
            }
        };

        debug!("Node {} local head at height {}", self.url, height);
        Ok(height)
    }

    /// Account balance in the smallest denomination (`state.Balance`)
    pub async fn balance(&self) -> Result<i128, ClientError> {
        let balance: Balance = self.call("state.Balance", json!([])).await?;

        let amount = balance
            .amount
            .trim()
            .parse::<i128>()
            .map_err(|e| FetchError::Decode {
                url: self.url.clone(),
                reason: format!("invalid balance amount '{}': {}", balance.amount, e),
            })?;

        debug!("Node {} balance {}{}", self.url, amount, balance.denom);
        Ok(amount)
    }

    async fn call<T: DeserializeOwned>(&self, method: &str, params: Value) -> Result<T, FetchError> {
        let request_body = json!({
            "jsonrpc": "2.0",
            "method": method,
            "params": params,
            "id": Uuid::new_v4().to_string()
        });

        let response = self
            .client
            .post(&self.url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(&self.url, e))?;

        if !response.status().is_success() {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status: response.status().as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::from_reqwest(&self.url, e))?;

        let rpc_response: JsonRpcResponse<T> =
            serde_json::from_slice(&body).map_err(|e| FetchError::Decode {
                url: self.url.clone(),
                reason: e.to_string(),
            })?;

        if let Some(error) = rpc_response.error {
            return Err(FetchError::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        rpc_response.result.ok_or_else(|| FetchError::Decode {
            url: self.url.clone(),
            reason: format!("{} returned neither result nor error", method),
        })
    }
}
