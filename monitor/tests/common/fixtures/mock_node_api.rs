//! Mock Celestia DA node API
//!
//! Answers the JSON-RPC methods the monitor calls (`header.LocalHead` and
//! `state.Balance`) and only when the expected bearer token is presented.

use serde_json::{json, Value};
use std::time::Duration;
use wiremock::{
    matchers::{body_partial_json, header, method},
    Mock, MockServer, ResponseTemplate,
};

pub const LOCAL_HEAD: &str = "header.LocalHead";
pub const BALANCE: &str = "state.Balance";

/// Mock node API with a fixed auth token
pub struct MockNodeApi {
    pub server: MockServer,
    pub base_url: String,
    pub token: String,
}

fn rpc_result(result: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": "1",
        "result": result
    })
}

fn local_head_body(height: u64) -> Value {
    rpc_result(json!({
        "header": {
            "version": {"block": "11", "app": "1"},
            "chain_id": "celestia",
            "height": height.to_string(),
            "time": "2024-01-01T00:00:00Z"
        },
        "commit": {},
        "validator_set": {},
        "dah": {}
    }))
}

fn balance_body(amount: &str) -> Value {
    rpc_result(json!({
        "denom": "utia",
        "amount": amount
    }))
}

impl MockNodeApi {
    /// Start a node API that expects `Bearer <token>`
    pub async fn start(token: &str) -> Self {
        let server = MockServer::start().await;
        let base_url = server.uri();
        let node = Self {
            server,
            base_url,
            token: token.to_string(),
        };

        // Anything without the right token is rejected
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401))
            .with_priority(u8::MAX)
            .mount(&node.server)
            .await;

        node
    }

    fn rpc_call(&self, rpc_method: &str) -> wiremock::MockBuilder {
        Mock::given(method("POST"))
            .and(header("Authorization", format!("Bearer {}", self.token).as_str()))
            .and(body_partial_json(json!({ "method": rpc_method })))
    }

    /// Local chain head at `height`
    pub async fn mock_local_head(&self, height: u64) {
        self.rpc_call(LOCAL_HEAD)
            .respond_with(ResponseTemplate::new(200).set_body_json(local_head_body(height)))
            .mount(&self.server)
            .await;
    }

    /// Local head fails `failures` times with HTTP 503 before answering `height`
    pub async fn mock_local_head_after_failures(&self, failures: u64, height: u64) {
        self.rpc_call(LOCAL_HEAD)
            .respond_with(ResponseTemplate::new(503))
            .up_to_n_times(failures)
            .mount(&self.server)
            .await;
        self.mock_local_head(height).await;
    }

    /// Local head slower than `delay`
    pub async fn mock_slow_local_head(&self, height: u64, delay: Duration) {
        self.rpc_call(LOCAL_HEAD)
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(local_head_body(height))
                    .set_delay(delay),
            )
            .mount(&self.server)
            .await;
    }

    /// Balance of `amount` utia
    pub async fn mock_balance(&self, amount: i128) {
        self.mock_balance_raw(&amount.to_string()).await;
    }

    /// Balance with an arbitrary amount string
    pub async fn mock_balance_raw(&self, amount: &str) {
        self.rpc_call(BALANCE)
            .respond_with(ResponseTemplate::new(200).set_body_json(balance_body(amount)))
            .mount(&self.server)
            .await;
    }

    /// Slow balance response
    pub async fn mock_slow_balance(&self, amount: i128, delay: Duration) {
        self.rpc_call(BALANCE)
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(balance_body(&amount.to_string()))
                    .set_delay(delay),
            )
            .mount(&self.server)
            .await;
    }

    /// JSON-RPC error object for `rpc_method`
    pub async fn mock_rpc_error(&self, rpc_method: &str, code: i64, message: &str) {
        self.rpc_call(rpc_method)
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0",
                "id": "1",
                "error": {"code": code, "message": message}
            })))
            .mount(&self.server)
            .await;
    }

    /// Server error for every call to `rpc_method`
    pub async fn mock_unavailable(&self, rpc_method: &str) {
        self.rpc_call(rpc_method)
            .respond_with(ResponseTemplate::new(503))
            .mount(&self.server)
            .await;
    }

    /// Requests received for a given JSON-RPC method
    pub async fn calls_to(&self, rpc_method: &str) -> usize {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|req| {
                req.body_json::<Value>()
                    .ok()
                    .and_then(|body| body.get("method").and_then(|m| m.as_str()).map(String::from))
                    .as_deref()
                    == Some(rpc_method)
            })
            .count()
    }
}
