//! Sync check: node local head against the reference RPC height

use reqwest::Client as HttpClient;
use std::time::Duration;

use super::reporter::{CheckKind, CheckReporter};
use super::retry::{retry, RetryPolicy};
use super::types::{NodeTarget, SyncResult};
use crate::errors::CheckError;
use crate::http::NodeClient;
use crate::rpc::fetch_block_height_from_rpc;

/// Everything the sync check needs besides the node itself
pub struct SyncCheck<'a> {
    pub rpc_client: &'a HttpClient,
    pub reference_rpc: &'a str,
    pub max_height_lag: u64,
    pub retry_policy: &'a RetryPolicy,
    pub request_timeout: Duration,
    pub reporter: &'a dyn CheckReporter,
}

impl SyncCheck<'_> {
    /// Fetch both heights (each with its own retry sequence) and compare them
    pub async fn run(&self, target: &NodeTarget) -> SyncResult {
        let client = match NodeClient::new(target, self.request_timeout) {
            Ok(client) => client,
            Err(e) => return self.errored(target, CheckError::NodeHeight(e)),
        };

        let node_height = match retry(self.retry_policy, "node height fetch", || {
            client.local_head_height()
        })
        .await
        {
            Ok(height) => height,
            Err(e) => return self.errored(target, CheckError::NodeHeight(e)),
        };

        let reference_height = match retry(self.retry_policy, "reference height fetch", || {
            fetch_block_height_from_rpc(self.rpc_client, self.reference_rpc)
        })
        .await
        {
            Ok(height) => height,
            Err(e) => return self.errored(target, CheckError::ReferenceHeight(e)),
        };

        if within_lag(node_height, reference_height, self.max_height_lag) {
            SyncResult::passed()
        } else {
            self.reporter.node_behind(
                &target.url,
                node_height,
                reference_height,
                self.max_height_lag,
            );
            SyncResult::failed()
        }
    }

    fn errored(&self, target: &NodeTarget, error: CheckError) -> SyncResult {
        self.reporter.check_errored(&target.url, CheckKind::Sync, &error);
        SyncResult::errored(error)
    }
}

/// A node ahead of the reference (negative lag) is always within tolerance
pub fn within_lag(node_height: u64, reference_height: u64, max_height_lag: u64) -> bool {
    let lag = i128::from(reference_height) - i128::from(node_height);
    lag <= i128::from(max_height_lag)
}
