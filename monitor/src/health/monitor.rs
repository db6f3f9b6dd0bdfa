// File: monitor/src/health/monitor.rs
use anyhow::{anyhow, Result};
use reqwest::Client as HttpClient;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{timeout_at, Instant};
use tracing::{debug, error, info};

use super::balance::BalanceCheck;
use super::reporter::CheckReporter;
use super::retry::RetryPolicy;
use super::sync::SyncCheck;
use super::types::{BalanceResult, NodeTarget, PerformanceRecord, SyncResult, ThresholdPolicy};
use crate::config::Config;
use crate::errors::CheckError;
use crate::rpc;

/// Evaluates every configured node once per call.
///
/// Nodes are checked concurrently, one task per node, and the sync and
/// balance checks of a node run side by side. `check_nodes` never fails: every
/// problem ends up in the `error` of the owning record.
#[derive(Clone)]
pub struct HealthMonitor {
    reference_rpc: Arc<str>,
    policy: ThresholdPolicy,
    retry_policy: RetryPolicy,
    request_timeout: Duration,
    cycle_timeout: Duration,
    rpc_client: HttpClient,
    reporter: Arc<dyn CheckReporter>,
}

impl HealthMonitor {
    pub fn new(config: &Config, reporter: Arc<dyn CheckReporter>) -> Result<Self> {
        let rpc_client = rpc::create_client(config.request_timeout())
            .map_err(|e| anyhow!("Failed to create reference RPC client: {}", e))?;

        Ok(Self {
            reference_rpc: Arc::from(config.node.standard_consensus_rpc.as_str()),
            policy: config.threshold_policy(),
            retry_policy: config.retry_policy(),
            request_timeout: config.request_timeout(),
            cycle_timeout: config.cycle_timeout(),
            rpc_client,
            reporter,
        })
    }

    /// Produce exactly one record per target, in input order
    pub async fn check_nodes(&self, targets: &[NodeTarget]) -> Vec<PerformanceRecord> {
        let deadline = Instant::now() + self.cycle_timeout;

        let tasks: Vec<_> = targets
            .iter()
            .map(|target| {
                let monitor = self.clone();
                let target = target.clone();
                tokio::spawn(async move { monitor.check_node(&target).await })
            })
            .collect();

        let mut records = Vec::with_capacity(targets.len());
        for (target, mut task) in targets.iter().zip(tasks) {
            let record = match timeout_at(deadline, &mut task).await {
                Ok(Ok(record)) => record,
                Ok(Err(e)) => {
                    error!("Health check task for {} failed: {}", target.url, e);
                    self.errored_record(
                        target,
                        CheckError::TaskFailed {
                            reason: e.to_string(),
                        },
                    )
                }
                Err(_) => {
                    task.abort();
                    error!(
                        "Health check for {} exceeded cycle deadline of {:?}",
                        target.url, self.cycle_timeout
                    );
                    self.errored_record(
                        target,
                        CheckError::DeadlineExceeded {
                            seconds: self.cycle_timeout.as_secs(),
                        },
                    )
                }
            };
            records.push(record);
        }

        let healthy = records.iter().filter(|r| r.is_healthy()).count();
        info!(
            "Health check complete: {} healthy, {} unhealthy",
            healthy,
            records.len() - healthy
        );

        records
    }

    /// Run the sync and balance checks for a single node
    pub async fn check_node(&self, target: &NodeTarget) -> PerformanceRecord {
        info!("Checking node: {}", target.url);

        let sync_check = SyncCheck {
            rpc_client: &self.rpc_client,
            reference_rpc: &self.reference_rpc,
            max_height_lag: self.policy.max_height_lag,
            retry_policy: &self.retry_policy,
            request_timeout: self.request_timeout,
            reporter: self.reporter.as_ref(),
        };
        let balance_check = BalanceCheck {
            minimum_balance: self.policy.minimum_balance,
            retry_policy: &self.retry_policy,
            request_timeout: self.request_timeout,
            reporter: self.reporter.as_ref(),
        };

        let (sync, balance) = tokio::join!(sync_check.run(target), balance_check.run(target));

        debug!(
            "Node {} synced={} sufficient_balance={}",
            target.url,
            sync.synced(),
            balance.sufficient()
        );

        PerformanceRecord::new(target, sync, balance)
    }

    fn errored_record(&self, target: &NodeTarget, error: CheckError) -> PerformanceRecord {
        let detail = error.to_string();
        PerformanceRecord::new(
            target,
            SyncResult::errored(&detail),
            BalanceResult::errored(&detail),
        )
    }
}
