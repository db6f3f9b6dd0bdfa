//! Periodic health cycles
//!
//! Each tick runs one full health check across all configured nodes and hands
//! the records to the alert service. Cycles are independent: a failed alert
//! delivery is logged and the next tick proceeds as usual.

use std::sync::Arc;
use std::time::Duration;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{error, info};

use crate::health::{HealthMonitor, NodeTarget, PerformanceRecord};
use crate::services::AlertService;

pub struct HealthScheduler {
    health_monitor: Arc<HealthMonitor>,
    alert_service: Arc<AlertService>,
    targets: Arc<[NodeTarget]>,
    check_interval: Duration,
}

impl HealthScheduler {
    pub fn new(
        health_monitor: Arc<HealthMonitor>,
        alert_service: Arc<AlertService>,
        targets: Vec<NodeTarget>,
        check_interval: Duration,
    ) -> Self {
        Self {
            health_monitor,
            alert_service,
            targets: targets.into(),
            check_interval,
        }
    }

    /// Run a single cycle: check every node, then alert on failures
    pub async fn run_cycle(&self) -> Vec<PerformanceRecord> {
        info!("Start to check node performance");
        let records = self.health_monitor.check_nodes(&self.targets).await;

        info!("Start to check and send alert");
        if let Err(e) = self.alert_service.send_alerts(&records).await {
            error!("Failed to send alert: {}", e);
        }

        records
    }

    /// Tick forever. The first cycle starts one interval after launch.
    pub async fn run(&self) {
        let start = Instant::now() + self.check_interval;
        let mut interval = interval_at(start, self.check_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(
            "Will check node performance every {:?}",
            self.check_interval
        );

        let mut cycle = 0u64;
        loop {
            interval.tick().await;
            cycle += 1;
            info!("Health monitoring cycle #{}", cycle);
            self.run_cycle().await;
        }
    }
}
