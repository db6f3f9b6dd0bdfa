//! Reporter that keeps every event for later assertions

use monitor::errors::CheckError;
use monitor::health::{CheckKind, CheckReporter};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportedEvent {
    NodeBehind {
        node_url: String,
        node_height: u64,
        reference_height: u64,
    },
    BalanceBelowMinimum {
        node_url: String,
        balance: i128,
        minimum: u64,
    },
    CheckErrored {
        node_url: String,
        check: CheckKind,
        error: String,
    },
}

#[derive(Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<ReportedEvent>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ReportedEvent> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: ReportedEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl CheckReporter for RecordingReporter {
    fn node_behind(&self, node_url: &str, node_height: u64, reference_height: u64, _max_lag: u64) {
        self.push(ReportedEvent::NodeBehind {
            node_url: node_url.to_string(),
            node_height,
            reference_height,
        });
    }

    fn balance_below_minimum(&self, node_url: &str, balance: i128, minimum: u64) {
        self.push(ReportedEvent::BalanceBelowMinimum {
            node_url: node_url.to_string(),
            balance,
            minimum,
        });
    }

    fn check_errored(&self, node_url: &str, check: CheckKind, error: &CheckError) {
        self.push(ReportedEvent::CheckErrored {
            node_url: node_url.to_string(),
            check,
            error: error.to_string(),
        });
    }
}
