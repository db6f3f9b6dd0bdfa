//! Minimum balance check

use std::time::Duration;

use super::reporter::{CheckKind, CheckReporter};
use super::retry::{retry, RetryPolicy};
use super::types::{BalanceResult, NodeTarget};
use crate::errors::CheckError;
use crate::http::NodeClient;

pub struct BalanceCheck<'a> {
    pub minimum_balance: u64,
    pub retry_policy: &'a RetryPolicy,
    pub request_timeout: Duration,
    pub reporter: &'a dyn CheckReporter,
}

impl BalanceCheck<'_> {
    pub async fn run(&self, target: &NodeTarget) -> BalanceResult {
        let client = match NodeClient::new(target, self.request_timeout) {
            Ok(client) => client,
            Err(e) => return self.errored(target, CheckError::Balance(e)),
        };

        let balance = match retry(self.retry_policy, "balance fetch", || client.balance()).await {
            Ok(balance) => balance,
            Err(e) => return self.errored(target, CheckError::Balance(e)),
        };

        if is_sufficient(balance, self.minimum_balance) {
            BalanceResult::passed()
        } else {
            self.reporter
                .balance_below_minimum(&target.url, balance, self.minimum_balance);
            BalanceResult::failed()
        }
    }

    fn errored(&self, target: &NodeTarget, error: CheckError) -> BalanceResult {
        self.reporter
            .check_errored(&target.url, CheckKind::Balance, &error);
        BalanceResult::errored(error)
    }
}

pub fn is_sufficient(balance: i128, minimum_balance: u64) -> bool {
    balance >= i128::from(minimum_balance)
}
