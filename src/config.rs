// Copyright 2026, The Helios Operator Authors
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

use crate::constants::DEFAULT_ERROR_REQUEUE_SECS;

/// Operator configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Namespace to watch; `None` watches the whole cluster
    pub watch_namespace: Option<String>,
    /// Delay before a failed reconciliation is retried
    pub error_requeue: Duration,
    pub wait_for_crd: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            watch_namespace: None,
            error_requeue: Duration::from_secs(DEFAULT_ERROR_REQUEUE_SECS),
            wait_for_crd: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let watch_namespace = lookup("WATCH_NAMESPACE").filter(|ns| !ns.is_empty());

        let error_requeue = match lookup("ERROR_REQUEUE_SECS") {
            Some(secs) => Duration::from_secs(
                secs.parse::<u64>()
                    .with_context(|| format!("ERROR_REQUEUE_SECS is not a number: {}", secs))?,
            ),
            None => Duration::from_secs(DEFAULT_ERROR_REQUEUE_SECS),
        };

        let wait_for_crd = lookup("WAIT_FOR_CRD")
            .map(|v| v.parse().unwrap_or(true))
            .unwrap_or(true);

        Ok(Config {
            watch_namespace,
            error_requeue,
            wait_for_crd,
        })
    }
}
