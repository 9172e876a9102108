// Copyright 2026, The Helios Operator Authors
// SPDX-License-Identifier: Apache-2.0

//! CRD availability checking utilities

use crate::constants::crd::{GROUP, KIND, POLL_INTERVAL_SECS, POLL_MAX_INTERVAL_SECS, VERSION};
use crate::error::Result;
use kube::{
    discovery::{ApiResource, Discovery},
    Client,
};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

/// Wait for the HeliosApp CRD to be served by the API server.
/// This uses exponential backoff starting at POLL_INTERVAL_SECS seconds.
pub async fn wait_for_helios_app_crd(client: &Client) -> Result<()> {
    let mut interval = POLL_INTERVAL_SECS;

    loop {
        match check_helios_app_crd_exists(client).await {
            Ok(true) => {
                info!("HeliosApp CRD ({}/{}) is available", GROUP, VERSION);
                return Ok(());
            }
            Ok(false) => {
                info!(
                    "HeliosApp CRD ({}/{}) not yet available, waiting {} seconds...",
                    GROUP, VERSION, interval
                );
            }
            Err(e) => {
                warn!(
                    "Error checking for HeliosApp CRD: {}, retrying in {} seconds...",
                    e, interval
                );
            }
        }

        sleep(Duration::from_secs(interval)).await;

        interval = next_interval(interval);
    }
}

fn next_interval(interval: u64) -> u64 {
    (interval * 2).min(POLL_MAX_INTERVAL_SECS)
}

/// Check if the HeliosApp CRD exists by attempting to discover it.
async fn check_helios_app_crd_exists(client: &Client) -> Result<bool> {
    let discovery = Discovery::new(client.clone())
        .filter(&[GROUP])
        .run()
        .await?;

    for group in discovery.groups() {
        if group.name() == GROUP {
            for (ar, _) in group.recommended_resources() {
                if is_helios_app(&ar) {
                    return Ok(true);
                }
            }
        }
    }

    Ok(false)
}

fn is_helios_app(ar: &ApiResource) -> bool {
    ar.group == GROUP && ar.kind == KIND && ar.version == VERSION
}
