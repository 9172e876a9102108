// Copyright 2026, The Helios Operator Authors
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use kube::Client;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use helios_operator::config::Config;
use helios_operator::kubernetes::wait_for_helios_app_crd;
use helios_operator::reconcilers::HeliosAppReconciler;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    info!("Starting Helios operator");

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: watch_namespace={}, error_requeue={:?}",
        config.watch_namespace.as_deref().unwrap_or("<all>"),
        config.error_requeue
    );

    // Create Kubernetes client
    let client = Client::try_default().await?;
    info!("Connected to Kubernetes cluster");

    if config.wait_for_crd {
        info!("Waiting for HeliosApp CRD to become available...");
        wait_for_helios_app_crd(&client).await?;
    }

    let reconciler = HeliosAppReconciler::new(client, config);

    info!("Starting HeliosApp reconciler...");
    reconciler.run().await?;

    warn!("HeliosApp reconciler stopped");
    Ok(())
}
