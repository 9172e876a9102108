// Copyright 2026, The Helios Operator Authors
// SPDX-License-Identifier: Apache-2.0

//! HeliosApp reconciler - creates the Deployment and Service a HeliosApp declares.

use crate::config::Config;
use crate::error::{HeliosError, Result};
use crate::resources::{build_deployment, build_service};
use crate::types::HeliosApp;
use futures::StreamExt;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::Service;
use kube::{
    api::PostParams,
    runtime::{controller::Action, Controller},
    Api, Client, Resource, ResourceExt,
};
use kube_runtime::watcher::Config as WatcherConfig;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

/// Namespace and name identifying a HeliosApp and everything derived from it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectKey {
    pub namespace: String,
    pub name: String,
}

impl ObjectKey {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    pub fn from_app(app: &HeliosApp) -> Result<Self> {
        let namespace = app
            .namespace()
            .ok_or(HeliosError::MissingObjectKey(".metadata.namespace"))?;
        Ok(Self::new(namespace, app.name_any()))
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

/// Result of a single reconciliation pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// Everything the app declares exists, or the app is gone
    Done,
    /// A resource was created; run another pass right away
    Requeue,
}

impl From<ReconcileOutcome> for Action {
    fn from(outcome: ReconcileOutcome) -> Self {
        match outcome {
            ReconcileOutcome::Done => Action::await_change(),
            ReconcileOutcome::Requeue => Action::requeue(Duration::ZERO),
        }
    }
}

pub struct HeliosAppReconciler {
    client: Client,
    config: Config,
}

impl HeliosAppReconciler {
    pub fn new(client: Client, config: Config) -> Self {
        Self { client, config }
    }

    fn api<K>(&self) -> Api<K>
    where
        K: Resource<Scope = k8s_openapi::NamespaceResourceScope>,
        K::DynamicType: Default,
    {
        match &self.config.watch_namespace {
            Some(namespace) => Api::namespaced(self.client.clone(), namespace),
            None => Api::all(self.client.clone()),
        }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let apps: Api<HeliosApp> = self.api();
        let deployments: Api<Deployment> = self.api();
        let services: Api<Service> = self.api();
        let context = Arc::new(self);

        // Changes to owned Deployments and Services requeue their HeliosApp,
        // so a child deleted out of band is recreated.
        Controller::new(apps, WatcherConfig::default())
            .owns(deployments, WatcherConfig::default())
            .owns(services, WatcherConfig::default())
            .shutdown_on_signal()
            .run(reconcile, error_policy, context)
            .for_each(|res| async move {
                match res {
                    Ok(o) => debug!("Reconciled HeliosApp: {:?}", o),
                    Err(e) => warn!("Reconciliation error: {:?}", e),
                }
            })
            .await;

        Ok(())
    }
}

async fn reconcile(app: Arc<HeliosApp>, ctx: Arc<HeliosAppReconciler>) -> Result<Action> {
    // The runtime hands us a cached copy; only the key is used so the pass reads live state.
    let key = ObjectKey::from_app(&app)?;
    reconcile_pass(&ctx.client, &key).await.map(Action::from)
}

fn error_policy(
    app: Arc<HeliosApp>,
    error: &HeliosError,
    ctx: Arc<HeliosAppReconciler>,
) -> Action {
    error!(
        "Reconciliation of HeliosApp {}/{} failed: {}",
        app.namespace().unwrap_or_default(),
        app.name_any(),
        error
    );
    Action::requeue(ctx.config.error_requeue)
}

/// Run one convergence pass for the HeliosApp identified by `key`.
///
/// Creates at most one missing resource per pass, Deployment before Service,
/// and asks for an immediate requeue after each creation. Existing resources
/// are only checked for presence, never compared or updated.
#[instrument(skip_all, fields(app = %key))]
pub async fn reconcile_pass(client: &Client, key: &ObjectKey) -> Result<ReconcileOutcome> {
    debug!("Reconciling HeliosApp");

    let apps: Api<HeliosApp> = Api::namespaced(client.clone(), &key.namespace);
    let Some(app) = fetch(&apps, key).await? else {
        debug!("HeliosApp not found, it may have been deleted");
        return Ok(ReconcileOutcome::Done);
    };

    let deployments: Api<Deployment> = Api::namespaced(client.clone(), &key.namespace);
    if ensure_exists(&deployments, key, || build_deployment(&app)).await? {
        return Ok(ReconcileOutcome::Requeue);
    }

    let services: Api<Service> = Api::namespaced(client.clone(), &key.namespace);
    if ensure_exists(&services, key, || build_service(&app)).await? {
        return Ok(ReconcileOutcome::Requeue);
    }

    debug!("HeliosApp reconciled, all resources present");
    Ok(ReconcileOutcome::Done)
}

/// Get an object by key, treating NotFound as absence rather than failure
async fn fetch<K>(api: &Api<K>, key: &ObjectKey) -> Result<Option<K>>
where
    K: Resource<DynamicType = ()> + Clone + DeserializeOwned + fmt::Debug,
{
    api.get_opt(&key.name).await.map_err(|source| {
        error!("Failed to get {} {}: {}", K::kind(&()), key, source);
        HeliosError::FetchFailed {
            kind: K::kind(&()).to_string(),
            key: key.to_string(),
            source,
        }
    })
}

/// Create the object from `build` if none exists under `key`. Returns whether it was created.
async fn ensure_exists<K, F>(api: &Api<K>, key: &ObjectKey, build: F) -> Result<bool>
where
    K: Resource<DynamicType = ()> + Clone + DeserializeOwned + Serialize + fmt::Debug,
    F: FnOnce() -> Result<K>,
{
    let kind = K::kind(&());

    if fetch(api, key).await?.is_some() {
        debug!("{} {} already exists", kind, key);
        return Ok(false);
    }

    let object = build()?;
    info!("Creating new {} {}", kind, key);
    api.create(&PostParams::default(), &object)
        .await
        .map_err(|source| {
            error!("Failed to create {} {}: {}", kind, key, source);
            HeliosError::CreateFailed {
                kind: kind.to_string(),
                key: key.to_string(),
                source,
            }
        })?;

    Ok(true)
}
