// Copyright 2026, The Helios Operator Authors
// SPDX-License-Identifier: Apache-2.0
use crate::constants::labels;
use crate::error::{HeliosError, Result};
use crate::types::HeliosApp;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::OwnerReference;
use kube::{api::ObjectMeta, Resource, ResourceExt};
use std::collections::BTreeMap;

/// Labels identifying the pods of an app. The Service selects on exactly these.
pub fn app_labels(name: &str) -> BTreeMap<String, String> {
    BTreeMap::from([(labels::APP.to_string(), name.to_string())])
}

/// Controller owner reference so the API server garbage collects the child with its HeliosApp
pub fn owner_reference(app: &HeliosApp) -> Result<OwnerReference> {
    if app.metadata.uid.is_none() {
        return Err(HeliosError::MissingObjectKey(".metadata.uid"));
    }
    let owner = app
        .controller_owner_ref(&())
        .ok_or(HeliosError::MissingObjectKey(".metadata.name"))?;

    Ok(OwnerReference {
        block_owner_deletion: Some(true),
        ..owner
    })
}

/// Metadata shared by every derived resource: same namespace and name as the app, owned by it
pub fn object_meta(app: &HeliosApp) -> Result<ObjectMeta> {
    let namespace = app
        .namespace()
        .ok_or(HeliosError::MissingObjectKey(".metadata.namespace"))?;

    Ok(ObjectMeta {
        name: Some(app.name_any()),
        namespace: Some(namespace),
        owner_references: Some(vec![owner_reference(app)?]),
        ..Default::default()
    })
}
