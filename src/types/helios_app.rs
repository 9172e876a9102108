// Copyright 2026, The Helios Operator Authors
// SPDX-License-Identifier: Apache-2.0
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Desired state of an application managed by Helios
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[kube(group = "heliosapp.helios.dev", version = "v1", kind = "HeliosApp")]
#[kube(namespaced)]
#[kube(status = "HeliosAppStatus")]
#[kube(printcolumn = r#"{"name":"Image", "type":"string", "jsonPath":".spec.imageRepo"}"#)]
#[kube(printcolumn = r#"{"name":"Port", "type":"integer", "jsonPath":".spec.port"}"#)]
#[kube(printcolumn = r#"{"name":"Replicas", "type":"integer", "jsonPath":".spec.replicas"}"#)]
#[serde(rename_all = "camelCase")]
pub struct HeliosAppSpec {
    /// Source repository the image is built from
    pub git_repo: String,
    /// Container image to run
    pub image_repo: String,
    /// Port the application listens on
    #[schemars(range(min = 1, max = 65535))]
    pub port: i32,
    #[serde(default = "default_replicas")]
    #[schemars(range(min = 0))]
    pub replicas: i32,
}

fn default_replicas() -> i32 {
    1
}

impl HeliosApp {
    /// Replica count for the derived Deployment; an unset (zero) value means one.
    pub fn desired_replicas(&self) -> i32 {
        if self.spec.replicas == 0 {
            1
        } else {
            self.spec.replicas
        }
    }
}

/// Observed state of a HeliosApp. Declared for consumers, not written by the reconciler.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HeliosAppStatus {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Condition>,
    /// Image tag that was last deployed successfully
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub deployed_version: String,
}

/// Wire shape of a standard Kubernetes condition (`metav1.Condition`)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    #[serde(rename = "type")]
    pub condition_type: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed_generation: Option<i64>,
    /// RFC 3339 timestamp of the last status change
    pub last_transition_time: String,
    pub reason: String,
    pub message: String,
}
