// Copyright 2026, The Helios Operator Authors
// SPDX-License-Identifier: Apache-2.0
use crate::constants::workload::{CONTAINER_NAME, CONTAINER_PORT_NAME};
use crate::error::Result;
use crate::resources::common::{app_labels, object_meta};
use crate::types::HeliosApp;
use k8s_openapi::api::apps::v1::{Deployment, DeploymentSpec};
use k8s_openapi::api::core::v1::{Container, ContainerPort, PodSpec, PodTemplateSpec};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelector;
use kube::{api::ObjectMeta, ResourceExt};

/// Build the Deployment running a HeliosApp's image
pub fn build_deployment(app: &HeliosApp) -> Result<Deployment> {
    let labels = app_labels(&app.name_any());

    Ok(Deployment {
        metadata: object_meta(app)?,
        spec: Some(DeploymentSpec {
            replicas: Some(app.desired_replicas()),
            selector: LabelSelector {
                match_labels: Some(labels.clone()),
                ..Default::default()
            },
            template: PodTemplateSpec {
                metadata: Some(ObjectMeta {
                    labels: Some(labels),
                    ..Default::default()
                }),
                spec: Some(PodSpec {
                    containers: vec![Container {
                        name: CONTAINER_NAME.to_string(),
                        image: Some(app.spec.image_repo.clone()),
                        ports: Some(vec![ContainerPort {
                            container_port: app.spec.port,
                            name: Some(CONTAINER_PORT_NAME.to_string()),
                            ..Default::default()
                        }]),
                        ..Default::default()
                    }],
                    ..Default::default()
                }),
            },
            ..Default::default()
        }),
        ..Default::default()
    })
}
