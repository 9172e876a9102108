// Copyright 2026, The Helios Operator Authors
// SPDX-License-Identifier: Apache-2.0
use crate::constants::workload::{SERVICE_PORT, SERVICE_PROTOCOL, SERVICE_TYPE};
use crate::error::Result;
use crate::resources::common::{app_labels, object_meta};
use crate::types::HeliosApp;
use k8s_openapi::api::core::v1::{Service, ServicePort, ServiceSpec};
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
use kube::ResourceExt;

/// Build the cluster-internal Service routing port 80 to a HeliosApp's pods
pub fn build_service(app: &HeliosApp) -> Result<Service> {
    Ok(Service {
        metadata: object_meta(app)?,
        spec: Some(ServiceSpec {
            selector: Some(app_labels(&app.name_any())),
            ports: Some(vec![ServicePort {
                protocol: Some(SERVICE_PROTOCOL.to_string()),
                port: SERVICE_PORT,
                target_port: Some(IntOrString::Int(app.spec.port)),
                ..Default::default()
            }]),
            type_: Some(SERVICE_TYPE.to_string()),
            ..Default::default()
        }),
        ..Default::default()
    })
}
