// Copyright 2026, The Helios Operator Authors
// SPDX-License-Identifier: Apache-2.0

/// Label keys stamped on derived resources
pub mod labels {
    /// Binds the Service selector to the Deployment's pods
    pub const APP: &str = "app";
}

/// Shape of the derived Deployment and Service
pub mod workload {
    pub const CONTAINER_NAME: &str = "app-container";
    pub const CONTAINER_PORT_NAME: &str = "http";
    /// Port the Service exposes, regardless of the application's own port
    pub const SERVICE_PORT: i32 = 80;
    pub const SERVICE_PROTOCOL: &str = "TCP";
    pub const SERVICE_TYPE: &str = "ClusterIP";
}

/// CRD polling configuration
pub mod crd {
    pub const GROUP: &str = "heliosapp.helios.dev";
    pub const VERSION: &str = "v1";
    pub const KIND: &str = "HeliosApp";
    /// Initial polling interval in seconds when waiting for CRD
    pub const POLL_INTERVAL_SECS: u64 = 10;
    /// Maximum polling interval in seconds (exponential backoff cap)
    pub const POLL_MAX_INTERVAL_SECS: u64 = 60;
}

/// Requeue delay after a failed pass when not configured otherwise
pub const DEFAULT_ERROR_REQUEUE_SECS: u64 = 60;
