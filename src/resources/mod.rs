// Copyright 2026, The Helios Operator Authors
// SPDX-License-Identifier: Apache-2.0

//! Builders for the resources a HeliosApp owns.
//!
//! Builders are pure: they derive an object from the HeliosApp and never touch
//! the API server. Only the reconciler submits what they return.

pub mod common;
pub mod deployment;
pub mod service;

pub use common::{app_labels, object_meta, owner_reference};
pub use deployment::build_deployment;
pub use service::build_service;
