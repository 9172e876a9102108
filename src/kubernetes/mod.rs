// Copyright 2026, The Helios Operator Authors
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for CRD discovery.

pub mod crd;

pub use crd::wait_for_helios_app_crd;
