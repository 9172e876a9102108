// Copyright 2026, The Helios Operator Authors
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes reconcilers that react to watch events.

pub mod helios_app;

pub use helios_app::{reconcile_pass, HeliosAppReconciler, ObjectKey, ReconcileOutcome};
