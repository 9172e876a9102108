// Copyright 2026, The Helios Operator Authors
// SPDX-License-Identifier: Apache-2.0

//! Custom resource types owned by the operator.

pub mod helios_app;

pub use helios_app::{HeliosApp, HeliosAppSpec, HeliosAppStatus};
