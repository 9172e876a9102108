// Copyright 2026, The Helios Operator Authors
// SPDX-License-Identifier: Apache-2.0

//! Prints the HeliosApp CustomResourceDefinition as YAML.

use helios_operator::types::HeliosApp;
use kube::CustomResourceExt;

fn main() -> anyhow::Result<()> {
    print!("{}", serde_yaml::to_string(&HeliosApp::crd())?);
    Ok(())
}
