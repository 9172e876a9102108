// Copyright 2026, The Helios Operator Authors
// SPDX-License-Identifier: Apache-2.0
pub mod config;
pub mod constants;
pub mod error;
pub mod kubernetes;
pub mod reconcilers;
pub mod resources;
pub mod types;

#[cfg(test)]
mod test_utils;
