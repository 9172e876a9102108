// Copyright 2026, The Helios Operator Authors
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HeliosError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to get {kind} {key}: {source}")]
    FetchFailed {
        kind: String,
        key: String,
        #[source]
        source: kube::Error,
    },

    #[error("Failed to create {kind} {key}: {source}")]
    CreateFailed {
        kind: String,
        key: String,
        #[source]
        source: kube::Error,
    },

    #[error("Object is missing {0}")]
    MissingObjectKey(&'static str),
}

pub type Result<T> = std::result::Result<T, HeliosError>;
