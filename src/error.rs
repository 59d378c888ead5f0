// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocatorError {
    #[error("{kind} {namespace}/{name} not found")]
    NotFound {
        kind: String,
        namespace: String,
        name: String,
    },

    #[error("{kind} {namespace}/{name} is malformed: {reason}")]
    InvalidShape {
        kind: String,
        namespace: String,
        name: String,
        reason: String,
    },

    #[error("Service {namespace}/{name} has no usable address")]
    MissingAddress { namespace: String, name: String },

    #[error("no '{key}' entry in Secret {namespace}/{name}")]
    MissingEntry {
        namespace: String,
        name: String,
        key: String,
    },

    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to load kubeconfig: {0}")]
    KubeconfigError(String),
}

impl LocatorError {
    /// True when a required resource does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, LocatorError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, LocatorError>;
