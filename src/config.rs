// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::kubernetes::ClientSource;
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Command configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Namespace the Elasticsearch cluster lives in
    pub namespace: String,
    /// Name of the Elasticsearch resource
    pub cluster_name: String,
    pub client_source: ClientSource,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let namespace = lookup("ES_NAMESPACE")
            .context("ES_NAMESPACE environment variable not set")?;
        let cluster_name = lookup("ES_CLUSTER_NAME")
            .context("ES_CLUSTER_NAME environment variable not set")?;
        // Without an explicit path the client falls back to in-cluster config or ~/.kube/config
        let client_source = match lookup("KUBECONFIG_PATH") {
            Some(path) => ClientSource::KubeconfigFile {
                path: PathBuf::from(path),
                context: lookup("KUBE_CONTEXT"),
            },
            None => ClientSource::Infer,
        };

        Ok(Config {
            namespace,
            cluster_name,
            client_source,
        })
    }
}
