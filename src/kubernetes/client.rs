// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes client creation from an explicit configuration source

use crate::error::{LocatorError, Result};
use k8s_openapi::api::core::v1::Secret;
use kube::{
    api::ListParams,
    config::{KubeConfigOptions, Kubeconfig},
    Api, Client, Config as KConfig,
};
use std::path::PathBuf;
use tracing::{debug, info, instrument};

/// Where the Kubernetes client configuration comes from.
///
/// Passed explicitly so that building a client never touches process-wide
/// state such as the `KUBECONFIG` environment variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientSource {
    /// In-cluster service account, or the caller's default kubeconfig
    Infer,
    /// Kubeconfig file on disk
    KubeconfigFile {
        path: PathBuf,
        context: Option<String>,
    },
    /// Kubeconfig document held in memory
    KubeconfigYaml {
        yaml: String,
        context: Option<String>,
    },
}

/// Create a client from `source` and check that it can reach the API server
#[instrument(skip(source))]
pub async fn connect(source: &ClientSource) -> Result<Client> {
    let client = create_client(source).await?;
    verify_connection(&client).await?;
    info!("Connected to Kubernetes cluster");
    Ok(client)
}

/// Create a client from `source` without contacting the API server
pub async fn create_client(source: &ClientSource) -> Result<Client> {
    let config = match source {
        ClientSource::Infer => KConfig::infer()
            .await
            .map_err(|e| LocatorError::KubeconfigError(format!("Failed to infer config: {}", e)))?,
        ClientSource::KubeconfigFile { path, context } => {
            debug!("Reading kubeconfig from {}", path.display());
            let yaml = tokio::fs::read_to_string(path).await.map_err(|e| {
                LocatorError::KubeconfigError(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                ))
            })?;
            config_from_kubeconfig(&yaml, context.as_deref()).await?
        }
        ClientSource::KubeconfigYaml { yaml, context } => {
            config_from_kubeconfig(yaml, context.as_deref()).await?
        }
    };

    Client::try_from(config)
        .map_err(|e| LocatorError::KubeconfigError(format!("Failed to create client: {}", e)))
}

async fn config_from_kubeconfig(kubeconfig: &str, context: Option<&str>) -> Result<KConfig> {
    let kubeconfig_parsed: Kubeconfig = serde_yaml::from_str(kubeconfig)
        .map_err(|e| LocatorError::KubeconfigError(format!("Failed to parse kubeconfig: {}", e)))?;

    let options = KubeConfigOptions {
        context: context.map(str::to_string),
        ..Default::default()
    };

    KConfig::from_custom_kubeconfig(kubeconfig_parsed, &options)
        .await
        .map_err(|e| LocatorError::KubeconfigError(format!("Failed to create config: {}", e)))
}

/// List a single Secret to confirm the client is connected and authorized
pub async fn verify_connection(client: &Client) -> Result<()> {
    let secrets: Api<Secret> = Api::all(client.clone());
    secrets.list(&ListParams::default().limit(1)).await?;
    Ok(())
}
