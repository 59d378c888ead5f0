// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Resolution of Elasticsearch client settings from cluster resources

use crate::directory::{Directory, ObjectKey};
use crate::error::Result;
use crate::naming::NamingScheme;
use crate::types::{ClusterConfig, Credential, Endpoint, TrustMaterial};
use k8s_openapi::api::core::v1::{Secret, Service};
use tracing::{debug, info, instrument};

/// Builds a [`ClusterConfig`] from the Service and Secrets the ECK operator
/// creates for a cluster.
///
/// Resources are fetched one after the other (endpoint, credentials, trust)
/// and the first failure aborts the resolution. Nothing is cached, so two
/// calls against unchanged resources yield equal configurations.
pub struct Resolver<D> {
    directory: D,
    naming: NamingScheme,
}

impl<D: Directory> Resolver<D> {
    pub fn new(directory: D) -> Self {
        Self::with_naming(directory, NamingScheme::default())
    }

    pub fn with_naming(directory: D, naming: NamingScheme) -> Self {
        Self { directory, naming }
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// Resolve the full client configuration of `cluster_name` in `namespace`
    #[instrument(skip(self))]
    pub async fn resolve(&self, namespace: &str, cluster_name: &str) -> Result<ClusterConfig> {
        let endpoint = self.resolve_endpoint(namespace, cluster_name).await?;

        let key = ObjectKey::new(namespace, self.naming.credentials_name(cluster_name));
        let secret: Secret = self.directory.get(&key).await?;
        let credential = Credential::from_secret(&secret)?;
        debug!("Read credentials of user '{}' from Secret {}", credential.username, key);

        let key = ObjectKey::new(namespace, self.naming.trust_name(cluster_name));
        let secret: Secret = self.directory.get(&key).await?;
        let trust = TrustMaterial::from_secret(&secret);
        if trust.ca_cert.is_none() {
            debug!("Secret {} has no CA certificate", key);
        }

        let config = ClusterConfig::new(&endpoint, credential, trust);
        info!(
            "Resolved cluster {}/{} to {}",
            namespace,
            cluster_name,
            endpoint.url()
        );

        Ok(config)
    }

    /// Resolve only the network endpoint of `cluster_name` in `namespace`
    #[instrument(skip(self))]
    pub async fn resolve_endpoint(&self, namespace: &str, cluster_name: &str) -> Result<Endpoint> {
        let key = ObjectKey::new(namespace, self.naming.endpoint_name(cluster_name));
        let service: Service = self.directory.get(&key).await?;
        let endpoint = Endpoint::from_service(&service)?;
        debug!("Service {} exposes {}", key, endpoint.url());

        Ok(endpoint)
    }
}
