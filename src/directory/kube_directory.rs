// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Directory backed by the Kubernetes API server

use super::{Directory, Lookup, ObjectKey};
use crate::error::{LocatorError, Result};
use kube::{Api, Client};
use tracing::debug;

/// [`Directory`] that reads resources through a [`kube::Client`]
#[derive(Clone)]
pub struct KubeDirectory {
    client: Client,
}

impl KubeDirectory {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl Directory for KubeDirectory {
    async fn get<K: Lookup>(&self, key: &ObjectKey) -> Result<K> {
        let api: Api<K> = Api::namespaced(self.client.clone(), &key.namespace);

        debug!("Getting {} {}", K::kind_name(), key);

        match api.get(&key.name).await {
            Ok(object) => Ok(object),
            Err(kube::Error::Api(err)) if err.code == 404 => Err(LocatorError::NotFound {
                kind: K::kind_name(),
                namespace: key.namespace.clone(),
                name: key.name.clone(),
            }),
            Err(e) => Err(e.into()),
        }
    }
}
