// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use super::{Credential, Endpoint, TrustMaterial};
use std::fmt;

/// Connection settings for an Elasticsearch client
#[derive(Clone, PartialEq, Eq)]
pub struct ClusterConfig {
    /// `scheme://host:port` addresses, never empty
    pub addresses: Vec<String>,
    pub username: String,
    pub password: String,
    pub ca_cert: Option<Vec<u8>>,
}

impl ClusterConfig {
    pub fn new(endpoint: &Endpoint, credential: Credential, trust: TrustMaterial) -> Self {
        Self {
            addresses: vec![endpoint.url()],
            username: credential.username,
            password: credential.password,
            ca_cert: trust.ca_cert,
        }
    }
}

impl fmt::Debug for ClusterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClusterConfig")
            .field("addresses", &self.addresses)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("ca_cert", &self.ca_cert.as_ref().map(|c| c.len()))
            .finish()
    }
}
