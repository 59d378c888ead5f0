// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Derivation of resource names from a cluster name

use crate::constants::templates;

/// Name templates for the three resources read during resolution.
///
/// Each template contains a `{name}` placeholder that is replaced with the
/// logical cluster name. The default follows the ECK operator conventions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingScheme {
    pub endpoint: String,
    pub credentials: String,
    pub trust: String,
}

impl Default for NamingScheme {
    fn default() -> Self {
        Self {
            endpoint: templates::ENDPOINT.to_string(),
            credentials: templates::CREDENTIALS.to_string(),
            trust: templates::TRUST.to_string(),
        }
    }
}

impl NamingScheme {
    /// Name of the Service exposing the cluster
    pub fn endpoint_name(&self, cluster_name: &str) -> String {
        render(&self.endpoint, cluster_name)
    }

    /// Name of the Secret holding the elastic user password
    pub fn credentials_name(&self, cluster_name: &str) -> String {
        render(&self.credentials, cluster_name)
    }

    /// Name of the Secret holding the CA certificate
    pub fn trust_name(&self, cluster_name: &str) -> String {
        render(&self.trust, cluster_name)
    }
}

fn render(template: &str, cluster_name: &str) -> String {
    template.replace(templates::PLACEHOLDER, cluster_name)
}
