// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Built-in superuser created by the ECK operator. Also the key of the
/// password entry in the credentials Secret.
pub const ELASTIC_USERNAME: &str = "elastic";

/// Secret entry holding the PEM encoded CA certificate
pub const CA_CERT_KEY: &str = "ca.crt";

/// Resource name templates. `{name}` is replaced with the cluster name.
pub mod templates {
    pub const PLACEHOLDER: &str = "{name}";
    /// HTTP Service exposing the cluster
    pub const ENDPOINT: &str = "{name}-es-http";
    /// Secret holding the elastic user password
    pub const CREDENTIALS: &str = "{name}-es-elastic-user";
    /// Secret holding the public part of the HTTP certificates
    pub const TRUST: &str = "{name}-es-http-certs-public";
}

/// Cluster IP reported by headless Services
pub const HEADLESS_CLUSTER_IP: &str = "None";
