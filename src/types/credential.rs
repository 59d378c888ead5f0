// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{CA_CERT_KEY, ELASTIC_USERNAME};
use crate::error::{LocatorError, Result};
use k8s_openapi::api::core::v1::Secret;
use kube::ResourceExt;
use std::fmt;

/// Username and password of the built-in elastic user
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl Credential {
    /// Read the password stored under the username key of a Secret.
    ///
    /// Fails with `MissingEntry` when the key is absent, and with
    /// `InvalidShape` when the stored bytes are not valid UTF-8, since the
    /// password is handed to HTTP basic auth as text.
    pub fn from_secret(secret: &Secret) -> Result<Self> {
        let Some(password) = secret
            .data
            .as_ref()
            .and_then(|d| d.get(ELASTIC_USERNAME))
        else {
            return Err(LocatorError::MissingEntry {
                namespace: secret.namespace().unwrap_or_default(),
                name: secret.name_any(),
                key: ELASTIC_USERNAME.to_string(),
            });
        };

        let password = String::from_utf8(password.0.clone()).map_err(|e| {
            LocatorError::InvalidShape {
                kind: "Secret".to_string(),
                namespace: secret.namespace().unwrap_or_default(),
                name: secret.name_any(),
                reason: format!("'{}' entry is not valid UTF-8: {}", ELASTIC_USERNAME, e),
            }
        })?;

        Ok(Self {
            username: ELASTIC_USERNAME.to_string(),
            password,
        })
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// CA certificate used to verify the cluster's HTTP certificate
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrustMaterial {
    pub ca_cert: Option<Vec<u8>>,
}

impl TrustMaterial {
    /// Read the CA certificate from a Secret. A missing entry is not an error.
    pub fn from_secret(secret: &Secret) -> Self {
        let ca_cert = secret
            .data
            .as_ref()
            .and_then(|d| d.get(CA_CERT_KEY))
            .map(|cert| cert.0.clone());

        Self { ca_cert }
    }
}
