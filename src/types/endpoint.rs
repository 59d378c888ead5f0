// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::HEADLESS_CLUSTER_IP;
use crate::error::{LocatorError, Result};
use k8s_openapi::api::core::v1::Service;
use kube::ResourceExt;
use std::net::Ipv6Addr;
use url::Url;

/// Network endpoint of a cluster, derived from its HTTP Service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Name of the Service port, which ECK sets to the scheme (`http` or `https`)
    pub protocol: String,
    pub address: String,
    pub port: i32,
}

impl Endpoint {
    /// Extract the endpoint from a Service.
    ///
    /// The Service must declare exactly one named port. The address is the
    /// single load balancer ingress when there is exactly one, otherwise the
    /// cluster IP.
    pub fn from_service(service: &Service) -> Result<Self> {
        let name = service.name_any();
        let namespace = service.namespace().unwrap_or_default();
        let invalid = |reason: String| LocatorError::InvalidShape {
            kind: "Service".to_string(),
            namespace: namespace.clone(),
            name: name.clone(),
            reason,
        };

        let ports = service
            .spec
            .as_ref()
            .and_then(|s| s.ports.as_deref())
            .unwrap_or_default();
        let [port] = ports else {
            return Err(invalid(format!(
                "expected exactly 1 port, found {}",
                ports.len()
            )));
        };

        let Some(protocol) = port.name.clone().filter(|n| !n.is_empty()) else {
            return Err(invalid(format!("port {} has no name", port.port)));
        };

        let Some(address) = select_address(service) else {
            return Err(LocatorError::MissingAddress {
                namespace: namespace.clone(),
                name: name.clone(),
            });
        };

        let endpoint = Self {
            protocol,
            address,
            port: port.port,
        };
        Url::parse(&endpoint.url())
            .map_err(|e| invalid(format!("invalid address {}: {}", endpoint.url(), e)))?;

        Ok(endpoint)
    }

    /// Render as `protocol://address:port`
    pub fn url(&self) -> String {
        if self.address.parse::<Ipv6Addr>().is_ok() {
            format!("{}://[{}]:{}", self.protocol, self.address, self.port)
        } else {
            format!("{}://{}:{}", self.protocol, self.address, self.port)
        }
    }
}

fn select_address(service: &Service) -> Option<String> {
    let ingress = service
        .status
        .as_ref()
        .and_then(|s| s.load_balancer.as_ref())
        .and_then(|lb| lb.ingress.as_deref())
        .unwrap_or_default();

    let address = match ingress {
        // Load balancers that publish DNS names leave the ip empty
        [only] => only
            .ip
            .as_deref()
            .filter(|ip| !ip.is_empty())
            .or(only.hostname.as_deref()),
        _ => service
            .spec
            .as_ref()
            .and_then(|s| s.cluster_ip.as_deref())
            .filter(|ip| *ip != HEADLESS_CLUSTER_IP),
    };

    address.filter(|a| !a.is_empty()).map(str::to_string)
}
