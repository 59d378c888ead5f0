// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Values extracted from cluster resources and the resulting client configuration.

pub mod cluster_config;
pub mod credential;
pub mod endpoint;

pub use cluster_config::ClusterConfig;
pub use credential::{Credential, TrustMaterial};
pub use endpoint::Endpoint;
