// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Read access to named, namespaced cluster resources.

pub mod kube_directory;
pub mod memory;

pub use kube_directory::KubeDirectory;
pub use memory::MemoryDirectory;

use crate::error::Result;
use kube::core::NamespaceResourceScope;
use kube::Resource;
use serde::de::DeserializeOwned;
use std::fmt;
use std::future::Future;

/// Namespaced resource types a [`Directory`] can fetch
pub trait Lookup:
    Resource<Scope = NamespaceResourceScope, DynamicType = ()>
    + Clone
    + DeserializeOwned
    + fmt::Debug
    + Send
    + Sync
    + 'static
{
    /// Kind name used in error messages
    fn kind_name() -> String {
        Self::kind(&()).to_string()
    }
}

impl<K> Lookup for K where
    K: Resource<Scope = NamespaceResourceScope, DynamicType = ()>
        + Clone
        + DeserializeOwned
        + fmt::Debug
        + Send
        + Sync
        + 'static
{
}

/// Namespace and name identifying a resource
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectKey {
    pub namespace: String,
    pub name: String,
}

impl ObjectKey {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

/// Source of cluster resources.
///
/// Implementations must report a missing resource as
/// [`LocatorError::NotFound`](crate::error::LocatorError::NotFound) so callers
/// can tell it apart from transport or authorization failures.
pub trait Directory: Send + Sync {
    /// Fetch the resource of kind `K` identified by `key`
    fn get<K: Lookup>(&self, key: &ObjectKey) -> impl Future<Output = Result<K>> + Send;
}
