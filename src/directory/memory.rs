// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! In-memory directory for tests and offline use

use super::{Directory, Lookup, ObjectKey};
use crate::error::{LocatorError, Result};
use kube::ResourceExt;
use std::any::Any;
use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

/// [`Directory`] serving a fixed set of objects.
///
/// Every lookup is recorded, found or not, so the order in which a caller
/// fetched resources can be inspected afterwards.
#[derive(Default)]
pub struct MemoryDirectory {
    objects: BTreeMap<(String, ObjectKey), Box<dyn Any + Send + Sync>>,
    lookups: Mutex<Vec<ObjectKey>>,
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object, keyed by its kind, namespace and name
    pub fn with<K: Lookup>(mut self, object: K) -> Self {
        self.insert(object);
        self
    }

    /// Add or replace an object
    pub fn insert<K: Lookup>(&mut self, object: K) {
        let key = ObjectKey::new(object.namespace().unwrap_or_default(), object.name_any());
        self.objects
            .insert((K::kind_name(), key), Box::new(object));
    }

    /// Keys requested so far, in order
    pub fn lookups(&self) -> Vec<ObjectKey> {
        self.lookups
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Directory for MemoryDirectory {
    async fn get<K: Lookup>(&self, key: &ObjectKey) -> Result<K> {
        self.lookups
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(key.clone());

        self.objects
            .get(&(K::kind_name(), key.clone()))
            .and_then(|object| object.downcast_ref::<K>())
            .cloned()
            .ok_or_else(|| LocatorError::NotFound {
                kind: K::kind_name(),
                namespace: key.namespace.clone(),
                name: key.name.clone(),
            })
    }
}
