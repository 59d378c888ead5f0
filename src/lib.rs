// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod config;
pub mod constants;
pub mod directory;
pub mod error;
pub mod kubernetes;
pub mod naming;
pub mod resolver;
pub mod types;

#[cfg(test)]
mod test_utils;

pub use error::{LocatorError, Result};
pub use resolver::Resolver;
pub use types::ClusterConfig;
