// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes client construction.

pub mod client;

pub use client::{connect, create_client, verify_connection, ClientSource};
