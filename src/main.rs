// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use eck_locator::config::Config;
use eck_locator::directory::KubeDirectory;
use eck_locator::kubernetes::connect;
use eck_locator::resolver::Resolver;

/// Printed result. The password is never written out.
#[derive(Serialize)]
struct Summary<'a> {
    addresses: &'a [String],
    username: &'a str,
    has_ca_cert: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: namespace={} cluster={}",
        config.namespace, config.cluster_name
    );

    let client = connect(&config.client_source).await?;
    let resolver = Resolver::new(KubeDirectory::new(client));

    let cluster = resolver
        .resolve(&config.namespace, &config.cluster_name)
        .await
        .with_context(|| {
            format!(
                "Failed to resolve Elasticsearch cluster {}/{}",
                config.namespace, config.cluster_name
            )
        })?;

    let summary = Summary {
        addresses: &cluster.addresses,
        username: &cluster.username,
        has_ca_cert: cluster.ca_cert.is_some(),
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
