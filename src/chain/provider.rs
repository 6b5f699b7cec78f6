use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::client::RpcClient;
use alloy::transports::http::Http;
use alloy::transports::layers::FallbackLayer;
use anyhow::{anyhow, Result};
use std::num::NonZeroUsize;
use tower::ServiceBuilder;
use url::Url;

/// Parse the configured RPC endpoints, rejecting an empty list
pub fn parse_rpc_urls(rpcs: &[String]) -> Result<Vec<Url>> {
    if rpcs.is_empty() {
        return Err(anyhow!("No RPC endpoints configured"));
    }

    rpcs.iter()
        .map(|rpc| {
            rpc.parse::<Url>()
                .map_err(|e| anyhow!("Invalid RPC URL '{}': {}", rpc, e))
        })
        .collect()
}

/// Build a provider that fans read calls out over every configured endpoint.
pub fn create_provider(rpcs: &[String]) -> Result<DynProvider> {
    let urls = parse_rpc_urls(rpcs)?;
    let active_count =
        NonZeroUsize::new(urls.len()).ok_or_else(|| anyhow!("No RPC endpoints configured"))?;
    let fallback_layer = FallbackLayer::default().with_active_transport_count(active_count);

    let transports = urls.into_iter().map(Http::new).collect::<Vec<_>>();

    let transport = ServiceBuilder::new()
        .layer(fallback_layer)
        .service(transports);
    let client = RpcClient::builder().transport(transport, false);
    let provider = ProviderBuilder::new().connect_client(client);
    Ok(provider.erased())
}
