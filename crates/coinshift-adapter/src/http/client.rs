/*
[INPUT]:  HTTP configuration (base URLs, timeouts, optional proxy)
[OUTPUT]: Configured reqwest client ready for Privy and Deform API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use reqwest::{Client, Method, Proxy, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::http::headers::{deform_headers, privy_headers};
use crate::http::{CoinshiftError, Result};
use crate::types::{GraphQLRequest, GraphQLResponse};

/// Base URLs for the wallet-auth and campaign services
const PRIVY_BASE_URL: &str = "https://auth.privy.io";
const DEFORM_BASE_URL: &str = "https://api.deform.cc/";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    /// Outbound proxy URL, one per account to avoid correlated rate limits
    pub proxy: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(10),
            proxy: None,
        }
    }
}

impl ClientConfig {
    /// Configuration routing through the given proxy, default timeouts
    pub fn with_proxy(proxy: Option<String>) -> Self {
        Self {
            proxy,
            ..Self::default()
        }
    }
}

/// HTTP client for the Privy auth service and the Deform campaign API
#[derive(Debug)]
pub struct CoinshiftClient {
    http_client: Client,
    privy_base_url: Url,
    deform_base_url: Url,
}

impl CoinshiftClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_urls(config, PRIVY_BASE_URL, DEFORM_BASE_URL)
    }

    /// Create a new client with custom configuration and base URLs.
    ///
    /// Base URLs are injectable so tests can point the client at a mock
    /// server.
    pub fn with_config_and_base_urls(
        config: ClientConfig,
        privy_base_url: &str,
        deform_base_url: &str,
    ) -> Result<Self> {
        let mut builder = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout);

        if let Some(proxy_url) = &config.proxy {
            let proxy = Proxy::all(proxy_url)
                .map_err(|e| CoinshiftError::Config(format!("Invalid proxy URL: {e}")))?;
            builder = builder.proxy(proxy);
        }

        Ok(Self {
            http_client: builder.build()?,
            privy_base_url: Url::parse(privy_base_url)?,
            deform_base_url: Url::parse(deform_base_url)?,
        })
    }

    /// Build request builder for Privy endpoints
    pub(crate) fn privy_request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.privy_base_url.join(endpoint)?;
        Ok(self
            .http_client
            .request(method, url)
            .headers(privy_headers()))
    }

    /// Build request builder for the Deform GraphQL endpoint
    pub(crate) fn deform_request(&self, operation_name: &'static str) -> RequestBuilder {
        self.http_client
            .request(Method::POST, self.deform_base_url.clone())
            .headers(deform_headers(operation_name))
    }

    /// Send a request and decode the JSON response body.
    ///
    /// Non-success statuses become `UnexpectedStatus` carrying the body so
    /// the operator can diagnose from the log alone. Gzip-compressed
    /// bodies are decompressed by reqwest before we see them.
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(CoinshiftError::unexpected_status(status, body));
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Send a GraphQL request and unwrap the data/errors envelope
    pub(crate) async fn send_graphql<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        request: &GraphQLRequest,
    ) -> Result<T> {
        let envelope: GraphQLResponse<T> = self.send_json(builder.json(request)).await?;

        if let Some(error) = envelope.errors.first() {
            return Err(CoinshiftError::GraphQL(error.message.clone()));
        }

        envelope.data.ok_or_else(|| {
            CoinshiftError::InvalidResponse(format!(
                "{} response contained neither data nor errors",
                request.operation_name
            ))
        })
    }
}
