//! The dependency analysis client.

use std::sync::Arc;

use async_trait::async_trait;
use jsonrpc::{CallContext, ClientConfig, IdGenerator};
use tracing::debug;

use crate::types::{ParseParams, ParseResult};
use crate::Error;

/// Production endpoint of the dependency analysis API (V2).
pub const DEFAULT_ENDPOINT: &str = "https://jlp.yahooapis.jp/DAService/V2/parse";

/// JSON-RPC method that performs the analysis.
pub const PARSE_METHOD: &str = "jlp.daservice.parse";

/// Optional settings for [`Client::with_options`].
#[derive(Debug, Clone, Default)]
pub struct Options {
    endpoint: Option<String>,
    http_client: Option<reqwest::Client>,
    id_generator: Option<Arc<dyn IdGenerator>>,
}

impl Options {
    /// Sends requests to `endpoint` instead of [`DEFAULT_ENDPOINT`].
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Uses `client` for HTTP instead of the shared default transport.
    #[must_use]
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Uses `generator` for JSON-RPC request ids.
    #[must_use]
    pub fn with_id_generator(mut self, generator: Arc<dyn IdGenerator>) -> Self {
        self.id_generator = Some(generator);
        self
    }
}

/// Analyses Japanese text into chunks and their dependencies.
///
/// The CLI and other consumers depend on this trait rather than on
/// [`Client`] so the service can be replaced in tests.
#[async_trait]
pub trait DependencyAnalyzer: Send + Sync {
    /// Analyses `text`.
    async fn analyze(&self, ctx: &CallContext, text: &str) -> Result<ParseResult, Error>;
}

/// Client for the dependency analysis API.
#[derive(Debug, Clone)]
pub struct Client {
    rpc: jsonrpc::Client,
}

impl Client {
    /// Creates a client for `app_id` against the production endpoint.
    pub fn new(app_id: impl Into<String>) -> Result<Self, Error> {
        Self::with_options(app_id, Options::default())
    }

    /// Creates a client for `app_id` with the given options.
    pub fn with_options(app_id: impl Into<String>, options: Options) -> Result<Self, Error> {
        let endpoint = options.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT);
        let mut config = ClientConfig::new(endpoint, app_id)?;
        if let Some(http) = options.http_client {
            config = config.with_transport(http);
        }
        if let Some(generator) = options.id_generator {
            config = config.with_id_generator(generator);
        }

        Ok(Self {
            rpc: jsonrpc::Client::new(config),
        })
    }

    /// Returns the endpoint this client posts to.
    pub fn endpoint(&self) -> &str {
        self.rpc.config().endpoint().as_str()
    }

    /// Analyses `text` and returns its chunks.
    pub async fn parse(&self, ctx: &CallContext, text: &str) -> Result<ParseResult, Error> {
        let result: ParseResult = self
            .rpc
            .call(ctx, PARSE_METHOD, &ParseParams { text })
            .await
            .map_err(|source| Error::Parse { source })?;

        debug!(chunks = result.chunks.len(), "dependency analysis complete");
        Ok(result)
    }
}

#[async_trait]
impl DependencyAnalyzer for Client {
    async fn analyze(&self, ctx: &CallContext, text: &str) -> Result<ParseResult, Error> {
        self.parse(ctx, text).await
    }
}
