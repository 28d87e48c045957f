//! The JSON-RPC 2.0 transport client.

use std::sync::{Arc, OnceLock};

use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::envelope::{Request, Response, JSONRPC_VERSION};
use crate::{CallContext, ClientConfig, Error, IdGenerator, RequestId};

/// Transport shared by every client built without [`ClientConfig::with_transport`].
fn default_transport() -> &'static reqwest::Client {
    static TRANSPORT: OnceLock<reqwest::Client> = OnceLock::new();
    TRANSPORT.get_or_init(reqwest::Client::new)
}

/// Performs JSON-RPC 2.0 round trips over HTTP POST against one endpoint.
///
/// Cloning is cheap; clones share the HTTP connection pool and id generator.
#[derive(Debug, Clone)]
pub struct Client {
    config: ClientConfig,
    http: reqwest::Client,
    ids: Arc<dyn IdGenerator>,
}

impl Client {
    /// Creates a client from a validated configuration.
    pub fn new(config: ClientConfig) -> Self {
        let http = config
            .transport
            .clone()
            .unwrap_or_else(|| default_transport().clone());
        let ids = Arc::clone(&config.id_generator);
        Self { config, http, ids }
    }

    /// Returns the configuration this client was built from.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Invokes `method` with `params` and decodes the result as `R`.
    ///
    /// The response must echo the request's id. A populated `error` member is
    /// returned as [`Error::Server`]; otherwise the `result` member is decoded
    /// into `R` (an absent result decodes from `null`).
    pub async fn call<P, R>(&self, ctx: &CallContext, method: &str, params: &P) -> Result<R, Error>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        if method.is_empty() {
            return Err(Error::InvalidRequest {
                reason: "method is empty".to_string(),
            });
        }
        ctx.check()?;

        let id = self.ids.next_id();
        let body = serde_json::to_vec(&Request::new(method, params, &id)).map_err(Error::Encode)?;

        debug!(
            method,
            id = %id,
            endpoint = %self.config.endpoint,
            "sending JSON-RPC request"
        );

        let response = ctx.run(self.round_trip(body)).await??;
        decode_response(&id, &response)
    }

    /// Posts `body` and returns the decoded envelope. The response body is read
    /// to the end on every path once headers have arrived.
    async fn round_trip(&self, body: Vec<u8>) -> Result<Response, Error> {
        let res = self
            .http
            .post(self.config.endpoint.clone())
            .header(USER_AGENT, self.config.user_agent.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = res.status();
        let bytes = res.bytes().await.map_err(Error::Transport)?;
        debug!(%status, len = bytes.len(), "received JSON-RPC response");

        if status != StatusCode::OK {
            return Err(Error::HttpStatus { status });
        }

        serde_json::from_slice(&bytes).map_err(|source| Error::Decode {
            what: "response JSON",
            source,
        })
    }
}

/// Checks correlation and error members, then decodes the result payload.
fn decode_response<R: DeserializeOwned>(id: &RequestId, res: &Response) -> Result<R, Error> {
    if res.jsonrpc != JSONRPC_VERSION {
        warn!(version = %res.jsonrpc, "unexpected JSON-RPC version in response");
    }

    if !res.matches_id(id) {
        warn!(expected = %id, actual = %res.id, "response ID mismatch");
        return Err(Error::IdMismatch {
            expected: id.clone(),
            actual: res.id.clone(),
        });
    }

    if let Some(err) = &res.error {
        warn!(code = %err.code, error_message = %err.message, "server returned JSON-RPC error");
        return Err(Error::Server(err.clone()));
    }

    serde_json::from_str(res.result_json()).map_err(|source| Error::Decode {
        what: "result JSON",
        source,
    })
}
