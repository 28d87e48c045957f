//! Request and response envelopes as they appear on the wire.

use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use crate::{ErrorObject, RequestId};

/// Protocol version sent in every request.
pub const JSONRPC_VERSION: &str = "2.0";

/// A request envelope borrowing its method and params from the caller.
#[derive(Debug, Serialize)]
pub struct Request<'a, P: ?Sized> {
    /// Always [`JSONRPC_VERSION`].
    pub jsonrpc: &'static str,
    /// Method to invoke; never empty once built by the client.
    pub method: &'a str,
    /// Method parameters.
    pub params: &'a P,
    /// Correlation token echoed back by the server.
    pub id: &'a RequestId,
}

impl<'a, P: Serialize + ?Sized> Request<'a, P> {
    /// Creates a version 2.0 request envelope.
    pub fn new(method: &'a str, params: &'a P, id: &'a RequestId) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            method,
            params,
            id,
        }
    }
}

/// A response envelope with its `result` left undecoded.
///
/// The `result` stays raw so it can be decoded into whatever type the caller
/// asked for only after the id and error members have been checked.
#[derive(Debug, Deserialize)]
pub struct Response {
    /// Protocol version reported by the server.
    #[serde(default)]
    pub jsonrpc: String,
    /// Raw result payload; `None` when absent or `null`.
    #[serde(default)]
    pub result: Option<Box<RawValue>>,
    /// Error object; `None` when absent or `null`.
    #[serde(default)]
    pub error: Option<ErrorObject>,
    /// Correlation token as sent by the server. Kept as raw JSON so numeric
    /// or `null` ids still decode and can be reported as mismatches.
    #[serde(default)]
    pub id: serde_json::Value,
}

impl Response {
    /// Returns `true` if the response id is the string `id`.
    pub fn matches_id(&self, id: &RequestId) -> bool {
        self.id.as_str() == Some(id.as_str())
    }

    /// Returns the raw result JSON, or `"null"` when the result was absent.
    pub fn result_json(&self) -> &str {
        self.result.as_deref().map_or("null", RawValue::get)
    }
}
