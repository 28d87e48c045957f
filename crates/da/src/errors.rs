//! Error type for the dependency analysis client.

use thiserror::Error;

/// Failure to build a [`crate::Client`] or to analyse a text.
#[derive(Debug, Error)]
pub enum Error {
    /// The client could not be configured (bad endpoint or application id).
    #[error("invalid client configuration")]
    Config(#[from] jsonrpc::ConfigError),

    /// The `jlp.daservice.parse` call failed.
    ///
    /// The underlying JSON-RPC error is kept as the source so callers can
    /// inspect its kind or the server error object.
    #[error("failed to parse text")]
    Parse {
        /// The transport-level failure.
        #[source]
        source: jsonrpc::Error,
    },
}

impl Error {
    /// Returns the JSON-RPC error behind a [`Error::Parse`].
    pub fn rpc_error(&self) -> Option<&jsonrpc::Error> {
        match self {
            Self::Parse { source } => Some(source),
            Self::Config(_) => None,
        }
    }

    /// Returns `true` if the call was cancelled or timed out.
    pub fn is_cancellation(&self) -> bool {
        self.rpc_error().is_some_and(jsonrpc::Error::is_cancellation)
    }
}
