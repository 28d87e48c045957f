//! JSON-RPC 2.0 client for the Yahoo! JAPAN Web API.
//!
//! Builds request envelopes, posts them over HTTP, checks that each response
//! correlates with its request, and surfaces server error objects as typed
//! errors. Knows nothing about any particular method; domain clients such as
//! the dependency analysis client in the `da` crate sit on top.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`client`] | [`Client`], one round trip per [`Client::call`] |
//! | [`config`] | [`ClientConfig`]: endpoint, app id, transport and id generator options |
//! | [`context`] | [`CallContext`]: cancellation token and deadline |
//! | [`envelope`] | Wire-level request and response envelopes |
//! | [`errors`] | [`Error`], [`ErrorKind`], [`ErrorObject`], [`ErrorCode`], [`ConfigError`] |
//! | [`identifiers`] | [`RequestId`], [`AppId`], and the [`IdGenerator`] seam |
//!
//! ## Example
//!
//! ```no_run
//! use jsonrpc::{CallContext, Client, ClientConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new(ClientConfig::new("https://example.com/rpc", "my-app-id")?);
//! let sum: i64 = client
//!     .call(&CallContext::background(), "add", &serde_json::json!({"a": 1, "b": 2}))
//!     .await?;
//! # let _ = sum;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod context;
pub mod envelope;
pub mod errors;
pub mod identifiers;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use client::Client;
pub use config::ClientConfig;
pub use context::CallContext;
pub use envelope::JSONRPC_VERSION;
pub use errors::{ConfigError, Error, ErrorCode, ErrorKind, ErrorObject};
pub use identifiers::{AppId, IdGenerator, RequestId, SequentialIdGenerator, UuidGenerator};
