//! Client for the Yahoo! JAPAN Japanese dependency analysis API (DAService V2).
//!
//! Sends text to `jlp.daservice.parse` and returns the clauses (chunks) it
//! was split into, each with the chunk it depends on and its morphemes.
//!
//! ## Architectural Layer
//!
//! **Domain client.** Knows the one method, its parameters, and its result
//! shape. Envelopes, correlation ids, HTTP, and error objects are handled by
//! the [`jsonrpc`] crate.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`client`] | [`Client`], [`Options`], the [`DependencyAnalyzer`] trait |
//! | [`types`] | [`ParseResult`], [`Chunk`], [`Token`] and their accessors |
//! | [`errors`] | [`Error`] |
//!
//! ## Example
//!
//! ```no_run
//! use da::{CallContext, Client};
//!
//! # async fn run() -> Result<(), da::Error> {
//! let client = Client::new("my-app-id")?;
//! let result = client
//!     .parse(&CallContext::background(), "うちの庭には二羽鶏がいます。")
//!     .await?;
//! for chunk in &result.chunks {
//!     println!("{} -> {}: {}", chunk.id, chunk.head, chunk);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod errors;
pub mod types;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use client::{Client, DependencyAnalyzer, Options, DEFAULT_ENDPOINT, PARSE_METHOD};
pub use errors::Error;
pub use jsonrpc::CallContext;
pub use types::{Chunk, ParseResult, Token, TokenField, ROOT_HEAD};
