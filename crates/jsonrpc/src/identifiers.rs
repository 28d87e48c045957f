//! Newtype identifiers used on the wire.
//!
//! A [`RequestId`] correlates one request envelope with its response; an
//! [`AppId`] identifies the calling application to the upstream service.
//! Keeping them as distinct types prevents passing an application id where a
//! correlation token is expected even though both are strings underneath.
//!
//! Request ids are produced by an [`IdGenerator`]. The default
//! [`UuidGenerator`] yields random UUID v4 strings; [`SequentialIdGenerator`]
//! yields predictable ids for tests and replayable traces.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Request correlation
// ---------------------------------------------------------------------------

/// Correlation token carried in the `id` member of a request and echoed back in
/// the matching response.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(String);

impl RequestId {
    /// Creates a request id from an arbitrary token.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Generates a new random (UUID v4) request id.
    pub fn new_random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Uuid> for RequestId {
    fn from(id: Uuid) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source of fresh [`RequestId`]s, one per call.
///
/// Implementations must be safe to share between concurrently running calls
/// and should never hand out the same id to two outstanding requests.
pub trait IdGenerator: Send + Sync + std::fmt::Debug {
    /// Returns the id for the next request.
    fn next_id(&self) -> RequestId;
}

/// Generates random UUID v4 ids. Collisions between concurrent calls are
/// negligible (122 random bits).
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> RequestId {
        RequestId::new_random()
    }
}

/// Generates `"{prefix}-{n}"` ids with a monotonically increasing counter
/// starting at 1.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIdGenerator {
    /// Creates a generator whose ids start with `prefix`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> RequestId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        RequestId(format!("{}-{}", self.prefix, n))
    }
}

// ---------------------------------------------------------------------------
// Caller identity
// ---------------------------------------------------------------------------

/// Application identifier issued by the Yahoo! JAPAN developer network.
///
/// Sent in the `User-Agent` header as `Yahoo AppID: {app_id}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AppId(String);

impl AppId {
    /// Creates a new identifier, returning `None` if the value is empty.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let v = value.into();
        if v.is_empty() {
            None
        } else {
            Some(Self(v))
        }
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the `User-Agent` header value that identifies this application.
    pub fn user_agent(&self) -> String {
        format!("Yahoo AppID: {}", self.0)
    }
}

impl std::fmt::Display for AppId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
