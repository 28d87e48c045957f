//! Per-call cancellation and deadlines.
//!
//! A [`CallContext`] is handed to every call. Cancelling its token or letting
//! its deadline pass drops the in-flight HTTP request and fails the call with
//! [`Error::Cancelled`] or [`Error::DeadlineExceeded`].

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::Error;

/// Cancellation token plus optional deadline for one or more calls.
///
/// Cloning a context shares its token: cancelling any clone cancels them all.
#[derive(Debug, Clone)]
pub struct CallContext {
    cancel: CancellationToken,
    deadline: Option<Instant>,
}

impl CallContext {
    /// A context that is never cancelled and has no deadline.
    pub fn background() -> Self {
        Self {
            cancel: CancellationToken::new(),
            deadline: None,
        }
    }

    /// A context cancelled together with `token`.
    pub fn with_cancellation(token: CancellationToken) -> Self {
        Self {
            cancel: token,
            deadline: None,
        }
    }

    /// Limits the context to `timeout` from now. An earlier existing deadline
    /// is kept.
    #[must_use]
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Limits the context to `deadline`. An earlier existing deadline is kept.
    #[must_use]
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(current) => current.min(deadline),
            None => deadline,
        });
        self
    }

    /// Returns the token that cancels this context.
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Returns the deadline, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Cancels this context and every clone of it.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Returns `true` if the context has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Checks the context before starting work.
    pub(crate) fn check(&self) -> Result<(), Error> {
        if self.is_cancelled() {
            return Err(Error::Cancelled);
        }
        if let Some(deadline) = self.deadline {
            if deadline <= Instant::now() {
                return Err(Error::DeadlineExceeded(Duration::ZERO));
            }
        }
        Ok(())
    }

    /// Drives `fut` to completion unless the context is cancelled or its
    /// deadline passes first, in which case `fut` is dropped.
    pub(crate) async fn run<F>(&self, fut: F) -> Result<F::Output, Error>
    where
        F: Future,
    {
        let started = Instant::now();
        let bounded = async {
            match self.deadline {
                Some(deadline) => tokio::time::timeout_at(deadline, fut)
                    .await
                    .map_err(|_| Error::DeadlineExceeded(started.elapsed())),
                None => Ok(fut.await),
            }
        };

        tokio::select! {
            biased;
            () = self.cancel.cancelled() => Err(Error::Cancelled),
            out = bounded => out,
        }
    }
}

impl Default for CallContext {
    fn default() -> Self {
        Self::background()
    }
}
