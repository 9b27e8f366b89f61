//! Async result handle for JWT operations
//!
//! The work runs on a blocking worker and reports back over a oneshot
//! channel; this future resolves to whatever the worker sent.

use crate::error::{JwtError, JwtResult};
use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};
use tokio::sync::oneshot;

/// Pending result of `generate` or `verify`
///
/// Resolves to `Err(JwtError::TaskFailed)` when the worker never reports
/// back: no Tokio runtime was available to run it, or it panicked. Under
/// `panic = "abort"` (the release profile of this workspace) a panicking
/// worker aborts the process instead.
#[must_use = "the operation result is only available by awaiting it"]
pub struct AsyncJwtResult<T> {
    receiver: oneshot::Receiver<JwtResult<T>>,
}

impl<T: Send + 'static> AsyncJwtResult<T> {
    /// Run `work` on the blocking pool of the current runtime
    ///
    /// Outside a runtime the work is dropped unrun and the sender with it.
    pub(crate) fn spawn<F>(work: F) -> Self
    where
        F: FnOnce() -> JwtResult<T> + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn_blocking(move || {
                    let _ = tx.send(work());
                });
            }
            Err(_) => tracing::warn!("JWT operation started outside a Tokio runtime"),
        }
        Self { receiver: rx }
    }
}

impl<T> Future for AsyncJwtResult<T> {
    type Output = JwtResult<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.receiver).poll(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            Poll::Ready(Err(_)) => {
                tracing::warn!("JWT worker ended without a result");
                Poll::Ready(Err(JwtError::TaskFailed))
            }
            Poll::Pending => Poll::Pending,
        }
    }
}
