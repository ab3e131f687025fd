//! Cancellation handle shared between a view and its in-flight requests.
//!
//! A view hands a token to every orchestrated request. Switching tabs or
//! unmounting the view cancels it; the HTTP layer then aborts the fetch and
//! the orchestrator drops whatever result arrives afterwards.

use std::future::Future;
use std::sync::{Arc, Mutex};

use futures::future::{AbortHandle, Abortable};

#[derive(Clone)]
pub struct CancelToken {
    handle: AbortHandle,
    /// One handle per future wrapped by [`CancelToken::abortable`]
    linked: Arc<Mutex<Vec<AbortHandle>>>,
}

impl CancelToken {
    pub fn new() -> Self {
        let (handle, _) = AbortHandle::new_pair();
        Self {
            handle,
            linked: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Abort the token and every future it wraps. Cancelling twice is a
    /// no-op.
    pub fn cancel(&self) {
        let Ok(mut linked) = self.linked.lock() else {
            self.handle.abort();
            return;
        };
        self.handle.abort();
        for handle in linked.drain(..) {
            handle.abort();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.handle.is_aborted()
    }

    /// Wrap `future` so it resolves to `Err(Aborted)` once the token is
    /// cancelled, including when it already is
    pub fn abortable<F: Future>(&self, future: F) -> Abortable<F> {
        let (handle, registration) = AbortHandle::new_pair();
        match self.linked.lock() {
            Ok(mut linked) if !self.is_cancelled() => linked.push(handle),
            _ => handle.abort(),
        }
        Abortable::new(future, registration)
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CancelToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CancelToken")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}
