//! Cancellation of an in-flight submission

use futures::future::{AbortHandle, AbortRegistration, Abortable, Aborted};
use std::future::Future;

/// Control side; held by whoever owns the screen's lifetime
#[derive(Debug, Clone)]
pub struct CancelHandle {
    inner: AbortHandle,
}

impl CancelHandle {
    /// Abort the request tied to the paired [`CancelSignal`]
    pub fn cancel(&self) {
        self.inner.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.is_aborted()
    }
}

/// Request side; consumed by the submission it guards
#[derive(Debug)]
pub struct CancelSignal {
    registration: AbortRegistration,
}

impl CancelSignal {
    /// Run `future` until it completes or the paired handle cancels it
    pub async fn guard<F: Future>(self, future: F) -> Result<F::Output, Aborted> {
        Abortable::new(future, self.registration).await
    }
}

/// Create a linked handle/signal pair
pub fn cancellation() -> (CancelHandle, CancelSignal) {
    let (inner, registration) = AbortHandle::new_pair();
    (CancelHandle { inner }, CancelSignal { registration })
}
