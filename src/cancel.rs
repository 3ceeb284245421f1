//! Cancellation token shared between the interrupt handler and playback.
//!
//! Playback checks the token between frames and waits on it while pacing, so
//! an interrupt wakes a sleeping loop immediately instead of after the
//! remaining frame interval.

use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

/// Cloneable stop flag with a deadline wait.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    cancelled: Mutex<bool>,
    wake: Condvar,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a stop and wake any waiter.
    pub fn stop(&self) {
        *self.lock() = true;
        self.inner.wake.notify_all();
    }

    pub fn is_cancelled(&self) -> bool {
        *self.lock()
    }

    /// Block until `deadline` or until stopped, whichever comes first.
    ///
    /// Returns `true` if the wait ended because of a stop request.
    pub fn wait_until(&self, deadline: Instant) -> bool {
        let mut cancelled = self.lock();
        loop {
            if *cancelled {
                return true;
            }
            let now = Instant::now();
            if now >= deadline {
                return false;
            }
            let (guard, _) = self
                .inner
                .wake
                .wait_timeout(cancelled, deadline - now)
                .unwrap_or_else(PoisonError::into_inner);
            cancelled = guard;
        }
    }

    /// Route SIGINT (and SIGTERM/SIGHUP on unix) to this token.
    ///
    /// Can only be installed once per process.
    pub fn install_interrupt_handler(&self) -> Result<(), ctrlc::Error> {
        let token = self.clone();
        ctrlc::set_handler(move || {
            tracing::debug!("interrupt received");
            token.stop();
        })
    }

    fn lock(&self) -> MutexGuard<'_, bool> {
        self.inner
            .cancelled
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
