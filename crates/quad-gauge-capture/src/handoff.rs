use std::sync::{Arc, Mutex, PoisonError};

/// Single-slot handoff of owned values between the capture loop and the
/// presentation side.
///
/// [`publish`](Self::publish) replaces any unconsumed value, so a slow
/// consumer only ever sees the newest frame and older ones are dropped
/// implicitly. There is no backpressure and no shared mutable state:
/// values move through whole.
pub struct LatestSlot<T> {
    inner: Arc<Mutex<Option<T>>>,
}

impl<T> Clone for LatestSlot<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for LatestSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LatestSlot<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(None)),
        }
    }

    /// Replace the stored value with a newer one.
    pub fn publish(&self, value: T) {
        let mut slot = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(value);
    }

    /// Take the newest value, leaving the slot empty.
    pub fn take(&self) -> Option<T> {
        let mut slot = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        slot.take()
    }
}
