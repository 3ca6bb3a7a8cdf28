use tokio::sync::{Mutex, MutexGuard};

/// Serializes nonce acquisition for a single sending address.
///
/// A [`NonceLease`] holds the lock from the moment the nonce is read until
/// the broadcast outcome is known, so no two in-flight submissions can
/// consume the same nonce. The cached value is cleared after a failed
/// broadcast, forcing the next lease to re-read the pending count from the
/// node, since the failed transaction may or may not have reached the
/// mempool.
#[derive(Debug, Default)]
pub struct NonceManager {
    next: Mutex<Option<u64>>,
}

impl NonceManager {
    /// Create a manager with no cached nonce.
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the nonce lock. Waits for any in-flight submission.
    pub async fn lease(&self) -> NonceLease<'_> {
        NonceLease { guard: self.next.lock().await }
    }

    /// The cached next nonce, if any.
    pub async fn next(&self) -> Option<u64> {
        *self.next.lock().await
    }
}

/// Exclusive access to the sender's nonce. Dropping the lease without
/// [`commit`](NonceLease::commit) or [`reset`](NonceLease::reset) leaves the
/// cached value unchanged.
#[derive(Debug)]
pub struct NonceLease<'a> {
    guard: MutexGuard<'a, Option<u64>>,
}

impl NonceLease<'_> {
    /// The cached next nonce, or `None` if it must be fetched.
    pub fn cached(&self) -> Option<u64> {
        *self.guard
    }

    /// Record that `used` was consumed by a broadcast transaction.
    pub fn commit(mut self, used: u64) {
        *self.guard = Some(used + 1);
    }

    /// Forget the cached nonce.
    pub fn reset(mut self) {
        *self.guard = None;
    }
}
