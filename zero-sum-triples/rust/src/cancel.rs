use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// Cooperative early-exit signal for long sweeps.
///
/// Clones share the same flag, so a token handed to a worker can be fired
/// from any other thread holding a clone.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    inner: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn cancel(&self) {
        self.inner.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.load(Ordering::Acquire)
    }
}
