//! Cooperative cancellation shared between a caller and in-flight merge work.

use crate::error::MergeError;
use parking_lot::RwLock;
use std::sync::Arc;

/// Cancellation flag checked by fingerprinting workers between files
///
/// Clones share the same flag. Cancelling is one-way.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<RwLock<bool>>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation of every operation holding a clone of this token
    pub fn cancel(&self) {
        *self.cancelled.write() = true;
    }

    pub fn is_cancelled(&self) -> bool {
        *self.cancelled.read()
    }

    /// Return `Err(MergeError::Cancelled)` once cancellation was requested
    pub fn check(&self) -> Result<(), MergeError> {
        if self.is_cancelled() {
            Err(MergeError::Cancelled)
        } else {
            Ok(())
        }
    }
}
