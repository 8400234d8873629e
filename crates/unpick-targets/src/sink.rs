use std::fmt;

use parking_lot::Mutex;

use crate::error::ResolveError;

/// A class that could not be resolved while walking the hierarchy of `class` looking for
/// `declaring_class`.
#[derive(Debug)]
pub struct ResolveFailure {
    pub class: String,
    pub declaring_class: String,
    pub error: ResolveError,
}

impl fmt::Display for ResolveFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to resolve {} while checking for {}: {}",
            self.class, self.declaring_class, self.error
        )
    }
}

/// Receives resolver failures that the hierarchy walk recovered from.
///
/// The walk treats an unresolvable class as a non-match, so this is the only place such failures
/// become visible.
pub trait ResolveFailureSink: Send + Sync {
    fn report(&self, failure: ResolveFailure);
}

/// Default sink: logs each failure at `warn`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl ResolveFailureSink for TracingSink {
    fn report(&self, failure: ResolveFailure) {
        log_failure(&failure);
    }
}

/// Logs like [`TracingSink`] and also keeps every failure for later inspection.
#[derive(Debug, Default)]
pub struct CollectingSink {
    failures: Mutex<Vec<ResolveFailure>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.failures.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.failures.lock().is_empty()
    }

    /// Internal names of the classes that failed to resolve, in report order.
    pub fn failed_classes(&self) -> Vec<String> {
        self.failures
            .lock()
            .iter()
            .map(|failure| failure.class.clone())
            .collect()
    }

    /// Drains the recorded failures.
    pub fn take(&self) -> Vec<ResolveFailure> {
        std::mem::take(&mut *self.failures.lock())
    }
}

impl ResolveFailureSink for CollectingSink {
    fn report(&self, failure: ResolveFailure) {
        log_failure(&failure);
        self.failures.lock().push(failure);
    }
}

fn log_failure(failure: &ResolveFailure) {
    tracing::warn!(
        target: "unpick.targets",
        class = %failure.class,
        declaring_class = %failure.declaring_class,
        error = %failure.error,
        "failed to resolve class during inheritance check"
    );
}
