use crate::Generator;
use blink_core::Slug;
use std::sync::atomic::{AtomicU64, Ordering};

/// A sequential slug generator.
///
/// Produces `prefix000000`, `prefix000001`, and so on. The output is fully
/// predictable, which makes it useful for exercising the collision-retry
/// path: pre-populate the store with the first few codes and the caller has
/// to keep probing.
#[derive(Debug)]
pub struct SeqGenerator {
    counter: AtomicU64,
    prefix: String,
}

impl Clone for SeqGenerator {
    fn clone(&self) -> Self {
        Self {
            counter: AtomicU64::new(self.counter.load(Ordering::SeqCst)),
            prefix: self.prefix.clone(),
        }
    }
}

impl SeqGenerator {
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self::with_offset(prefix, 0)
    }

    /// Creates a generator whose first slug uses `offset` as counter value.
    pub fn with_offset(prefix: impl Into<String>, offset: u64) -> Self {
        Self {
            counter: AtomicU64::new(offset),
            prefix: prefix.into(),
        }
    }
}

impl Generator for SeqGenerator {
    type Output = Slug;

    fn generate(&self) -> Self::Output {
        let count = self.counter.fetch_add(1, Ordering::SeqCst);
        Slug::from(format!("{}{:06}", self.prefix, count))
    }
}
