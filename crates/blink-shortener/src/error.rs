use blink_core::StoreError;
use std::fmt::Display;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShortenerError>;

/// The store call that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOperation {
    Get,
    Put,
}

impl Display for StoreOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreOperation::Get => f.write_str("get"),
            StoreOperation::Put => f.write_str("put"),
        }
    }
}

#[derive(Debug, Clone, Error)]
pub enum ShortenerError {
    /// The request was rejected before touching the store.
    #[error("{0}")]
    InvalidRequest(String),
    /// The store failed; never retried at this layer.
    #[error("storage unavailable during {operation}: {source}")]
    StorageUnavailable {
        operation: StoreOperation,
        #[source]
        source: StoreError,
    },
}

impl ShortenerError {
    pub(crate) fn storage(operation: StoreOperation) -> impl FnOnce(StoreError) -> Self {
        move |source| Self::StorageUnavailable { operation, source }
    }
}
