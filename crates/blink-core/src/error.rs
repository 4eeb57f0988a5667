use thiserror::Error;

/// Errors raised by a key-value store adapter.
///
/// Callers above the store treat every variant as "storage unavailable";
/// the split only exists so adapters can report what went wrong.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("store backend unavailable: {0}")]
    Unavailable(String),
    #[error("store operation timed out: {0}")]
    Timeout(String),
    #[error("store operation failed: {0}")]
    Operation(String),
}
