//! Key-value store adapters for Blink.

pub mod memory;
pub mod redis;

pub use blink_core::store::{KvStore, Result};
pub use blink_core::StoreError;
pub use self::memory::InMemoryStore;
pub use self::redis::RedisStore;
