//! Core types and traits for the Blink URL shortener.
//!
//! This crate provides the types shared by the generator, the storage
//! adapters, the shortener service and the HTTP gateway.

pub mod error;
pub mod mapping;
pub mod slug;
pub mod store;

pub use error::StoreError;
pub use mapping::Mapping;
pub use slug::Slug;
pub use store::KvStore;
