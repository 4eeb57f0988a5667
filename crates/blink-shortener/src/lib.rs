//! URL shortener service implementation.
//!
//! [`ShortenerService`] combines a [`KvStore`](blink_core::KvStore) with a
//! [`Generator`](blink_generator::Generator) to create and resolve
//! mappings. The HTTP gateway talks to it through the [`Shortener`] trait.

pub mod error;
pub mod service;
pub mod shortener;

pub use error::{ShortenerError, StoreOperation};
pub use service::ShortenerService;
pub use shortener::{ShortenParams, Shortener};
