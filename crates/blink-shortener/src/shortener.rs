use crate::error::Result;
use async_trait::async_trait;
use blink_core::{Mapping, Slug};

/// Parameters for creating a mapping.
#[derive(Debug, Clone, Default)]
pub struct ShortenParams {
    /// The URL the short link redirects to.
    pub target: String,
    /// A caller-chosen slug. Used as-is and may overwrite an existing
    /// mapping; `None` asks the service to generate an unused one.
    pub slug: Option<Slug>,
}

impl ShortenParams {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            slug: None,
        }
    }

    pub fn with_slug(mut self, slug: impl Into<Slug>) -> Self {
        self.slug = Some(slug.into());
        self
    }
}

#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Stores a mapping and returns it.
    async fn shorten(&self, params: ShortenParams) -> Result<Mapping>;

    /// Looks up the target URL of a slug.
    /// Returns `None` if the slug was never written.
    async fn resolve(&self, slug: &Slug) -> Result<Option<String>>;
}
