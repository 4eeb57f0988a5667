use crate::error::{Result, ShortenerError, StoreOperation};
use crate::shortener::{ShortenParams, Shortener};
use async_trait::async_trait;
use blink_core::{KvStore, Mapping, Slug};
use blink_generator::Generator;
use std::sync::Arc;
use tracing::{debug, info, trace};

/// A concrete implementation of the [`Shortener`] trait.
///
/// Generated slugs are checked against the store before use and a new one
/// is drawn on every collision, without any bound on the number of
/// attempts. The check and the write are separate store calls, so two
/// concurrent writers can still claim the same generated slug; with the
/// default generator's key space this is rare enough to accept.
///
/// Caller-supplied slugs are written without any existence check.
#[derive(Debug)]
pub struct ShortenerService<S, G> {
    store: Arc<S>,
    generator: Arc<G>,
}

impl<S, G> Clone for ShortenerService<S, G> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            generator: Arc::clone(&self.generator),
        }
    }
}

impl<S: KvStore, G: Generator> ShortenerService<S, G> {
    pub fn new(store: S, generator: G) -> Self {
        Self {
            store: Arc::new(store),
            generator: Arc::new(generator),
        }
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Draws slugs until one is not present in the store.
    async fn unused_slug(&self) -> Result<Slug> {
        loop {
            let candidate: Slug = self.generator.generate().into();
            trace!(slug = %candidate, "Generated slug candidate");

            let existing = self
                .store
                .get(candidate.as_str())
                .await
                .map_err(ShortenerError::storage(StoreOperation::Get))?;

            match existing {
                None => return Ok(candidate),
                Some(_) => debug!(slug = %candidate, "Generated slug already taken, retrying"),
            }
        }
    }
}

#[async_trait]
impl<S: KvStore, G: Generator> Shortener for ShortenerService<S, G> {
    async fn shorten(&self, params: ShortenParams) -> Result<Mapping> {
        if params.target.is_empty() {
            return Err(ShortenerError::InvalidRequest("Missing URL".to_string()));
        }

        let slug = match params.slug.filter(|slug| !slug.is_empty()) {
            Some(slug) => slug,
            None => self.unused_slug().await?,
        };

        self.store
            .put(slug.as_str(), &params.target)
            .await
            .map_err(ShortenerError::storage(StoreOperation::Put))?;

        info!(slug = %slug, target = %params.target, "Stored mapping");
        Ok(Mapping::new(slug, params.target))
    }

    async fn resolve(&self, slug: &Slug) -> Result<Option<String>> {
        let target = self
            .store
            .get(slug.as_str())
            .await
            .map_err(ShortenerError::storage(StoreOperation::Get))?;

        match &target {
            Some(url) => debug!(slug = %slug, url = %url, "Resolved slug"),
            None => trace!(slug = %slug, "Slug not found"),
        }

        Ok(target)
    }
}
