use std::sync::Arc;

use blink_shortener::Shortener;

use crate::auth::AuthGuard;

pub const DEFAULT_SCHEME: &str = "http";

#[derive(Clone)]
pub struct AppState {
    shortener: Arc<dyn Shortener>,
    auth_guard: AuthGuard,
    default_scheme: Arc<str>,
}

impl AppState {
    pub fn new(shortener: Arc<dyn Shortener>, auth_guard: AuthGuard) -> Self {
        Self {
            shortener,
            auth_guard,
            default_scheme: Arc::from(DEFAULT_SCHEME),
        }
    }

    /// Scheme used for short URLs when the request carries none
    /// (no absolute URI, no `X-Forwarded-Proto`).
    pub fn with_default_scheme(mut self, scheme: impl AsRef<str>) -> Self {
        self.default_scheme = Arc::from(scheme.as_ref());
        self
    }

    pub fn shortener(&self) -> &dyn Shortener {
        self.shortener.as_ref()
    }

    pub fn auth_guard(&self) -> &AuthGuard {
        &self.auth_guard
    }

    pub fn default_scheme(&self) -> &str {
        &self.default_scheme
    }
}
