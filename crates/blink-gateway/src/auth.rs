use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use tracing::warn;

use crate::error::{ApiError, Result};

/// Gate for write requests: a single shared secret, compared verbatim.
///
/// The expected header value is `Bearer <secret>`; anything else,
/// including a missing header or different casing of `Bearer`, is rejected.
#[derive(Clone)]
pub struct AuthGuard {
    expected: Arc<str>,
}

impl AuthGuard {
    pub fn new(secret: impl AsRef<str>) -> Self {
        Self {
            expected: Arc::from(format!("Bearer {}", secret.as_ref())),
        }
    }

    pub fn authorize(&self, headers: &HeaderMap) -> Result<()> {
        let provided = headers.get(AUTHORIZATION).map(|value| value.as_bytes());

        match provided {
            Some(value) if value == self.expected.as_bytes() => Ok(()),
            Some(_) => {
                warn!("rejected request with mismatching authorization header");
                Err(ApiError::Unauthorized)
            }
            None => {
                warn!("rejected request without authorization header");
                Err(ApiError::Unauthorized)
            }
        }
    }
}

impl std::fmt::Debug for AuthGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthGuard").finish_non_exhaustive()
    }
}

/// Middleware that short-circuits with 401 unless [`AuthGuard`] accepts the
/// request. The request body is not read on rejection.
pub async fn require_bearer(
    State(guard): State<AuthGuard>,
    request: Request,
    next: Next,
) -> Result<Response> {
    guard.authorize(request.headers())?;
    Ok(next.run(request).await)
}
