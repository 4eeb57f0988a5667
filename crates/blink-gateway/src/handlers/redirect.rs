use axum::extract::{Path, State};
use axum::http::header::LOCATION;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use blink_core::Slug;
use tracing::debug;

use crate::error::{ApiError, Result};
use crate::state::AppState;

/// `GET /{slug}`: 302 to the stored URL, or a bare 404.
pub async fn redirect_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Response> {
    let slug = Slug::from(slug);

    let resolved = state.shortener().resolve(&slug).await?;
    let Some(target) = resolved.filter(|target| !target.is_empty()) else {
        debug!(slug = %slug, "no mapping for slug");
        return Ok(StatusCode::NOT_FOUND.into_response());
    };

    let location =
        HeaderValue::from_str(&target).map_err(|_| ApiError::InvalidTarget(target.clone()))?;

    debug!(slug = %slug, target = %target, "redirecting");
    Ok((StatusCode::FOUND, [(LOCATION, location)]).into_response())
}
