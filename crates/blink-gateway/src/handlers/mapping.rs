use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use blink_shortener::ShortenParams;
use tracing::{debug, info};

use crate::error::Result;
use crate::model::{CreateMappingRequest, CreateMappingResponse};
use crate::origin::RequestOrigin;
use crate::state::AppState;

/// `POST /add`: stores a mapping and answers with its full short URL.
///
/// Runs behind [`require_bearer`](crate::auth::require_bearer).
pub async fn create_mapping_handler(
    State(state): State<AppState>,
    origin: RequestOrigin,
    body: Bytes,
) -> Result<Json<CreateMappingResponse>> {
    debug!(body_len = body.len(), "received create-mapping request");

    let request = CreateMappingRequest::from_slice(&body)?;
    debug!(slug = ?request.slug, url = ?request.url, "parsed create-mapping request");

    let mapping = state
        .shortener()
        .shorten(ShortenParams::from(request))
        .await?;

    let url = mapping.slug.to_url(&origin.base_url());
    info!(slug = %mapping.slug, target = %mapping.target, short_url = %url, "created mapping");

    Ok(Json(CreateMappingResponse { url }))
}
