use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::auth::require_bearer;
use crate::handlers::{create_mapping_handler, health_handler, redirect_handler};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        let guard = state.auth_guard().clone();

        Router::new()
            .route("/", get(health_handler))
            .route(
                "/add",
                post(create_mapping_handler)
                    .route_layer(middleware::from_fn_with_state(guard, require_bearer)),
            )
            .route("/{slug}", get(redirect_handler))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
