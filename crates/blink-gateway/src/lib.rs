//! HTTP front end of the Blink URL shortener.
//!
//! Routes:
//!
//! - `GET /` health check;
//! - `GET /{slug}` redirect to the stored URL;
//! - `POST /add` create a mapping, behind the bearer-token [`AuthGuard`].

pub mod app;
pub mod auth;
pub mod error;
pub mod handlers;
pub mod model;
pub mod origin;
pub mod state;

pub use app::App;
pub use auth::AuthGuard;
pub use state::AppState;
