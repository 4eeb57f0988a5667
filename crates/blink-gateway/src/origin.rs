use axum::extract::FromRequestParts;
use axum::http::header::HOST;
use axum::http::request::Parts;
use axum::http::HeaderMap;

use crate::error::ApiError;
use crate::state::AppState;

const X_FORWARDED_PROTO: &str = "x-forwarded-proto";
const X_FORWARDED_HOST: &str = "x-forwarded-host";

/// Scheme and host the client used to reach the service.
///
/// Short URLs are built on top of this so they point back at whatever
/// address the caller used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOrigin {
    pub scheme: String,
    pub host: String,
}

impl RequestOrigin {
    /// Resolves the origin of a request.
    ///
    /// An absolute request URI wins; otherwise the scheme comes from
    /// `X-Forwarded-Proto` (or `default_scheme`) and the host from
    /// `X-Forwarded-Host` or `Host`.
    pub fn from_parts(parts: &Parts, default_scheme: &str) -> Option<Self> {
        let scheme = parts
            .uri
            .scheme_str()
            .map(str::to_string)
            .or_else(|| first_value(&parts.headers, X_FORWARDED_PROTO))
            .unwrap_or_else(|| default_scheme.to_string());

        let host = parts
            .uri
            .authority()
            .map(|authority| authority.as_str().to_string())
            .or_else(|| first_value(&parts.headers, X_FORWARDED_HOST))
            .or_else(|| first_value(&parts.headers, HOST.as_str()))?;

        Some(Self { scheme, host })
    }

    pub fn base_url(&self) -> String {
        format!("{}://{}", self.scheme, self.host)
    }
}

/// First entry of a possibly comma-separated header, trimmed.
fn first_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)?
        .to_str()
        .ok()?
        .split(',')
        .next()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

impl FromRequestParts<AppState> for RequestOrigin {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Self::from_parts(parts, state.default_scheme())
            .ok_or_else(|| ApiError::InvalidRequest("Missing Host header".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts(request: Request<()>) -> Parts {
        request.into_parts().0
    }

    #[test]
    fn host_header_with_default_scheme() {
        let parts = parts(
            Request::get("/add")
                .header("host", "bl.ink:8080")
                .body(())
                .unwrap(),
        );

        let origin = RequestOrigin::from_parts(&parts, "http").unwrap();
        assert_eq!(origin.base_url(), "http://bl.ink:8080");
    }

    #[test]
    fn forwarded_headers_override_host() {
        let parts = parts(
            Request::get("/add")
                .header("host", "10.0.0.5:8080")
                .header("x-forwarded-proto", "https")
                .header("x-forwarded-host", "bl.ink, proxy.internal")
                .body(())
                .unwrap(),
        );

        let origin = RequestOrigin::from_parts(&parts, "http").unwrap();
        assert_eq!(origin.base_url(), "https://bl.ink");
    }

    #[test]
    fn absolute_uri_wins() {
        let parts = parts(
            Request::get("https://bl.ink/add")
                .header("host", "other.example")
                .header("x-forwarded-proto", "http")
                .body(())
                .unwrap(),
        );

        let origin = RequestOrigin::from_parts(&parts, "http").unwrap();
        assert_eq!(origin.scheme, "https");
        assert_eq!(origin.host, "bl.ink");
    }

    #[test]
    fn no_host_at_all() {
        let parts = parts(Request::get("/add").body(()).unwrap());
        assert!(RequestOrigin::from_parts(&parts, "http").is_none());
    }
}
