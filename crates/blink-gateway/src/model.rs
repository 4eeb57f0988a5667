use blink_shortener::ShortenParams;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;

pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON in request body";
pub const MISSING_URL_MESSAGE: &str = "Missing URL";

/// Body of `POST /add`. Both fields accept `null`; empty strings count as
/// absent.
#[derive(Debug, Default, Deserialize)]
pub struct CreateMappingRequest {
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl CreateMappingRequest {
    /// Parses a raw request body.
    ///
    /// Syntactically broken JSON yields the fixed "invalid JSON" message.
    /// Any JSON value other than an object has no `url` field and is
    /// rejected as such; an object with wrongly typed fields reports what
    /// was wrong with it.
    pub fn from_slice(body: &[u8]) -> Result<Self, ApiError> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|_| ApiError::InvalidRequest(INVALID_JSON_MESSAGE.to_string()))?;

        if !value.is_object() {
            return Err(ApiError::InvalidRequest(MISSING_URL_MESSAGE.to_string()));
        }

        serde_json::from_value(value)
            .map_err(|err| ApiError::InvalidRequest(format!("Invalid request body: {err}")))
    }
}

impl From<CreateMappingRequest> for ShortenParams {
    fn from(request: CreateMappingRequest) -> Self {
        let params = ShortenParams::new(request.url.unwrap_or_default());
        match request.slug.filter(|slug| !slug.is_empty()) {
            Some(slug) => params.with_slug(slug),
            None => params,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateMappingResponse {
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(err: ApiError) -> String {
        match err {
            ApiError::InvalidRequest(message) => message,
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parses_url_and_slug() {
        let request =
            CreateMappingRequest::from_slice(br#"{"slug":"abc12","url":"https://foo.test"}"#)
                .unwrap();
        assert_eq!(request.slug.as_deref(), Some("abc12"));
        assert_eq!(request.url.as_deref(), Some("https://foo.test"));
    }

    #[test]
    fn ignores_unknown_fields() {
        let request =
            CreateMappingRequest::from_slice(br#"{"url":"https://foo.test","extra":1}"#).unwrap();
        assert!(request.slug.is_none());
    }

    #[test]
    fn null_fields_are_absent() {
        let request = CreateMappingRequest::from_slice(br#"{"slug":null,"url":null}"#).unwrap();
        assert!(request.slug.is_none());
        assert!(request.url.is_none());
    }

    #[test]
    fn malformed_json_reports_fixed_message() {
        let bodies: [&[u8]; 4] = [b"", b"{", b"not json", br#"{"url": }"#];
        for body in bodies {
            let err = CreateMappingRequest::from_slice(body).unwrap_err();
            assert_eq!(message(err), INVALID_JSON_MESSAGE);
        }
    }

    #[test]
    fn wrong_shape_reports_serde_message() {
        let err = CreateMappingRequest::from_slice(br#"{"url": 42}"#).unwrap_err();
        let message = message(err);
        assert!(message.starts_with("Invalid request body:"), "{message}");
    }

    #[test]
    fn non_object_json_has_no_url() {
        let bodies: [&[u8]; 5] = [
            br#"["abc12","https://evil.test"]"#,
            b"[]",
            b"42",
            br#""https://evil.test""#,
            b"null",
        ];
        for body in bodies {
            let err = CreateMappingRequest::from_slice(body).unwrap_err();
            assert_eq!(message(err), MISSING_URL_MESSAGE);
        }
    }

    #[test]
    fn empty_slug_becomes_none() {
        let request = CreateMappingRequest {
            slug: Some(String::new()),
            url: Some("https://foo.test".to_string()),
        };
        let params = ShortenParams::from(request);
        assert!(params.slug.is_none());
        assert_eq!(params.target, "https://foo.test");
    }
}
