use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt::Display;

/// A short identifier used as store key and as the path of a short URL.
///
/// Slugs are not validated: generated ones come from a fixed alphabet and
/// caller-supplied ones are accepted as-is.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(SmolStr);

impl Slug {
    pub fn new(slug: impl AsRef<str>) -> Self {
        Self(SmolStr::new(slug))
    }

    /// Returns the slug as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Builds the full short URL under the given base URL.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self)
    }
}

impl std::fmt::Debug for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Slug").field(&self.0).finish()
    }
}

impl Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Slug {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Slug {
    fn from(value: String) -> Self {
        Self(SmolStr::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_as_str_agree() {
        let slug = Slug::new("abc12");
        assert_eq!(slug.to_string(), "abc12");
        assert_eq!(slug.as_str(), "abc12");
        assert_eq!(slug.len(), 5);
    }

    #[test]
    fn accepts_any_characters() {
        let slug = Slug::from("with space/and?query");
        assert_eq!(slug.as_str(), "with space/and?query");
    }

    #[test]
    fn to_url_joins_with_single_slash() {
        let slug = Slug::new("abc12");
        assert_eq!(slug.to_url("https://bl.ink"), "https://bl.ink/abc12");
        assert_eq!(slug.to_url("https://bl.ink/"), "https://bl.ink/abc12");
    }

    #[test]
    fn serializes_as_plain_string() {
        let slug = Slug::new("Xy9Zq");
        assert_eq!(serde_json::to_string(&slug).unwrap(), "\"Xy9Zq\"");

        let back: Slug = serde_json::from_str("\"Xy9Zq\"").unwrap();
        assert_eq!(back, slug);
    }
}
