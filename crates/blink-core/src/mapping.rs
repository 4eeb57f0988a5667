use crate::slug::Slug;
use serde::{Deserialize, Serialize};

/// The association between a slug and the URL it redirects to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mapping {
    pub slug: Slug,
    /// The URL the slug redirects to, stored verbatim.
    pub target: String,
}

impl Mapping {
    pub fn new(slug: Slug, target: impl Into<String>) -> Self {
        Self {
            slug,
            target: target.into(),
        }
    }
}
