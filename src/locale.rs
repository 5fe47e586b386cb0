use crate::consts::REGION_SEPARATOR;
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// Reduces a region-qualified locale identifier to its base language.
///
/// Returns the portion of `tag` before the first `-`, or `tag` unchanged
/// when no region qualifier is present. Translation resources and
/// locale-keyed tables are keyed by base language only, so every lookup
/// site must pass through this before indexing.
pub fn normalize(tag: &str) -> &str {
    match tag.find(REGION_SEPARATOR) {
        Some(idx) => &tag[..idx],
        None => tag,
    }
}

/// A base-language locale identifier, e.g. `"ru"` or `"he"`.
/// Normalized on construction, so a stored tag never carries a region
/// qualifier: `LocaleTag::new("ru-RU")` and `LocaleTag::new("ru")` are equal.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Deref, Into, Serialize, Deserialize,
)]
#[serde(from = "String", into = "String")]
pub struct LocaleTag(String);

impl LocaleTag {
    /// Creates a tag from any locale identifier, collapsing the region part
    pub fn new(tag: &str) -> Self {
        Self(normalize(tag).to_owned())
    }

    /// Returns the normalized tag as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LocaleTag {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl From<String> for LocaleTag {
    fn from(tag: String) -> Self {
        // Reuse the allocation when there is nothing to strip
        match tag.find(REGION_SEPARATOR) {
            Some(idx) => Self(tag[..idx].to_owned()),
            None => Self(tag),
        }
    }
}

// Eq/Ord/Hash all delegate to the inner String, so str lookups agree
impl Borrow<str> for LocaleTag {
    fn borrow(&self) -> &str {
        &self.0
    }
}
