use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A local image a feature must provide before it can be verified.
///
/// `path` is an opaque key: the core never interprets it beyond equality
/// and handing it to the existence probe.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RequiredImage {
    pub path: String,
    pub description: String,
}

/// Declarative manifest of required images, keyed by feature id.
///
/// Per-feature order matters: the first entry is the hero image, shown
/// preferentially in detail views. A feature absent from the manifest has
/// declared no images, which is a valid (but unverifiable) state.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(transparent)]
pub struct ImageManifest {
    entries: BTreeMap<String, Vec<RequiredImage>>,
}

impl ImageManifest {
    #[must_use]
    pub const fn new(entries: BTreeMap<String, Vec<RequiredImage>>) -> Self {
        Self { entries }
    }

    /// Required images for a feature, in declaration order.
    ///
    /// An unknown feature id yields the empty slice, not an error.
    #[must_use]
    pub fn required_for(&self, feature_id: &str) -> &[RequiredImage] {
        self.entries.get(feature_id).map_or(&[], Vec::as_slice)
    }

    /// The feature's hero image: the first declared entry.
    #[must_use]
    pub fn hero_image(&self, feature_id: &str) -> Option<&RequiredImage> {
        self.required_for(feature_id).first()
    }

    /// Iterate over every feature id with declared images.
    pub fn feature_ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, Vec<RequiredImage>)> for ImageManifest {
    fn from_iter<I: IntoIterator<Item = (String, Vec<RequiredImage>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
