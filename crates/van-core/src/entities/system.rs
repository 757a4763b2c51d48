use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::DeclaredStatus;

/// A vehicle system (heating, power, water, safety, beds, media, comfort,
/// exterior) presented as a category tile in the manual.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct System {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    /// Emoji tile icon, when the catalogue provides one.
    #[serde(default)]
    pub icon: Option<String>,
    /// Alternative names boosting search discoverability.
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub safety_notes: Vec<String>,
    /// Curator-declared verification badge. Only honored once the
    /// image-requirement gate confirms every required image exists.
    #[serde(default)]
    pub declared_status: Option<DeclaredStatus>,
}
