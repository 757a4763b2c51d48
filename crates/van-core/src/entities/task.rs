use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A how-to procedure attached to a system.
///
/// `system_id` and `linked_system_ids` are non-owning references: they may
/// point at systems that do not exist in the catalogue, and lookups degrade
/// to treating the raw id as a plain label.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub system_id: String,
    #[serde(default)]
    pub linked_system_ids: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub safety_warnings: Vec<String>,
}
