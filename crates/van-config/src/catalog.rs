//! Catalogue document locations.

use serde::{Deserialize, Serialize};

fn default_systems_path() -> String {
    "content/systems.json".to_string()
}

fn default_tasks_path() -> String {
    "content/tasks.json".to_string()
}

fn default_manifest_path() -> String {
    "content/required-images.json".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Systems document.
    #[serde(default = "default_systems_path")]
    pub systems_path: String,

    /// Tasks document.
    #[serde(default = "default_tasks_path")]
    pub tasks_path: String,

    /// Required-images manifest document.
    #[serde(default = "default_manifest_path")]
    pub manifest_path: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            systems_path: default_systems_path(),
            tasks_path: default_tasks_path(),
            manifest_path: default_manifest_path(),
        }
    }
}
