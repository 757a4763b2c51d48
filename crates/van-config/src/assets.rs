//! Asset root for the filesystem existence probe.

use serde::{Deserialize, Serialize};

fn default_root() -> String {
    "assets".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AssetsConfig {
    /// Directory image paths are resolved against.
    #[serde(default = "default_root")]
    pub root: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
        }
    }
}
