//! Entity structs for the Vanguide manual catalogue.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation. Legacy field-name reconciliation happens
//! in `van-catalog` at ingestion time; these are the canonical shapes only.

mod image;
mod system;
mod task;

pub use image::{ImageManifest, RequiredImage};
pub use system::System;
pub use task::Task;
