//! # van-catalog
//!
//! Catalogue and image-manifest ingestion for Vanguide.
//!
//! The manual's content has been authored across several generations of
//! field names (`title` vs `name`, `warnings`/`safety` vs `safety_notes`,
//! task `safety_notes` vs `safety_warnings`). This crate is the one place
//! that knows about those: raw JSON documents are parsed, legacy fields are
//! reconciled into the canonical `van-core` model, validation runs, and an
//! immutable [`van_core::catalog::Catalog`] / image manifest comes out.
//!
//! Everything downstream (search, verification gate) sees only the
//! canonical shapes. Malformed records fail here, at load time, never at
//! query time.

pub mod error;
pub mod ingest;
pub mod load;

pub use error::CatalogError;
pub use ingest::{parse_catalog, parse_manifest};
pub use load::{load_catalog, load_manifest};
