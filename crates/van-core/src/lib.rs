//! # van-core
//!
//! Core types and error types for Vanguide.
//!
//! This crate provides the foundational types shared across all Vanguide crates:
//! - Entity structs for the manual catalogue (systems, tasks, required images)
//! - The validated, immutable [`catalog::Catalog`] container
//! - Verification status enums and the machine-readable block reasons
//! - Cross-cutting error types
//!
//! The catalogue lifecycle is load-once, read-many: values are validated at
//! construction and never mutated afterwards. Search and verification crates
//! borrow them; nothing in this crate performs I/O.

pub mod catalog;
pub mod entities;
pub mod enums;
pub mod errors;
