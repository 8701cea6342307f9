//! # worldstate-domain
//!
//! Pure domain model for the worldstate service.
//!
//! ## Responsibilities
//! - Define **Entities** (named bags of JSON attributes)
//! - Define the **World** (every entity, keyed by name)
//! - Own the write semantics: *replace* discards prior attributes, *merge*
//!   overwrites only the keys it is given
//! - Define the error type shared by ports and adapters
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod entity;
pub mod error;
pub mod world;
