//! # worldstate-adapter-storage-memory
//!
//! In-memory persistence adapter.
//!
//! ## Responsibilities
//! - Implement the [`WorldRepository`](worldstate_app::ports::WorldRepository)
//!   port defined in `worldstate-app`
//! - Hold the world for the lifetime of the process; nothing survives a restart
//!
//! ## Dependency rule
//! Depends on `worldstate-app` (for port traits) and `worldstate-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod world_repo;

pub use error::StorageError;
pub use world_repo::InMemoryWorldRepository;
