//! Common error types used across the workspace.

/// Top-level error for world operations.
///
/// Clients never see a domain failure: unknown entities read as empty and
/// malformed input is coerced to an empty mapping. The only thing that can go
/// wrong is the backing store itself.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// The storage adapter failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}
