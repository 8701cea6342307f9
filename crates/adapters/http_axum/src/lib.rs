//! # worldstate-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON routes** for entities and the world
//!   (`/entity/{name}`, `/world`, `/clear`)
//! - Serve the static **landing page** at `/`
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into JSON responses
//!
//! ## Request bodies
//! Bodies are read as JSON whatever their `Content-Type`. A missing body,
//! invalid JSON, or a JSON value that is not an object is treated as `{}`,
//! so clients never get a 4xx for a malformed payload.
//!
//! The `Content-Type` header is deliberately not checked, unlike servers that
//! only decode bodies labelled `application/json`. A JSON object sent
//! as `text/plain` is stored as sent, while a form-encoded body
//! (`x=1&y=2`) is not JSON and therefore lands as `{}`. Clients must send
//! JSON text to have their attributes kept.
//!
//! Bodies larger than the configured limit (see [`router::build`]) are
//! answered with `413 Payload Too Large` and never reach the store.
//!
//! ## Dependency rule
//! Depends on `worldstate-app` (for port traits and services) and
//! `worldstate-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod extract;
pub mod router;
pub mod state;
