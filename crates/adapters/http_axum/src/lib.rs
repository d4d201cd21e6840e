//! # registrar-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON API** for student records
//!   (`POST /students`, `GET /students`, `PUT /students/{id}`,
//!   `DELETE /students/{id}`) plus `GET /health`
//! - Decode request bodies and path identifiers, rejecting malformed input
//!   with `400` before any store access
//! - Map application results into HTTP responses, and application errors
//!   into `{"error": …}` payloads (`400` client input, `500` store failure)
//!
//! ## Dependency rule
//! Depends on `registrar-app` (for port traits and services) and
//! `registrar-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
