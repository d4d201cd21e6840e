//! # registrar-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** the storage adapter must implement
//!   (`StudentRepository` — insert, list, partial update, delete)
//! - Define the **driving port** as a use-case struct (`StudentService`)
//! - Bound every store call with a per-operation deadline (`Deadlines`)
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `registrar-domain` only (plus `tokio::time` for deadlines).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod deadline;
pub mod ports;
pub mod services;
