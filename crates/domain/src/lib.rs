//! # registrar-domain
//!
//! Pure domain model for the registrar student record service.
//!
//! ## Responsibilities
//! - Foundational types: the store-native identifier and error conventions
//! - Define the **Student** record and its create/update payloads
//! - Define the **Schema** that names the configurable text attribute
//!   (`email` or `grade`)
//! - Contain all invariant enforcement that does not need IO
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod schema;
pub mod student;
