//! # registrar-adapter-storage-mongodb
//!
//! `MongoDB` persistence adapter using the official [mongodb](https://docs.rs/mongodb) driver.
//!
//! ## Responsibilities
//! - Establish the **store binding**: one client and one collection handle,
//!   verified reachable at startup and shared by every request
//! - Implement the repository port trait defined in `registrar-app::ports::storage`
//! - Map between domain types and BSON documents, honouring the configured
//!   [`Schema`](registrar_domain::schema::Schema)
//!
//! ## Dependency rule
//! Depends on `registrar-app` (for port traits) and `registrar-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod document;
pub mod error;
pub mod pool;
pub mod student_repo;

pub use error::StorageError;
pub use pool::{Config, Database};
pub use student_repo::MongoStudentRepository;
