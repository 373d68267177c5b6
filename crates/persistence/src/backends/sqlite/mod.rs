//! SQLite backend implementation.
//!
//! This module provides a SQLite implementation of [`CourseStorage`]. It
//! supports both in-memory databases (great for testing) and file-based
//! databases (for development and small deployments).
//!
//! [`CourseStorage`]: crate::core::CourseStorage
//!
//! # Example
//!
//! ```no_run
//! use courses_persistence::backends::sqlite::SqliteBackend;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Create an in-memory database
//! let backend = SqliteBackend::in_memory()?;
//!
//! // Initialize the schema
//! backend.init_schema()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE courses (
//!     id INTEGER PRIMARY KEY AUTOINCREMENT,
//!     name TEXT NOT NULL
//! );
//! CREATE INDEX idx_courses_name ON courses(name);
//! ```

mod backend;
mod schema;
mod storage;

pub use backend::{SqliteBackend, SqliteBackendConfig};
pub use schema::SCHEMA_VERSION;
