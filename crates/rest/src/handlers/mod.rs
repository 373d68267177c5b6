//! HTTP request handlers for the course endpoints.
//!
//! - [`list`] - List courses with filtering and ordering
//! - [`read`] - Read a course by id
//! - [`create`] - Create a course
//! - [`update`] - Fully update a course
//! - [`patch`] - Partially update a course
//! - [`delete`] - Delete a course
//! - [`health`] - Health, liveness and readiness endpoints
//! - [`fallback`] - Unknown paths and unsupported methods

pub mod create;
pub mod delete;
pub mod fallback;
pub mod health;
pub mod list;
pub mod patch;
pub mod read;
pub mod update;

// Re-export handlers for convenience
pub use create::create_handler;
pub use delete::delete_handler;
pub use fallback::{method_not_allowed_handler, not_found_handler};
pub use health::{health_handler, liveness_handler, readiness_handler};
pub use list::list_handler;
pub use patch::patch_handler;
pub use read::read_handler;
pub use update::update_handler;
