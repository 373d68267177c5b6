//! Route configuration for the courses REST API.
//!
//! This module contains the routing configuration that maps HTTP paths
//! to handlers.

pub mod course_routes;

pub use course_routes::create_routes;
