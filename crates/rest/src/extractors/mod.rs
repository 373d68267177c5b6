//! Axum extractors for course requests.
//!
//! - [`CourseId`] - Parse the `{id}` path segment
//! - [`CourseBody`] - Extract a JSON object body and read course fields
//! - [`ListQuery`] - Extract list filtering and ordering parameters

mod course_body;
mod course_id;
mod list_query;

pub use course_body::{CourseBody, CourseBodyRejection};
pub use course_id::CourseId;
pub use list_query::ListQuery;
