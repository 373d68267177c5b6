//! The course record and its write models.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Maximum number of characters allowed in a course name.
pub const MAX_NAME_LENGTH: usize = 256;

/// A persisted course.
///
/// The `id` is assigned by the storage backend when the course is created and
/// never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Storage-assigned identifier.
    pub id: i64,
    /// Display name of the course.
    pub name: String,
}

impl Course {
    /// Creates a course value with the given id and name.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// The fields needed to create (or fully replace) a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCourse {
    /// Display name of the course.
    pub name: String,
}

impl NewCourse {
    /// Creates a new course payload.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Checks every field against the course constraints.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name(&self.name)
    }
}

/// A partial update. Fields left as `None` keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoursePatch {
    /// New display name, if it should change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl CoursePatch {
    /// Creates an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name to change.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns true if the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }

    /// Checks the supplied fields against the course constraints.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.name {
            Some(name) => validate_name(name),
            None => Ok(()),
        }
    }

    /// Applies the patch on top of an existing course.
    pub fn apply_to(&self, course: &Course) -> Course {
        Course {
            id: course.id,
            name: self.name.clone().unwrap_or_else(|| course.name.clone()),
        }
    }
}

/// Validates a course name.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::Blank {
            field: "name".to_string(),
        });
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LENGTH,
        });
    }
    Ok(())
}
