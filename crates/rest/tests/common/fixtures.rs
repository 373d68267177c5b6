//! Test fixtures for REST API testing.
//!
//! [`CourseFactory`] persists courses straight through storage, so tests can
//! arrange state without going through the HTTP layer.

use std::sync::atomic::{AtomicUsize, Ordering};

use courses_persistence::core::CourseStorage;
use courses_persistence::types::{Course, NewCourse};

/// Builds and persists courses.
///
/// Unnamed courses get sequential names (`Course 1`, `Course 2`, ...).
///
/// # Example
///
/// ```rust,ignore
/// let factory = CourseFactory::new(&*backend);
/// let python = factory.create_named("Python").await;
/// let three = factory.create_batch(3).await;
/// ```
pub struct CourseFactory<'a, S: CourseStorage> {
    storage: &'a S,
    sequence: AtomicUsize,
}

impl<'a, S: CourseStorage> CourseFactory<'a, S> {
    /// Creates a factory writing to `storage`.
    pub fn new(storage: &'a S) -> Self {
        Self {
            storage,
            sequence: AtomicUsize::new(0),
        }
    }

    fn next_name(&self) -> String {
        let n = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        format!("Course {}", n)
    }

    /// Persists one course with a generated name.
    pub async fn create(&self) -> Course {
        let name = self.next_name();
        self.create_named(&name).await
    }

    /// Persists one course with the given name.
    pub async fn create_named(&self, name: &str) -> Course {
        self.storage
            .create(NewCourse::new(name))
            .await
            .expect("Failed to seed course")
    }

    /// Persists `quantity` courses with generated names.
    pub async fn create_batch(&self, quantity: usize) -> Vec<Course> {
        let mut courses = Vec::with_capacity(quantity);
        for _ in 0..quantity {
            courses.push(self.create().await);
        }
        courses
    }

    /// Persists one course per name, in order.
    pub async fn create_each(&self, names: &[&str]) -> Vec<Course> {
        let mut courses = Vec::with_capacity(names.len());
        for name in names {
            courses.push(self.create_named(name).await);
        }
        courses
    }
}
