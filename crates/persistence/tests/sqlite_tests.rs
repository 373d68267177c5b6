//! SQLite backend integration tests.
//!
//! These tests verify the SQLite backend implementation against the actual API.

use std::collections::HashSet;

use courses_persistence::backends::sqlite::SqliteBackend;
use courses_persistence::core::CourseStorage;
use courses_persistence::error::{ResourceError, StorageError, ValidationError};
use courses_persistence::types::{CourseFilter, CoursePatch, NewCourse, OrderField, Ordering};

fn create_backend() -> SqliteBackend {
    let backend = SqliteBackend::in_memory().expect("Failed to create SQLite backend");
    backend.init_schema().expect("Failed to initialize schema");
    backend
}

async fn seed(backend: &SqliteBackend, names: &[&str]) -> Vec<i64> {
    let mut ids = Vec::new();
    for name in names {
        let course = backend
            .create(NewCourse::new(*name))
            .await
            .expect("Failed to seed course");
        ids.push(course.id);
    }
    ids
}

// ============================================================================
// Create Tests
// ============================================================================

#[tokio::test]
async fn test_create_assigns_id() {
    let backend = create_backend();

    let created = backend.create(NewCourse::new("Python")).await.unwrap();
    assert!(created.id > 0);
    assert_eq!(created.name, "Python");
}

#[tokio::test]
async fn test_create_assigns_distinct_ids() {
    let backend = create_backend();

    let ids = seed(&backend, &["Python", "Go", "Javascript"]).await;
    let unique: HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), 3);
}

#[tokio::test]
async fn test_create_increments_count() {
    let backend = create_backend();
    seed(&backend, &["Python"]).await;
    let before = backend.count().await.unwrap();

    backend.create(NewCourse::new("HTML")).await.unwrap();

    assert_eq!(backend.count().await.unwrap(), before + 1);
}

#[tokio::test]
async fn test_create_blank_name_fails() {
    let backend = create_backend();

    let result = backend.create(NewCourse::new("")).await;
    assert!(matches!(
        result,
        Err(StorageError::Validation(ValidationError::Blank { .. }))
    ));
    assert_eq!(backend.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_duplicate_names_allowed() {
    let backend = create_backend();

    seed(&backend, &["Go", "Go"]).await;
    assert_eq!(backend.count().await.unwrap(), 2);
}

// ============================================================================
// Read Tests
// ============================================================================

#[tokio::test]
async fn test_read_existing() {
    let backend = create_backend();
    let ids = seed(&backend, &["Python"]).await;

    let course = backend.read(ids[0]).await.unwrap().expect("course exists");
    assert_eq!(course.id, ids[0]);
    assert_eq!(course.name, "Python");
}

#[tokio::test]
async fn test_read_missing_returns_none() {
    let backend = create_backend();

    assert!(backend.read(999).await.unwrap().is_none());
    assert!(!backend.exists(999).await.unwrap());
}

// ============================================================================
// List Tests
// ============================================================================

#[tokio::test]
async fn test_list_all() {
    let backend = create_backend();
    let ids = seed(&backend, &["Python", "Go", "Javascript"]).await;

    let courses = backend.list(&CourseFilter::new()).await.unwrap();
    let listed: Vec<i64> = courses.iter().map(|c| c.id).collect();
    assert_eq!(listed, ids);
}

#[tokio::test]
async fn test_list_empty() {
    let backend = create_backend();

    assert!(backend.list(&CourseFilter::new()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_filter_by_id() {
    let backend = create_backend();
    let ids = seed(&backend, &["A", "B", "C"]).await;

    let courses = backend
        .list(&CourseFilter::new().with_id(ids[1]))
        .await
        .unwrap();
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].id, ids[1]);
}

#[tokio::test]
async fn test_list_filter_by_unknown_id() {
    let backend = create_backend();
    seed(&backend, &["A"]).await;

    let courses = backend.list(&CourseFilter::new().with_id(12345)).await.unwrap();
    assert!(courses.is_empty());
}

#[tokio::test]
async fn test_list_filter_by_name_is_exact() {
    let backend = create_backend();
    seed(&backend, &["First course", "Second course", "first course"]).await;

    let courses = backend
        .list(&CourseFilter::new().with_name("First course"))
        .await
        .unwrap();
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].name, "First course");

    let partial = backend
        .list(&CourseFilter::new().with_name("First"))
        .await
        .unwrap();
    assert!(partial.is_empty());
}

#[tokio::test]
async fn test_list_filters_combine() {
    let backend = create_backend();
    let ids = seed(&backend, &["Go", "Go"]).await;

    let matching = backend
        .list(&CourseFilter::new().with_id(ids[1]).with_name("Go"))
        .await
        .unwrap();
    assert_eq!(matching.len(), 1);

    let disjoint = backend
        .list(&CourseFilter::new().with_id(ids[1]).with_name("Rust"))
        .await
        .unwrap();
    assert!(disjoint.is_empty());
}

#[tokio::test]
async fn test_list_ordering_by_name() {
    let backend = create_backend();
    seed(&backend, &["Python", "Go", "Javascript"]).await;

    let asc = backend
        .list(&CourseFilter::new().order_by(Ordering::asc(OrderField::Name)))
        .await
        .unwrap();
    let names: Vec<&str> = asc.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Go", "Javascript", "Python"]);

    let desc = backend
        .list(&CourseFilter::new().order_by(Ordering::desc(OrderField::Name)))
        .await
        .unwrap();
    let names: Vec<&str> = desc.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Python", "Javascript", "Go"]);
}

#[tokio::test]
async fn test_list_ordering_by_id_desc() {
    let backend = create_backend();
    let mut ids = seed(&backend, &["A", "B", "C"]).await;

    let courses = backend
        .list(&CourseFilter::new().order_by(Ordering::desc(OrderField::Id)))
        .await
        .unwrap();
    ids.reverse();
    assert_eq!(courses.iter().map(|c| c.id).collect::<Vec<_>>(), ids);
}

#[tokio::test]
async fn test_list_ordering_ties_broken_by_id() {
    let backend = create_backend();
    let ids = seed(&backend, &["Go", "Go", "Ada"]).await;

    let courses = backend
        .list(&CourseFilter::new().order_by(Ordering::asc(OrderField::Name)))
        .await
        .unwrap();
    assert_eq!(
        courses.iter().map(|c| c.id).collect::<Vec<_>>(),
        vec![ids[2], ids[0], ids[1]]
    );
}

// ============================================================================
// Update Tests
// ============================================================================

#[tokio::test]
async fn test_update_name() {
    let backend = create_backend();
    let ids = seed(&backend, &["Old"]).await;

    let updated = backend
        .update(ids[0], CoursePatch::new().with_name("New Course"))
        .await
        .unwrap();
    assert_eq!(updated.id, ids[0]);
    assert_eq!(updated.name, "New Course");

    let read = backend.read(ids[0]).await.unwrap().unwrap();
    assert_eq!(read.name, "New Course");
}

#[tokio::test]
async fn test_empty_patch_returns_current() {
    let backend = create_backend();
    let ids = seed(&backend, &["Same"]).await;

    let updated = backend.update(ids[0], CoursePatch::new()).await.unwrap();
    assert_eq!(updated.name, "Same");
}

#[tokio::test]
async fn test_update_missing_fails() {
    let backend = create_backend();

    let result = backend
        .update(77, CoursePatch::new().with_name("Nope"))
        .await;
    assert!(matches!(
        result,
        Err(StorageError::Resource(ResourceError::NotFound { id: 77 }))
    ));
}

#[tokio::test]
async fn test_update_invalid_name_leaves_course_unchanged() {
    let backend = create_backend();
    let ids = seed(&backend, &["Keep"]).await;

    let result = backend
        .update(ids[0], CoursePatch::new().with_name("  "))
        .await;
    assert!(matches!(result, Err(StorageError::Validation(_))));

    let read = backend.read(ids[0]).await.unwrap().unwrap();
    assert_eq!(read.name, "Keep");
}

#[tokio::test]
async fn test_replace() {
    let backend = create_backend();
    let ids = seed(&backend, &["Old"]).await;

    let replaced = backend
        .replace(ids[0], NewCourse::new("Replaced"))
        .await
        .unwrap();
    assert_eq!(replaced.id, ids[0]);
    assert_eq!(replaced.name, "Replaced");
}

#[tokio::test]
async fn test_replace_missing_fails() {
    let backend = create_backend();

    let result = backend.replace(5, NewCourse::new("X")).await;
    assert!(matches!(
        result,
        Err(StorageError::Resource(ResourceError::NotFound { .. }))
    ));
}

// ============================================================================
// Delete Tests
// ============================================================================

#[tokio::test]
async fn test_delete() {
    let backend = create_backend();
    let ids = seed(&backend, &["Python", "Go"]).await;

    backend.delete(ids[0]).await.unwrap();

    assert!(backend.read(ids[0]).await.unwrap().is_none());
    assert_eq!(backend.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_delete_missing_fails() {
    let backend = create_backend();

    let result = backend.delete(1).await;
    assert!(matches!(
        result,
        Err(StorageError::Resource(ResourceError::NotFound { id: 1 }))
    ));
}

#[tokio::test]
async fn test_ids_not_reused_after_delete() {
    let backend = create_backend();
    let ids = seed(&backend, &["A", "B"]).await;

    backend.delete(ids[1]).await.unwrap();
    let next = backend.create(NewCourse::new("C")).await.unwrap();

    assert!(next.id > ids[1]);
}

// ============================================================================
// Backend Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let backend = create_backend();

    assert!(backend.health_check().await.is_ok());
    assert_eq!(backend.backend_name(), "sqlite");
}

#[tokio::test]
async fn test_file_database_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("courses.db");

    let id = {
        let backend = SqliteBackend::open(&path).unwrap();
        backend.init_schema().unwrap();
        backend.create(NewCourse::new("Durable")).await.unwrap().id
    };

    let reopened = SqliteBackend::open(&path).unwrap();
    reopened.init_schema().unwrap();
    let course = reopened.read(id).await.unwrap().unwrap();
    assert_eq!(course.name, "Durable");
}
