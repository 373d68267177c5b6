//! CourseStorage implementation for SQLite.

use async_trait::async_trait;
use rusqlite::{Connection, OptionalExtension, Row, ToSql, params};

use crate::core::CourseStorage;
use crate::error::{BackendError, ResourceError, StorageError, StorageResult};
use crate::types::{Course, CourseFilter, CoursePatch, NewCourse, OrderField, SortDirection};

use super::SqliteBackend;

fn internal_error(message: String) -> StorageError {
    StorageError::Backend(BackendError::Internal {
        backend_name: "sqlite".to_string(),
        message,
        source: None,
    })
}

fn row_to_course(row: &Row<'_>) -> rusqlite::Result<Course> {
    Ok(Course {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

fn select_course(conn: &Connection, id: i64) -> StorageResult<Option<Course>> {
    conn.query_row(
        "SELECT id, name FROM courses WHERE id = ?1",
        params![id],
        row_to_course,
    )
    .optional()
    .map_err(|e| internal_error(format!("Failed to read course: {}", e)))
}

/// Builds the ORDER BY clause. `id` is always the final key so that the
/// listing order is total.
fn order_clause(filter: &CourseFilter) -> String {
    let mut keys: Vec<String> = filter
        .ordering
        .iter()
        .map(|o| {
            let column = match o.field {
                OrderField::Id => "id",
                OrderField::Name => "name",
            };
            let direction = match o.direction {
                SortDirection::Ascending => "ASC",
                SortDirection::Descending => "DESC",
            };
            format!("{} {}", column, direction)
        })
        .collect();

    if !filter.ordering.iter().any(|o| o.field == OrderField::Id) {
        keys.push("id ASC".to_string());
    }

    format!(" ORDER BY {}", keys.join(", "))
}

impl SqliteBackend {
    /// Writes `name` to an existing course inside a transaction.
    fn write_name(&self, id: i64, name: Option<&str>) -> StorageResult<Course> {
        let mut conn = self.get_connection()?;
        let tx = conn
            .transaction()
            .map_err(|e| internal_error(format!("Failed to begin transaction: {}", e)))?;

        let current = select_course(&tx, id)?
            .ok_or(StorageError::Resource(ResourceError::NotFound { id }))?;

        let updated = match name {
            Some(name) => {
                tx.execute(
                    "UPDATE courses SET name = ?1 WHERE id = ?2",
                    params![name, id],
                )
                .map_err(|e| internal_error(format!("Failed to update course: {}", e)))?;
                Course::new(id, name)
            }
            None => current,
        };

        tx.commit()
            .map_err(|e| internal_error(format!("Failed to commit update: {}", e)))?;

        Ok(updated)
    }
}

#[async_trait]
impl CourseStorage for SqliteBackend {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    async fn create(&self, course: NewCourse) -> StorageResult<Course> {
        course.validate()?;

        let conn = self.get_connection()?;
        conn.execute(
            "INSERT INTO courses (name) VALUES (?1)",
            params![course.name],
        )
        .map_err(|e| internal_error(format!("Failed to insert course: {}", e)))?;

        let id = conn.last_insert_rowid();
        tracing::debug!(id, "Course inserted");

        Ok(Course::new(id, course.name))
    }

    async fn read(&self, id: i64) -> StorageResult<Option<Course>> {
        let conn = self.get_connection()?;
        select_course(&conn, id)
    }

    async fn list(&self, filter: &CourseFilter) -> StorageResult<Vec<Course>> {
        let conn = self.get_connection()?;

        let mut clauses: Vec<String> = Vec::new();
        let mut values: Vec<&dyn ToSql> = Vec::new();

        if let Some(id) = &filter.id {
            values.push(id);
            clauses.push(format!("id = ?{}", values.len()));
        }
        if let Some(name) = &filter.name {
            values.push(name);
            clauses.push(format!("name = ?{}", values.len()));
        }

        let mut sql = "SELECT id, name FROM courses".to_string();
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(&order_clause(filter));

        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| internal_error(format!("Failed to prepare list query: {}", e)))?;

        let courses = stmt
            .query_map(values.as_slice(), row_to_course)
            .map_err(|e| internal_error(format!("Failed to list courses: {}", e)))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| internal_error(format!("Failed to read course row: {}", e)))?;

        Ok(courses)
    }

    async fn update(&self, id: i64, patch: CoursePatch) -> StorageResult<Course> {
        patch.validate()?;
        self.write_name(id, patch.name.as_deref())
    }

    async fn replace(&self, id: i64, course: NewCourse) -> StorageResult<Course> {
        course.validate()?;
        self.write_name(id, Some(&course.name))
    }

    async fn delete(&self, id: i64) -> StorageResult<()> {
        let conn = self.get_connection()?;

        let removed = conn
            .execute("DELETE FROM courses WHERE id = ?1", params![id])
            .map_err(|e| internal_error(format!("Failed to delete course: {}", e)))?;

        if removed == 0 {
            return Err(StorageError::Resource(ResourceError::NotFound { id }));
        }

        Ok(())
    }

    async fn count(&self) -> StorageResult<u64> {
        let conn = self.get_connection()?;

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM courses", [], |row| row.get(0))
            .map_err(|e| internal_error(format!("Failed to count courses: {}", e)))?;

        Ok(count as u64)
    }

    async fn health_check(&self) -> Result<(), BackendError> {
        self.ping()
    }
}
