//! Employee repository
//!
//! All access to the `employees` table goes through here. Uniqueness
//! is enforced by the DB constraint and surfaced as a typed error, no
//! check-then-insert.

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

use crate::models::ValidEmployee;

/// Stored employee record
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub department: String,
    pub role: String,
    pub hire_date: String,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("email already exists")]
    DuplicateEmail,

    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Map a unique-constraint violation to [`DbError::DuplicateEmail`].
///
/// `email` carries the only UNIQUE constraint on the table, so any
/// unique violation here means a duplicate email.
fn classify_unique(err: sqlx::Error) -> DbError {
    if let sqlx::Error::Database(ref db_err) = err {
        if db_err.is_unique_violation() {
            return DbError::DuplicateEmail;
        }
    }
    DbError::Sqlx(err)
}

/// Employee repository
pub struct EmployeeRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> EmployeeRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List every employee, newest first.
    pub async fn list_all(&self) -> Result<Vec<Employee>, DbError> {
        let employees: Vec<Employee> = sqlx::query_as(
            r#"
            SELECT id, name, email, department, role, hire_date
            FROM employees
            ORDER BY id DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(employees)
    }

    /// List employees in one department, newest first.
    ///
    /// The match is exact; no trimming or case folding.
    pub async fn list_by_department(&self, department: &str) -> Result<Vec<Employee>, DbError> {
        let employees: Vec<Employee> = sqlx::query_as(
            r#"
            SELECT id, name, email, department, role, hire_date
            FROM employees
            WHERE department = ?
            ORDER BY id DESC
            "#,
        )
        .bind(department)
        .fetch_all(self.pool)
        .await?;

        Ok(employees)
    }

    /// Fetch a single employee by id.
    pub async fn get(&self, id: i64) -> Result<Option<Employee>, DbError> {
        let employee: Option<Employee> = sqlx::query_as(
            r#"
            SELECT id, name, email, department, role, hire_date
            FROM employees
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(employee)
    }

    /// Insert a new employee and return its generated id.
    pub async fn insert(&self, employee: &ValidEmployee) -> Result<i64, DbError> {
        let result = sqlx::query(
            r#"
            INSERT INTO employees (name, email, department, role, hire_date)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&employee.name)
        .bind(&employee.email)
        .bind(&employee.department)
        .bind(&employee.role)
        .bind(&employee.hire_date)
        .execute(self.pool)
        .await
        .map_err(classify_unique)?;

        Ok(result.last_insert_rowid())
    }

    /// Overwrite every field of an existing employee.
    ///
    /// Returns the number of rows touched: 0 means no such id. A
    /// missing id never trips the unique constraint because the UPDATE
    /// matches nothing.
    pub async fn update(&self, id: i64, employee: &ValidEmployee) -> Result<u64, DbError> {
        let result = sqlx::query(
            r#"
            UPDATE employees
            SET name = ?, email = ?, department = ?, role = ?, hire_date = ?
            WHERE id = ?
            "#,
        )
        .bind(&employee.name)
        .bind(&employee.email)
        .bind(&employee.department)
        .bind(&employee.role)
        .bind(&employee.hire_date)
        .bind(id)
        .execute(self.pool)
        .await
        .map_err(classify_unique)?;

        Ok(result.rows_affected())
    }

    /// Delete an employee by id, returning the number of rows removed.
    pub async fn delete(&self, id: i64) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{migrations, pool::create_pool_with_options};

    async fn test_pool() -> SqlitePool {
        let pool = create_pool_with_options("sqlite::memory:", 1)
            .await
            .expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations failed");
        pool
    }

    fn sample(email: &str) -> ValidEmployee {
        ValidEmployee {
            name: "Ada Lovelace".into(),
            email: email.into(),
            department: "Engineering".into(),
            role: "Analyst".into(),
            hire_date: "2024-01-15".into(),
        }
    }

    #[tokio::test]
    async fn insert_then_get_round_trips() {
        let pool = test_pool().await;
        let repo = EmployeeRepo::new(&pool);

        let id = repo.insert(&sample("ada@example.com")).await.unwrap();
        let employee = repo.get(id).await.unwrap().expect("employee missing");

        assert_eq!(employee.id, id);
        assert_eq!(employee.name, "Ada Lovelace");
        assert_eq!(employee.email, "ada@example.com");
        assert_eq!(employee.hire_date, "2024-01-15");
    }

    #[tokio::test]
    async fn get_missing_returns_none() {
        let pool = test_pool().await;
        let repo = EmployeeRepo::new(&pool);

        assert!(repo.get(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_all_orders_newest_first() {
        let pool = test_pool().await;
        let repo = EmployeeRepo::new(&pool);

        let first = repo.insert(&sample("first@example.com")).await.unwrap();
        let second = repo.insert(&sample("second@example.com")).await.unwrap();

        let employees = repo.list_all().await.unwrap();
        let ids: Vec<i64> = employees.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![second, first]);
    }

    #[tokio::test]
    async fn list_by_department_filters_exactly() {
        let pool = test_pool().await;
        let repo = EmployeeRepo::new(&pool);

        repo.insert(&sample("eng@example.com")).await.unwrap();
        let mut sales = sample("sales@example.com");
        sales.department = "Sales".into();
        let sales_id = repo.insert(&sales).await.unwrap();

        let employees = repo.list_by_department("Sales").await.unwrap();
        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].id, sales_id);

        // Exact match only
        assert!(repo.list_by_department("sales").await.unwrap().is_empty());
        assert!(repo.list_by_department("Marketing").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn duplicate_email_is_typed() {
        let pool = test_pool().await;
        let repo = EmployeeRepo::new(&pool);

        repo.insert(&sample("ada@example.com")).await.unwrap();
        let err = repo.insert(&sample("ada@example.com")).await.unwrap_err();
        assert!(matches!(err, DbError::DuplicateEmail));
    }

    #[tokio::test]
    async fn update_rewrites_all_fields() {
        let pool = test_pool().await;
        let repo = EmployeeRepo::new(&pool);

        let id = repo.insert(&sample("ada@example.com")).await.unwrap();

        let mut changed = sample("ada@new.example.com");
        changed.role = "Lead Analyst".into();
        let affected = repo.update(id, &changed).await.unwrap();
        assert_eq!(affected, 1);

        let employee = repo.get(id).await.unwrap().expect("employee missing");
        assert_eq!(employee.email, "ada@new.example.com");
        assert_eq!(employee.role, "Lead Analyst");
    }

    #[tokio::test]
    async fn update_missing_touches_no_rows() {
        let pool = test_pool().await;
        let repo = EmployeeRepo::new(&pool);

        let affected = repo.update(999, &sample("ghost@example.com")).await.unwrap();
        assert_eq!(affected, 0);
    }

    #[tokio::test]
    async fn update_missing_wins_over_duplicate_email() {
        let pool = test_pool().await;
        let repo = EmployeeRepo::new(&pool);

        repo.insert(&sample("taken@example.com")).await.unwrap();

        // The id doesn't exist, so the taken email is never checked.
        let affected = repo.update(999, &sample("taken@example.com")).await.unwrap();
        assert_eq!(affected, 0);
    }

    #[tokio::test]
    async fn update_keeping_own_email_is_allowed() {
        let pool = test_pool().await;
        let repo = EmployeeRepo::new(&pool);

        let id = repo.insert(&sample("ada@example.com")).await.unwrap();
        let affected = repo.update(id, &sample("ada@example.com")).await.unwrap();
        assert_eq!(affected, 1);
    }

    #[tokio::test]
    async fn update_stealing_email_is_typed() {
        let pool = test_pool().await;
        let repo = EmployeeRepo::new(&pool);

        repo.insert(&sample("taken@example.com")).await.unwrap();
        let id = repo.insert(&sample("mine@example.com")).await.unwrap();

        let err = repo.update(id, &sample("taken@example.com")).await.unwrap_err();
        assert!(matches!(err, DbError::DuplicateEmail));
    }

    #[tokio::test]
    async fn delete_removes_row_once() {
        let pool = test_pool().await;
        let repo = EmployeeRepo::new(&pool);

        let id = repo.insert(&sample("ada@example.com")).await.unwrap();

        assert_eq!(repo.delete(id).await.unwrap(), 1);
        assert!(repo.get(id).await.unwrap().is_none());
        assert_eq!(repo.delete(id).await.unwrap(), 0);
    }
}
