//! Schema setup for the employee store

use sqlx::SqlitePool;

use super::DbError;

/// Create the employees table and its indexes if they are missing.
///
/// Safe to run on every startup.
pub async fn run(pool: &SqlitePool) -> Result<(), DbError> {
    tracing::info!("Running employee store migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            email TEXT UNIQUE NOT NULL,
            department TEXT NOT NULL,
            role TEXT NOT NULL,
            hire_date TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Department filter is the only non-key lookup
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_employees_department ON employees(department)",
    )
    .execute(pool)
    .await?;

    tracing::info!("Employee store ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::create_pool_with_options;

    #[tokio::test]
    async fn migrations_are_idempotent() {
        let pool = create_pool_with_options("sqlite::memory:", 1)
            .await
            .expect("pool creation failed");

        run(&pool).await.expect("first run failed");
        run(&pool).await.expect("second run failed");

        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM employees")
            .fetch_one(&pool)
            .await
            .expect("table missing");
        assert_eq!(count.0, 0);
    }
}
