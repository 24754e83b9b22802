use serde::Serialize;
use sqlx::SqlitePool;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Employee {
    pub id: i64,
    pub name: String,
}

pub async fn list(pool: &SqlitePool) -> Result<Vec<Employee>, sqlx::Error> {
    sqlx::query_as("SELECT id, name FROM employees ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn find(pool: &SqlitePool, id: i64) -> Result<Option<Employee>, sqlx::Error> {
    sqlx::query_as("SELECT id, name FROM employees WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Insert a new employee and return its surrogate id
pub async fn create(pool: &SqlitePool, name: &str) -> Result<i64, sqlx::Error> {
    let result = sqlx::query("INSERT INTO employees (name) VALUES (?)")
        .bind(name)
        .execute(pool)
        .await?;
    Ok(result.last_insert_rowid())
}

/// Rename an employee; returns the number of rows affected so a missing id
/// is distinguishable from a successful update
pub async fn update(pool: &SqlitePool, id: i64, name: &str) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("UPDATE employees SET name = ? WHERE id = ?")
        .bind(name)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// Delete an employee; returns rows affected. Does not cascade: surveys and
/// tasks referencing the employee stay behind.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM employees WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    #[tokio::test]
    async fn create_then_find_returns_same_name() {
        let pool = test_pool().await;
        let id = create(&pool, "Anna Kowalska").await.unwrap();
        let employee = find(&pool, id).await.unwrap().expect("employee exists");
        assert_eq!(employee.name, "Anna Kowalska");
    }

    #[tokio::test]
    async fn find_missing_id_is_none_not_error() {
        let pool = test_pool().await;
        assert!(find(&pool, 42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_on_empty_store_is_empty() {
        let pool = test_pool().await;
        assert!(list(&pool).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_then_find_is_none() {
        let pool = test_pool().await;
        let id = create(&pool, "Jan").await.unwrap();
        assert_eq!(delete(&pool, id).await.unwrap(), 1);
        assert!(find(&pool, id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_and_delete_report_zero_rows_for_missing_id() {
        let pool = test_pool().await;
        assert_eq!(update(&pool, 9, "x").await.unwrap(), 0);
        assert_eq!(delete(&pool, 9).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn update_rewrites_name() {
        let pool = test_pool().await;
        let id = create(&pool, "Jan").await.unwrap();
        assert_eq!(update(&pool, id, "Jan Nowak").await.unwrap(), 1);
        assert_eq!(find(&pool, id).await.unwrap().unwrap().name, "Jan Nowak");
    }

    #[tokio::test]
    async fn concurrent_creates_get_distinct_ids() {
        let pool = test_pool().await;
        let (a, b) = tokio::join!(create(&pool, "Anna"), create(&pool, "Jan"));
        let (a, b) = (a.unwrap(), b.unwrap());
        assert_ne!(a, b);
        assert_eq!(list(&pool).await.unwrap().len(), 2);
    }
}
