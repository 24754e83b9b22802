use serde::Serialize;
use sqlx::SqlitePool;

/// `done` is stored as INTEGER 0/1 and decoded to bool
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Task {
    pub id: i64,
    pub employee_id: Option<i64>,
    pub task: String,
    pub done: bool,
}

pub async fn list(pool: &SqlitePool) -> Result<Vec<Task>, sqlx::Error> {
    sqlx::query_as("SELECT id, employee_id, task, done FROM tasks ORDER BY id")
        .fetch_all(pool)
        .await
}

/// Insert a task (not done) and return its surrogate id
pub async fn create(pool: &SqlitePool, employee_id: i64, task: &str) -> Result<i64, sqlx::Error> {
    let result = sqlx::query("INSERT INTO tasks (employee_id, task) VALUES (?, ?)")
        .bind(employee_id)
        .bind(task)
        .execute(pool)
        .await?;
    Ok(result.last_insert_rowid())
}

/// Delete a task; returns rows affected
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{employees, test_pool};

    #[tokio::test]
    async fn done_defaults_to_false_and_decodes_from_integer() {
        let pool = test_pool().await;
        let anna = employees::create(&pool, "Anna").await.unwrap();
        create(&pool, anna, "przygotować raport").await.unwrap();
        sqlx::query("INSERT INTO tasks (employee_id, task, done) VALUES (?, ?, 1)")
            .bind(anna)
            .bind("zamówić kawę")
            .execute(&pool)
            .await
            .unwrap();

        let tasks = list(&pool).await.unwrap();
        assert_eq!(tasks.len(), 2);
        assert!(!tasks[0].done);
        assert!(tasks[1].done);
    }

    #[tokio::test]
    async fn delete_reports_missing_id() {
        let pool = test_pool().await;
        let anna = employees::create(&pool, "Anna").await.unwrap();
        let id = create(&pool, anna, "inwentaryzacja").await.unwrap();
        assert_eq!(delete(&pool, id).await.unwrap(), 1);
        assert_eq!(delete(&pool, id).await.unwrap(), 0);
    }
}
