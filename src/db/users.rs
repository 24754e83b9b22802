use sqlx::SqlitePool;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    /// Argon2 PHC hash string, never a plain-text password
    pub password_hash: String,
}

pub async fn find_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as("SELECT id, username, password_hash FROM users WHERE username = ?")
        .bind(username)
        .fetch_optional(pool)
        .await
}

/// Create or rotate the credentials of a user (startup admin seeding)
pub async fn upsert(
    pool: &SqlitePool,
    username: &str,
    password_hash: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO users (username, password_hash) VALUES (?, ?)
         ON CONFLICT(username) DO UPDATE SET password_hash = excluded.password_hash",
    )
    .bind(username)
    .bind(password_hash)
    .execute(pool)
    .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    #[tokio::test]
    async fn upsert_rotates_existing_hash() {
        let pool = test_pool().await;
        upsert(&pool, "admin", "hash-one").await.unwrap();
        upsert(&pool, "admin", "hash-two").await.unwrap();

        let user = find_by_username(&pool, "admin")
            .await
            .unwrap()
            .expect("user exists");
        assert_eq!(user.password_hash, "hash-two");
    }

    #[tokio::test]
    async fn unknown_username_is_none() {
        let pool = test_pool().await;
        assert!(find_by_username(&pool, "ghost").await.unwrap().is_none());
    }
}
