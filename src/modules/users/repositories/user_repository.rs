use sqlx::PgPool;
use uuid::Uuid;

use crate::core::{AppError, Result};
use crate::modules::users::models::User;

/// Repository for user account operations
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Register a new user with a freshly issued auth token
    pub async fn register(&self, username: &str) -> Result<User> {
        let auth_token = Uuid::new_v4().to_string();

        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO users (username, auth_token)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(username)
        .bind(&auth_token)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AppError::duplicate_name("Username already exists");
                }
            }
            AppError::Database(e)
        })?;

        Ok(User {
            id,
            username: username.to_string(),
            auth_token,
        })
    }

    /// Resolve an auth token to a user id
    pub async fn find_id_by_token(&self, token: &str) -> Result<Option<i32>> {
        let id = sqlx::query_scalar("SELECT id FROM users WHERE auth_token = $1")
            .bind(token)
            .fetch_optional(&self.pool)
            .await?;

        Ok(id)
    }
}
