use sqlx::PgPool;

use crate::core::{AppError, Result};
use crate::modules::providers::models::{ProviderConfig, ProviderSummary};

/// Repository for provider configuration operations
#[derive(Clone)]
pub struct ProviderRepository {
    pool: PgPool,
}

impl ProviderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch the caller's active configuration, if any.
    ///
    /// Read fresh on every payment call; activation can change between
    /// calls, so no caching.
    pub async fn find_active(&self, user_id: i32) -> Result<Option<ProviderConfig>> {
        let config = sqlx::query_as::<_, ProviderConfig>(
            r#"
            SELECT id, user_id, name, provider_type, public_key, secret_key, token, is_active
            FROM provider_configs
            WHERE user_id = $1 AND is_active = TRUE
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(config)
    }

    /// List the caller's configurations
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<ProviderSummary>> {
        let configs = sqlx::query_as::<_, ProviderSummary>(
            r#"
            SELECT id, name, is_active
            FROM provider_configs
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(configs)
    }

    /// Store a new configuration (inactive until explicitly activated)
    pub async fn insert(
        &self,
        user_id: i32,
        name: &str,
        provider_type: &str,
        public_key: &str,
        secret_key: &str,
        token: &str,
    ) -> Result<i32> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO provider_configs (user_id, name, provider_type, public_key, secret_key, token)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(user_id)
        .bind(name)
        .bind(provider_type)
        .bind(public_key)
        .bind(secret_key)
        .bind(token)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AppError::duplicate_name(format!(
                        "A configuration named '{name}' already exists"
                    ));
                }
            }
            AppError::Database(e)
        })?;

        Ok(id)
    }

    /// Make `config_id` the caller's single active configuration.
    ///
    /// Deactivate-all and activate-one run in one transaction so a
    /// concurrent reader never sees two active rows for the user. The
    /// deactivation commits even when the target id does not belong to
    /// the caller: the user then has no active configuration and the
    /// call reports NotFound.
    pub async fn set_active(&self, user_id: i32, config_id: i32) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        // Lock the user's rows in id order so concurrent activations
        // serialize instead of deadlocking
        sqlx::query("SELECT id FROM provider_configs WHERE user_id = $1 ORDER BY id FOR UPDATE")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("UPDATE provider_configs SET is_active = FALSE WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        let activated =
            sqlx::query("UPDATE provider_configs SET is_active = TRUE WHERE id = $1 AND user_id = $2")
                .bind(config_id)
                .bind(user_id)
                .execute(&mut *tx)
                .await?;

        tx.commit().await?;

        if activated.rows_affected() == 0 {
            return Err(AppError::not_found(
                "Configuration not found or not owned by this user",
            ));
        }

        Ok(())
    }
}
