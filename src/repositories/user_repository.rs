use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Role, UserProfile};
use crate::utils::errors::AppError;

/// Rol almacenado y alta de perfiles; el middleware y el registro
/// dependen de esto y no de la tabla directamente
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn stored_role(&self, user_id: Uuid) -> Result<Option<Role>, AppError>;
    async fn register(&self, user_id: Uuid, full_name: &str, role: Role) -> Result<(), AppError>;
}

/// `profiles` y `user_roles`
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Rol almacenado; `None` si el usuario no existe
    pub async fn role_of(&self, user_id: Uuid) -> Result<Option<Role>, AppError> {
        let role = sqlx::query_scalar::<_, Role>("SELECT role FROM user_roles WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(role)
    }

    /// Alta de perfil y rol en una transacción.
    ///
    /// Repetir el alta actualiza el nombre; el rol ya guardado no cambia.
    pub async fn create_profile(
        &self,
        user_id: Uuid,
        full_name: &str,
        role: Role,
    ) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO profiles (user_id, full_name)
            VALUES ($1, $2)
            ON CONFLICT (user_id)
            DO UPDATE SET full_name = EXCLUDED.full_name, updated_at = NOW()
            "#,
        )
        .bind(user_id)
        .bind(full_name)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            "INSERT INTO user_roles (user_id, role) VALUES ($1, $2) ON CONFLICT (user_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(role)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM profiles")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Perfiles de motoristas; `None` lista todos
    pub async fn list_drivers(&self, only: Option<&[Uuid]>) -> Result<Vec<UserProfile>, AppError> {
        let profiles = sqlx::query_as::<_, UserProfile>(
            r#"
            SELECT p.user_id, p.full_name, r.role, p.work_location, p.created_at
            FROM profiles p
            JOIN user_roles r ON r.user_id = p.user_id
            WHERE r.role = 'driver'
              AND ($1::uuid[] IS NULL OR p.user_id = ANY($1))
            ORDER BY p.full_name
            "#,
        )
        .bind(only)
        .fetch_all(&self.pool)
        .await?;

        Ok(profiles)
    }
}

#[async_trait]
impl UserDirectory for UserRepository {
    async fn stored_role(&self, user_id: Uuid) -> Result<Option<Role>, AppError> {
        self.role_of(user_id).await
    }

    async fn register(&self, user_id: Uuid, full_name: &str, role: Role) -> Result<(), AppError> {
        self.create_profile(user_id, full_name, role).await
    }
}
