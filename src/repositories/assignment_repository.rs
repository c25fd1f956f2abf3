use sqlx::PgPool;
use uuid::Uuid;

use crate::models::SupervisorAssignment;
use crate::schema::AssignmentInput;
use crate::utils::errors::AppError;

pub struct AssignmentRepository {
    pool: PgPool,
}

impl AssignmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<SupervisorAssignment>, AppError> {
        let assignments = sqlx::query_as::<_, SupervisorAssignment>(
            "SELECT * FROM supervisor_assignments ORDER BY created_at",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(assignments)
    }

    /// Asignaciones donde el usuario es el supervisor
    pub async fn for_supervisor(
        &self,
        supervisor_id: Uuid,
    ) -> Result<Vec<SupervisorAssignment>, AppError> {
        let assignments = sqlx::query_as::<_, SupervisorAssignment>(
            "SELECT * FROM supervisor_assignments WHERE supervisor_id = $1 ORDER BY created_at",
        )
        .bind(supervisor_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(assignments)
    }

    pub async fn exists(&self, supervisor_id: Uuid, driver_id: Uuid) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM supervisor_assignments WHERE supervisor_id = $1 AND driver_id = $2)",
        )
        .bind(supervisor_id)
        .bind(driver_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn create(&self, input: &AssignmentInput) -> Result<SupervisorAssignment, AppError> {
        let assignment = sqlx::query_as::<_, SupervisorAssignment>(
            r#"
            INSERT INTO supervisor_assignments (id, supervisor_id, driver_id)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(input.supervisor_id)
        .bind(input.driver_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(assignment)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM supervisor_assignments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
