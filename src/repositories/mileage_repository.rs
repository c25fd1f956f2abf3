use sqlx::PgPool;
use uuid::Uuid;

use super::scope_ids;
use crate::dto::RecordFilter;
use crate::models::MileageRecord;
use crate::policy::RecordScope;
use crate::schema::ValidMileage;
use crate::utils::errors::AppError;

const COLUMNS: &str = r#"
    id, driver_id, vehicle_id, date, km_start, km_end,
    COALESCE(km_total, km_end - km_start) AS km_total,
    observations, created_at, updated_at
"#;

pub struct MileageRepository {
    pool: PgPool,
}

impl MileageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Registros dentro del alcance del actor, más recientes primero
    pub async fn list(
        &self,
        scope: &RecordScope,
        filter: &RecordFilter,
    ) -> Result<Vec<MileageRecord>, AppError> {
        let sql = format!(
            r#"
            SELECT {COLUMNS} FROM kilometer_records
            WHERE ($1::uuid[] IS NULL OR driver_id = ANY($1))
              AND ($2::uuid IS NULL OR driver_id = $2)
              AND ($3::uuid IS NULL OR vehicle_id = $3)
              AND ($4::date IS NULL OR date >= $4)
              AND ($5::date IS NULL OR date <= $5)
            ORDER BY date DESC, created_at DESC
            "#
        );

        let records = sqlx::query_as::<_, MileageRecord>(&sql)
            .bind(scope_ids(scope))
            .bind(filter.driver_id)
            .bind(filter.vehicle_id)
            .bind(filter.from)
            .bind(filter.to)
            .fetch_all(&self.pool)
            .await?;

        Ok(records)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<MileageRecord>, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM kilometer_records WHERE id = $1");
        let record = sqlx::query_as::<_, MileageRecord>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(record)
    }

    pub async fn create(
        &self,
        driver_id: Uuid,
        input: &ValidMileage,
    ) -> Result<MileageRecord, AppError> {
        let sql = format!(
            r#"
            INSERT INTO kilometer_records
                (id, driver_id, vehicle_id, date, km_start, km_end, km_total, observations)
            VALUES ($1, $2, $3, $4, $5, $6, $6 - $5, $7)
            RETURNING {COLUMNS}
            "#
        );

        let record = sqlx::query_as::<_, MileageRecord>(&sql)
            .bind(Uuid::new_v4())
            .bind(driver_id)
            .bind(input.vehicle_id)
            .bind(input.date)
            .bind(input.reading.km_start())
            .bind(input.reading.km_end())
            .bind(&input.observations)
            .fetch_one(&self.pool)
            .await?;

        Ok(record)
    }

    /// Reemplaza los campos editables; `km_total` se recalcula en la misma sentencia
    pub async fn update(&self, id: Uuid, input: &ValidMileage) -> Result<MileageRecord, AppError> {
        let sql = format!(
            r#"
            UPDATE kilometer_records
            SET vehicle_id = $2, date = $3, km_start = $4, km_end = $5,
                km_total = $5 - $4, observations = $6, updated_at = NOW()
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        );

        let record = sqlx::query_as::<_, MileageRecord>(&sql)
            .bind(id)
            .bind(input.vehicle_id)
            .bind(input.date)
            .bind(input.reading.km_start())
            .bind(input.reading.km_end())
            .bind(&input.observations)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Registro de quilometragem não encontrado".to_string()))?;

        Ok(record)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM kilometer_records WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
