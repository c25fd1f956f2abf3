use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use super::access::{deny, ensure_same_driver, RecordAccess};
use crate::dto::{ApiResponse, RecordFilter};
use crate::models::{FuelingRecord, Identity};
use crate::policy::{can_delete, can_edit, can_view};
use crate::repositories::FuelingRepository;
use crate::schema::{validate_fueling, FuelingInput, ValidationContext};
use crate::utils::errors::{not_found_error, AppResult};

pub struct FuelingController {
    repository: FuelingRepository,
    access: RecordAccess,
}

impl FuelingController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: FuelingRepository::new(pool.clone()),
            access: RecordAccess::new(pool),
        }
    }

    pub async fn list(
        &self,
        actor: &Identity,
        filter: &RecordFilter,
    ) -> AppResult<Vec<FuelingRecord>> {
        let supervision = self.access.supervision(actor).await?;
        let scope = self.access.list_scope(actor, &supervision, filter)?;
        self.repository.list(&scope, filter).await
    }

    async fn load(&self, id: Uuid) -> AppResult<FuelingRecord> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Abastecimento", &id.to_string()))
    }

    pub async fn get(&self, actor: &Identity, id: Uuid) -> AppResult<FuelingRecord> {
        let record = self.load(id).await?;
        let supervision = self.access.supervision(actor).await?;
        if !can_view(actor, &supervision, &record) {
            return Err(deny(actor, "ver este abastecimento"));
        }
        Ok(record)
    }

    pub async fn create(
        &self,
        actor: &Identity,
        input: FuelingInput,
        ctx: &ValidationContext,
    ) -> AppResult<ApiResponse<FuelingRecord>> {
        let supervision = self.access.supervision(actor).await?;
        let driver_id = self
            .access
            .creation_target(actor, &supervision, input.driver_id)
            .await?;

        let valid = validate_fueling(&input, ctx)?;
        self.access.ensure_vehicle(valid.vehicle_id).await?;

        let record = self.repository.create(driver_id, &valid).await?;
        tracing::info!(record_id = %record.id, %driver_id, liters_diesel = %record.liters_diesel, "⛽ Abastecimento registrado");

        Ok(ApiResponse::success_with_message(
            record,
            "Abastecimento registrado com sucesso",
        ))
    }

    pub async fn update(
        &self,
        actor: &Identity,
        id: Uuid,
        input: FuelingInput,
        ctx: &ValidationContext,
    ) -> AppResult<ApiResponse<FuelingRecord>> {
        let current = self.load(id).await?;
        let supervision = self.access.supervision(actor).await?;
        if !can_edit(actor, &supervision, &current) {
            return Err(deny(actor, "editar este abastecimento"));
        }
        ensure_same_driver(current.driver_id, input.driver_id)?;

        let valid = validate_fueling(&input, ctx)?;
        if valid.vehicle_id != current.vehicle_id {
            self.access.ensure_vehicle(valid.vehicle_id).await?;
        }

        let record = self.repository.update(id, &valid).await?;
        Ok(ApiResponse::success_with_message(
            record,
            "Abastecimento atualizado com sucesso",
        ))
    }

    pub async fn delete(&self, actor: &Identity, id: Uuid, today: NaiveDate) -> AppResult<()> {
        let record = self.load(id).await?;
        let supervision = self.access.supervision(actor).await?;
        if !can_delete(actor, &supervision, &record, today, None) {
            return Err(deny(actor, "excluir este abastecimento"));
        }

        if !self.repository.delete(id).await? {
            return Err(not_found_error("Abastecimento", &id.to_string()));
        }
        tracing::info!(record_id = %id, actor = %actor.id, "🗑️ Abastecimento excluído");
        Ok(())
    }
}
