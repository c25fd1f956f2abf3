use sqlx::PgPool;
use uuid::Uuid;

use super::access::deny;
use crate::dto::ApiResponse;
use crate::models::{Identity, Vehicle};
use crate::policy::can_manage_fleet;
use crate::repositories::VehicleRepository;
use crate::schema::{validate_vehicle, VehicleInput};
use crate::utils::errors::{not_found_error, AppError, AppResult};

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    /// Lectura abierta a todos los roles (selector del formulario)
    pub async fn list(&self) -> AppResult<Vec<Vehicle>> {
        self.repository.list().await
    }

    pub async fn create(
        &self,
        actor: &Identity,
        input: VehicleInput,
    ) -> AppResult<ApiResponse<Vehicle>> {
        if !can_manage_fleet(actor) {
            return Err(deny(actor, "gerenciar veículos"));
        }
        let valid = validate_vehicle(&input)?;

        if self.repository.plate_exists(&valid.plate, None).await? {
            return Err(AppError::Conflict(format!(
                "A placa {} já está cadastrada",
                valid.plate
            )));
        }

        let vehicle = self.repository.create(&valid).await?;
        tracing::info!(vehicle_id = %vehicle.id, plate = %vehicle.plate, "🚌 Veículo cadastrado");

        Ok(ApiResponse::success_with_message(
            vehicle,
            "Veículo cadastrado com sucesso",
        ))
    }

    pub async fn update(
        &self,
        actor: &Identity,
        id: Uuid,
        input: VehicleInput,
    ) -> AppResult<ApiResponse<Vehicle>> {
        if !can_manage_fleet(actor) {
            return Err(deny(actor, "gerenciar veículos"));
        }
        let valid = validate_vehicle(&input)?;

        if self.repository.plate_exists(&valid.plate, Some(id)).await? {
            return Err(AppError::Conflict(format!(
                "A placa {} já está cadastrada",
                valid.plate
            )));
        }

        let vehicle = self
            .repository
            .update(id, &valid)
            .await?
            .ok_or_else(|| not_found_error("Veículo", &id.to_string()))?;

        Ok(ApiResponse::success_with_message(
            vehicle,
            "Veículo atualizado com sucesso",
        ))
    }

    /// Un vehículo con registros no se elimina; se marca inactivo
    pub async fn delete(&self, actor: &Identity, id: Uuid) -> AppResult<()> {
        if !can_manage_fleet(actor) {
            return Err(deny(actor, "gerenciar veículos"));
        }
        if self.repository.is_referenced(id).await? {
            return Err(AppError::Conflict(
                "Veículo possui registros vinculados; altere o status para inativo".to_string(),
            ));
        }
        if !self.repository.delete(id).await? {
            return Err(not_found_error("Veículo", &id.to_string()));
        }
        tracing::info!(vehicle_id = %id, "🗑️ Veículo removido");
        Ok(())
    }
}
