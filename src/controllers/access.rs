//! Chequeos de acceso compartidos por los controladores de registros

use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::RecordFilter;
use crate::models::{Identity, Role};
use crate::policy::{
    can_create, has_capability, record_scope, Capability, RecordScope, Supervision,
};
use crate::repositories::{AssignmentRepository, UserRepository, VehicleRepository};
use crate::schema::FieldErrors;
use crate::utils::errors::{forbidden_error, AppError, AppResult};

pub struct RecordAccess {
    assignments: AssignmentRepository,
    users: UserRepository,
    vehicles: VehicleRepository,
}

impl RecordAccess {
    pub fn new(pool: PgPool) -> Self {
        Self {
            assignments: AssignmentRepository::new(pool.clone()),
            users: UserRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    /// Asignaciones del actor; solo se cargan si el rol supervisa
    pub async fn supervision(&self, actor: &Identity) -> AppResult<Supervision> {
        if !has_capability(actor.role, Capability::ViewSupervisedRecords)
            || has_capability(actor.role, Capability::ViewAllRecords)
        {
            return Ok(Supervision::default());
        }
        let assignments = self.assignments.for_supervisor(actor.id).await?;
        Ok(Supervision::from_assignments(&assignments))
    }

    /// Alcance del listado; un filtro por motorista fuera del alcance se rechaza
    pub fn list_scope(
        &self,
        actor: &Identity,
        supervision: &Supervision,
        filter: &RecordFilter,
    ) -> AppResult<RecordScope> {
        let scope = record_scope(actor, supervision);
        if let Some(driver_id) = filter.driver_id {
            if !scope.includes(driver_id) {
                tracing::warn!(actor = %actor.id, %driver_id, "🚫 Listado fuera del alcance");
                return Err(forbidden_error("ver os registros deste motorista"));
            }
        }
        Ok(scope)
    }

    /// Motorista a nombre del cual se crea el registro
    pub async fn creation_target(
        &self,
        actor: &Identity,
        supervision: &Supervision,
        requested: Option<Uuid>,
    ) -> AppResult<Uuid> {
        let driver_id = requested.unwrap_or(actor.id);
        if !can_create(actor, supervision, driver_id) {
            tracing::warn!(actor = %actor.id, %driver_id, "🚫 Criação negada");
            return Err(forbidden_error("criar registros para este motorista"));
        }
        if driver_id != actor.id && self.users.role_of(driver_id).await? != Some(Role::Driver) {
            let mut errors = FieldErrors::new();
            errors.insert("driver_id", "Motorista não encontrado");
            return Err(errors.into());
        }
        Ok(driver_id)
    }

    /// El vehículo debe existir y estar activo
    pub async fn ensure_vehicle(&self, vehicle_id: Uuid) -> AppResult<()> {
        let message = match self.vehicles.find_by_id(vehicle_id).await? {
            Some(vehicle) if vehicle.is_active() => return Ok(()),
            Some(_) => "Veículo inativo",
            None => "Veículo inválido",
        };
        let mut errors = FieldErrors::new();
        errors.insert("vehicle_id", message);
        Err(errors.into())
    }
}

/// `driver_id` de un registro existente no cambia
pub fn ensure_same_driver(current: Uuid, requested: Option<Uuid>) -> Result<(), AppError> {
    match requested {
        Some(driver_id) if driver_id != current => {
            let mut errors = FieldErrors::new();
            errors.insert("driver_id", "O motorista do registro não pode ser alterado");
            Err(errors.into())
        }
        _ => Ok(()),
    }
}

pub fn deny(actor: &Identity, operation: &str) -> AppError {
    tracing::warn!(actor = %actor.id, role = %actor.role, "🚫 Acesso negado: {}", operation);
    forbidden_error(operation)
}
