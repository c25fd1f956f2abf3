//! Tabla de capacidades por rol
//!
//! Toda decisión de acceso consulta esta tabla; agregar un rol o un permiso
//! es un cambio de datos aquí, no en cada punto de llamada.

use serde::Serialize;

use crate::models::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    ViewOwnRecords,
    ViewSupervisedRecords,
    ViewAllRecords,
    CreateForSupervised,
    CreateForAnyDriver,
    /// Excluir registros de períodos contables ya cerrados
    DeleteInClosedPeriod,
    ViewDrivers,
    ViewReports,
    ManageFleet,
    ManageUsers,
}

const DRIVER: &[Capability] = &[Capability::ViewOwnRecords, Capability::ViewReports];

const SUPERVISOR: &[Capability] = &[
    Capability::ViewOwnRecords,
    Capability::ViewSupervisedRecords,
    Capability::CreateForSupervised,
    Capability::DeleteInClosedPeriod,
    Capability::ViewDrivers,
    Capability::ViewReports,
];

const ADMIN: &[Capability] = &[
    Capability::ViewOwnRecords,
    Capability::ViewAllRecords,
    Capability::CreateForAnyDriver,
    Capability::DeleteInClosedPeriod,
    Capability::ViewDrivers,
    Capability::ViewReports,
    Capability::ManageFleet,
    Capability::ManageUsers,
];

pub fn capabilities(role: Role) -> &'static [Capability] {
    match role {
        Role::Driver => DRIVER,
        Role::Supervisor => SUPERVISOR,
        Role::Admin => ADMIN,
    }
}

pub fn has_capability(role: Role, capability: Capability) -> bool {
    capabilities(role).contains(&capability)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_role_sees_own_records() {
        for role in Role::ALL {
            assert!(has_capability(role, Capability::ViewOwnRecords), "{role}");
        }
    }

    #[test]
    fn test_fleet_management_is_admin_only() {
        assert!(!has_capability(Role::Driver, Capability::ManageFleet));
        assert!(!has_capability(Role::Supervisor, Capability::ManageFleet));
        assert!(has_capability(Role::Admin, Capability::ManageFleet));
    }
}
