//! Tabla de navegación
//!
//! Orden canónico declarado; el filtrado por rol nunca reordena.

use serde::Serialize;

use crate::models::Role;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub roles: &'static [Role],
}

impl NavItem {
    pub fn allows(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

const ALL_ROLES: &[Role] = &[Role::Driver, Role::Supervisor, Role::Admin];
const SUPERVISION_ROLES: &[Role] = &[Role::Supervisor, Role::Admin];
const ADMIN_ONLY: &[Role] = &[Role::Admin];

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Dashboard", href: "/dashboard", roles: ALL_ROLES },
    NavItem { label: "Quilometragem", href: "/kilometers", roles: ALL_ROLES },
    NavItem { label: "Abastecimento", href: "/fueling", roles: ALL_ROLES },
    NavItem { label: "Relatórios", href: "/reports", roles: ALL_ROLES },
    NavItem { label: "Motoristas", href: "/drivers", roles: SUPERVISION_ROLES },
    NavItem { label: "Veículos", href: "/vehicles", roles: ADMIN_ONLY },
    NavItem { label: "Usuários", href: "/users", roles: ADMIN_ONLY },
    NavItem { label: "Configurações", href: "/settings", roles: ADMIN_ONLY },
];

pub fn visible_nav_items(role: Role) -> Vec<&'static NavItem> {
    NAV_ITEMS.iter().filter(|item| item.allows(role)).collect()
}

/// Guardia de navegación: una ruta anidada (`/kilometers/new`) hereda los
/// roles de su entrada declarada. Rutas fuera de la tabla se deniegan.
pub fn can_access_route(role: Role, path: &str) -> bool {
    NAV_ITEMS
        .iter()
        .find(|item| path == item.href || path.starts_with(&format!("{}/", item.href)))
        .is_some_and(|item| item.allows(role))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hrefs(role: Role) -> Vec<&'static str> {
        visible_nav_items(role).iter().map(|i| i.href).collect()
    }

    #[test]
    fn test_driver_items_in_declared_order() {
        assert_eq!(
            hrefs(Role::Driver),
            vec!["/dashboard", "/kilometers", "/fueling", "/reports"]
        );
    }

    #[test]
    fn test_visibility_is_nested() {
        let driver = hrefs(Role::Driver);
        let supervisor = hrefs(Role::Supervisor);
        let admin = hrefs(Role::Admin);

        assert!(driver.iter().all(|h| supervisor.contains(h)));
        assert!(supervisor.iter().all(|h| admin.contains(h)));
        assert_eq!(admin.len(), NAV_ITEMS.len());
    }

    #[test]
    fn test_no_item_outside_its_roles() {
        for role in Role::ALL {
            for item in visible_nav_items(role) {
                assert!(item.roles.contains(&role));
            }
        }
    }

    #[test]
    fn test_route_guard() {
        assert!(can_access_route(Role::Driver, "/kilometers/new"));
        assert!(!can_access_route(Role::Driver, "/vehicles"));
        assert!(!can_access_route(Role::Supervisor, "/users"));
        assert!(can_access_route(Role::Supervisor, "/drivers"));
        assert!(!can_access_route(Role::Admin, "/unknown"));
        assert!(!can_access_route(Role::Driver, "/kilometersx"));
    }
}
