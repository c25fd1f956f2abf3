//! Política de acceso por rol y propiedad de registros
//!
//! Decisiones puras sobre (actor, acción, registro). El backend de
//! almacenamiento aplica las mismas reglas como segunda barrera.

pub mod access_policy;
pub mod capabilities;
pub mod navigation;

pub use access_policy::*;
pub use capabilities::{capabilities, has_capability, Capability};
pub use navigation::{can_access_route, visible_nav_items, NavItem, NAV_ITEMS};
