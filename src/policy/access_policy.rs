//! Política de acceso
//!
//! Funciones puras: reciben el actor, las asignaciones de supervisión y el
//! registro, y devuelven allow/deny. No leen estado global ni hacen I/O.

use std::collections::{BTreeSet, HashSet};

use chrono::{Datelike, NaiveDate};
use uuid::Uuid;

use super::capabilities::{has_capability, Capability};
use crate::models::{Identity, SupervisorAssignment};

/// Registro con dueño (motorista) y fecha
pub trait OwnedRecord {
    fn driver_id(&self) -> Uuid;
    fn date(&self) -> NaiveDate;
}

/// Pares (supervisor, motorista). Un solo salto: no hay cadenas de supervisión.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Supervision {
    pairs: HashSet<(Uuid, Uuid)>,
}

impl Supervision {
    pub fn new(pairs: impl IntoIterator<Item = (Uuid, Uuid)>) -> Self {
        Self {
            pairs: pairs.into_iter().collect(),
        }
    }

    pub fn from_assignments(assignments: &[SupervisorAssignment]) -> Self {
        Self::new(assignments.iter().map(|a| (a.supervisor_id, a.driver_id)))
    }

    pub fn supervises(&self, supervisor_id: Uuid, driver_id: Uuid) -> bool {
        self.pairs.contains(&(supervisor_id, driver_id))
    }

    /// Motoristas asignados al supervisor, en orden estable
    pub fn drivers_of(&self, supervisor_id: Uuid) -> Vec<Uuid> {
        self.pairs
            .iter()
            .filter(|(s, _)| *s == supervisor_id)
            .map(|(_, d)| *d)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// Período contable abierto; fuera de él los motoristas no pueden excluir registros
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportingPeriod {
    start: NaiveDate,
    end: NaiveDate,
}

impl ReportingPeriod {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// Mes calendario que contiene `date`
    pub fn calendar_month(date: NaiveDate) -> Self {
        let start = date.with_day(1).unwrap_or(date);
        let next_month = if date.month() == 12 {
            NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
        };
        let end = next_month.and_then(|d| d.pred_opt()).unwrap_or(date);
        Self { start, end }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Alcance de listado para el actor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordScope {
    All,
    /// Solo los motoristas indicados (incluye al propio actor)
    Drivers(Vec<Uuid>),
}

impl RecordScope {
    pub fn includes(&self, driver_id: Uuid) -> bool {
        match self {
            RecordScope::All => true,
            RecordScope::Drivers(ids) => ids.contains(&driver_id),
        }
    }
}

pub fn record_scope(actor: &Identity, supervision: &Supervision) -> RecordScope {
    if has_capability(actor.role, Capability::ViewAllRecords) {
        return RecordScope::All;
    }
    let mut ids = vec![actor.id];
    if has_capability(actor.role, Capability::ViewSupervisedRecords) {
        ids.extend(supervision.drivers_of(actor.id));
    }
    RecordScope::Drivers(ids)
}

fn can_view_driver(actor: &Identity, supervision: &Supervision, driver_id: Uuid) -> bool {
    let role = actor.role;
    if has_capability(role, Capability::ViewAllRecords) {
        return true;
    }
    if driver_id == actor.id && has_capability(role, Capability::ViewOwnRecords) {
        return true;
    }
    has_capability(role, Capability::ViewSupervisedRecords)
        && supervision.supervises(actor.id, driver_id)
}

pub fn can_view<R: OwnedRecord + ?Sized>(
    actor: &Identity,
    supervision: &Supervision,
    record: &R,
) -> bool {
    can_view_driver(actor, supervision, record.driver_id())
}

/// Crear un registro a nombre de `driver_id`
pub fn can_create(actor: &Identity, supervision: &Supervision, driver_id: Uuid) -> bool {
    let role = actor.role;
    if driver_id == actor.id {
        return true;
    }
    if has_capability(role, Capability::CreateForAnyDriver) {
        return true;
    }
    has_capability(role, Capability::CreateForSupervised)
        && supervision.supervises(actor.id, driver_id)
}

pub fn can_edit<R: OwnedRecord + ?Sized>(
    actor: &Identity,
    supervision: &Supervision,
    record: &R,
) -> bool {
    can_view(actor, supervision, record)
}

/// Igual que `can_view`, pero sin `DeleteInClosedPeriod` el registro debe caer
/// dentro del período abierto (por defecto, el mes calendario de `today`).
pub fn can_delete<R: OwnedRecord + ?Sized>(
    actor: &Identity,
    supervision: &Supervision,
    record: &R,
    today: NaiveDate,
    period: Option<ReportingPeriod>,
) -> bool {
    if !can_view(actor, supervision, record) {
        return false;
    }
    if has_capability(actor.role, Capability::DeleteInClosedPeriod) {
        return true;
    }
    let period = period.unwrap_or_else(|| ReportingPeriod::calendar_month(today));
    record.date() >= period.start()
}

/// Vehículos, postos y asignaciones
pub fn can_manage_fleet(actor: &Identity) -> bool {
    has_capability(actor.role, Capability::ManageFleet)
}

pub fn can_manage_users(actor: &Identity) -> bool {
    has_capability(actor.role, Capability::ManageUsers)
}

pub fn can_view_reports(actor: &Identity) -> bool {
    has_capability(actor.role, Capability::ViewReports)
}
