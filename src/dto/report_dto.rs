use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

use crate::models::report::ExportFormat;

// Query de /api/reports/monthly; sin año/mes se usa el mes actual
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

impl ReportQuery {
    pub fn resolve(&self, today: NaiveDate) -> (i32, u32) {
        (
            self.year.unwrap_or_else(|| today.year()),
            self.month.unwrap_or_else(|| today.month()),
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportQuery {
    pub format: ExportFormat,
    pub year: Option<i32>,
    pub month: Option<u32>,
}

impl ExportQuery {
    pub fn period(&self) -> ReportQuery {
        ReportQuery {
            year: self.year,
            month: self.month,
        }
    }
}
