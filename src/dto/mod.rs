//! DTOs de request/response de la API HTTP

pub mod api_response;
pub mod record_dto;
pub mod report_dto;

pub use api_response::ApiResponse;
pub use record_dto::{RecordFilter, RouteAccess, RouteQuery, SessionResponse};
pub use report_dto::{ExportQuery, ReportQuery};
