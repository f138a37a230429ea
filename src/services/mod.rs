//! Business logic services

pub mod mapper;
pub mod report_query_service;
pub mod report_service;

pub use mapper::ReportMapper;
pub use report_query_service::ReportQueryService;
pub use report_service::ReportService;
