//! Report query service
//!
//! Executes criteria-driven read queries: the criteria are compiled into a
//! composite predicate, handed to the repository, and the resulting rows
//! are mapped to transport objects. All operations are read-only and safe
//! to retry.

use sqlx::PgPool;

use crate::{
    criteria::ReportCriteria,
    db::predicate::{Predicate, Sort},
    db::repositories::ReportRepository,
    error::AppResult,
    handlers::reports::request::PageRequest,
    handlers::reports::response::ReportDto,
    services::ReportMapper,
};

/// Service executing filtered report queries
pub struct ReportQueryService;

impl ReportQueryService {
    /// Return all reports matching the criteria, in storage order
    pub async fn find_by_criteria(
        pool: &PgPool,
        criteria: &ReportCriteria,
        sort: Sort,
    ) -> AppResult<Vec<ReportDto>> {
        tracing::debug!(?criteria, "find by criteria");

        let predicate = Predicate::from_criteria(criteria);
        let records = ReportRepository::find_all(pool, &predicate, sort).await?;

        Ok(records.iter().map(ReportMapper::to_dto).collect())
    }

    /// Return one page of reports matching the criteria, along with the
    /// total match count
    pub async fn find_by_criteria_paged(
        pool: &PgPool,
        criteria: &ReportCriteria,
        sort: Sort,
        page: PageRequest,
    ) -> AppResult<(Vec<ReportDto>, i64)> {
        tracing::debug!(?criteria, page = page.number, size = page.size, "find by criteria, paged");

        let predicate = Predicate::from_criteria(criteria);
        let records =
            ReportRepository::find_page(pool, &predicate, sort, page.offset(), page.size).await?;
        let total = ReportRepository::count(pool, &predicate).await?;

        Ok((records.iter().map(ReportMapper::to_dto).collect(), total))
    }

    /// Count reports matching the criteria without materializing rows
    pub async fn count_by_criteria(pool: &PgPool, criteria: &ReportCriteria) -> AppResult<i64> {
        tracing::debug!(?criteria, "count by criteria");

        let predicate = Predicate::from_criteria(criteria);
        ReportRepository::count(pool, &predicate).await
    }
}
