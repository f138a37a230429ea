//! Report service

use sqlx::PgPool;

use crate::{
    db::repositories::{ReportRepository, UserRepository},
    error::{AppError, AppResult},
    handlers::reports::response::ReportDto,
    services::ReportMapper,
};

/// Report service for create/read/update/delete operations
pub struct ReportService;

impl ReportService {
    /// Create a new report
    pub async fn create(pool: &PgPool, payload: &ReportDto) -> AppResult<ReportDto> {
        tracing::debug!(?payload, "create report");

        let entity = ReportMapper::to_entity(payload);
        Self::require_user_exists(pool, entity.user_id).await?;

        let report = ReportRepository::create(pool, &entity).await?;
        Self::reload(pool, report.id).await
    }

    /// Get report by ID
    pub async fn find_one(pool: &PgPool, id: i64) -> AppResult<ReportDto> {
        let record = ReportRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Report not found".to_string()))?;

        Ok(ReportMapper::to_dto(&record))
    }

    /// Replace all fields of an existing report
    pub async fn update(pool: &PgPool, id: i64, payload: &ReportDto) -> AppResult<ReportDto> {
        tracing::debug!(id, "update report");
        Self::require_exists(pool, id).await?;

        let entity = ReportMapper::to_entity(payload);
        Self::require_user_exists(pool, entity.user_id).await?;

        ReportRepository::update(pool, id, &entity).await?;
        Self::reload(pool, id).await
    }

    /// Apply the provided fields to an existing report, leaving the rest
    /// unchanged
    pub async fn partial_update(pool: &PgPool, id: i64, payload: &ReportDto) -> AppResult<ReportDto> {
        tracing::debug!(id, "partially update report");
        Self::require_exists(pool, id).await?;

        let patch = ReportMapper::to_patch(payload);
        Self::require_user_exists(pool, patch.user_id).await?;

        ReportRepository::partial_update(pool, id, &patch).await?;
        Self::reload(pool, id).await
    }

    /// Delete report
    pub async fn delete(pool: &PgPool, id: i64) -> AppResult<()> {
        tracing::debug!(id, "delete report");
        ReportRepository::delete(pool, id).await
    }

    /// Updates address existing rows only; a stale id is a caller error,
    /// not a missing resource
    async fn require_exists(pool: &PgPool, id: i64) -> AppResult<()> {
        if ReportRepository::exists(pool, id).await? {
            Ok(())
        } else {
            Err(AppError::InvalidInput("Report not found".to_string()))
        }
    }

    /// A payload may reference its owner by id only; reject ids that do not
    /// resolve before touching the reports table
    async fn require_user_exists(pool: &PgPool, user_id: Option<i64>) -> AppResult<()> {
        let Some(user_id) = user_id else {
            return Ok(());
        };
        if UserRepository::find_by_id(pool, user_id).await?.is_none() {
            return Err(AppError::InvalidInput(
                "Referenced user does not exist".to_string(),
            ));
        }
        Ok(())
    }

    async fn reload(pool: &PgPool, id: i64) -> AppResult<ReportDto> {
        let record = ReportRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Report not found".to_string()))?;

        Ok(ReportMapper::to_dto(&record))
    }
}
