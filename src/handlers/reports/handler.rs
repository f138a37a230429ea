//! Report handler implementations

use std::collections::HashMap;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
};
use validator::Validate;

use crate::{
    criteria::ReportCriteria,
    error::{AppError, AppResult},
    services::{ReportQueryService, ReportService},
    state::AppState,
};

use super::{request::ReportListParams, response::ReportDto};

/// Header carrying the criteria match count for list responses
fn total_count_header() -> HeaderName {
    HeaderName::from_static("x-total-count")
}

/// List reports matching the given criteria, optionally paginated
pub async fn list_reports(
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
) -> AppResult<(HeaderMap, Json<Vec<ReportDto>>)> {
    let params = ReportListParams::from_query(&query)?;

    let (reports, total) = match params.page {
        Some(page) => {
            ReportQueryService::find_by_criteria_paged(
                state.db(),
                &params.criteria,
                params.sort,
                page,
            )
            .await?
        }
        None => {
            let reports =
                ReportQueryService::find_by_criteria(state.db(), &params.criteria, params.sort)
                    .await?;
            let total = reports.len() as i64;
            (reports, total)
        }
    };

    let mut headers = HeaderMap::new();
    headers.insert(total_count_header(), HeaderValue::from(total));

    Ok((headers, Json(reports)))
}

/// Count reports matching the given criteria
pub async fn count_reports(
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
) -> AppResult<Json<i64>> {
    let criteria = ReportCriteria::from_params(&query)?;
    let count = ReportQueryService::count_by_criteria(state.db(), &criteria).await?;
    Ok(Json(count))
}

/// Create a new report
pub async fn create_report(
    State(state): State<AppState>,
    Json(payload): Json<ReportDto>,
) -> AppResult<(StatusCode, Json<ReportDto>)> {
    payload.validate()?;

    if payload.id.is_some() {
        return Err(AppError::InvalidInput(
            "A new report cannot already have an id".to_string(),
        ));
    }

    let report = ReportService::create(state.db(), &payload).await?;

    Ok((StatusCode::CREATED, Json(report)))
}

/// Get a specific report
pub async fn get_report(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ReportDto>> {
    let report = ReportService::find_one(state.db(), id).await?;
    Ok(Json(report))
}

/// Replace an existing report
pub async fn update_report(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ReportDto>,
) -> AppResult<Json<ReportDto>> {
    payload.validate()?;
    check_payload_id(id, &payload)?;

    let report = ReportService::update(state.db(), id, &payload).await?;

    Ok(Json(report))
}

/// Partially update an existing report; absent fields are left unchanged
pub async fn patch_report(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ReportDto>,
) -> AppResult<Json<ReportDto>> {
    check_payload_id(id, &payload)?;

    let report = ReportService::partial_update(state.db(), id, &payload).await?;

    Ok(Json(report))
}

/// Delete a report
pub async fn delete_report(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    ReportService::delete(state.db(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Updates must address an explicit id, and it must match the path
fn check_payload_id(path_id: i64, payload: &ReportDto) -> AppResult<()> {
    match payload.id {
        None => Err(AppError::InvalidInput("Missing report id".to_string())),
        Some(body_id) if body_id != path_id => Err(AppError::InvalidInput(
            "Path id and payload id do not match".to_string(),
        )),
        Some(_) => Ok(()),
    }
}
