//! Period report routes.
//!
//! Per-mandate and consolidated views share one pipeline: resolve the mandate
//! set, load raw values for the range and its prior year, build periods, and
//! optionally lay them out as a table.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use chaff_core::format::DisplayOptions;
use chaff_core::periods::{MonthRange, Period, PeriodService, YearMonth};
use chaff_core::table::{PeriodTable, RenderedTable};
use chaff_db::{MandateRepository, ReportRepository, repositories::MandateError};

use super::mandates::MandateResponse;
use super::params::RangeQuery;
use crate::{AppState, error::ApiResult, middleware::AuthUser};

/// Creates the report routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/mandates/{mandate_id}/periods", get(get_mandate_periods))
        .route("/mandates/{mandate_id}/report", get(get_mandate_report))
        .route("/periods", get(get_consolidated_periods))
        .route("/report", get(get_consolidated_report))
}

/// Periods of a mandate set.
#[derive(Debug, Serialize)]
pub struct PeriodsResponse {
    /// First month of the range.
    pub from: YearMonth,
    /// Last month of the range.
    pub to: YearMonth,
    /// Mandates included in the figures.
    pub mandates: Vec<MandateResponse>,
    /// One entry per month of the range.
    pub periods: Vec<Period>,
}

/// Periods plus their table layout.
#[derive(Debug, Serialize)]
pub struct ReportResponse {
    /// Period data.
    #[serde(flatten)]
    pub data: PeriodsResponse,
    /// Numeric table.
    pub table: PeriodTable,
    /// Formatted table.
    pub rendered: RenderedTable,
}

/// GET /mandates/{mandate_id}/periods
async fn get_mandate_periods(
    State(state): State<AppState>,
    Path(mandate_id): Path<Uuid>,
    Query(query): Query<RangeQuery>,
    auth_user: AuthUser,
) -> ApiResult<Json<PeriodsResponse>> {
    let range = query.month_range(state.reporting.max_range_months)?;
    let mandates = single_mandate(&state, &auth_user, mandate_id).await?;
    Ok(Json(load_periods(&state, mandates, range).await?))
}

/// GET /mandates/{mandate_id}/report
async fn get_mandate_report(
    State(state): State<AppState>,
    Path(mandate_id): Path<Uuid>,
    Query(query): Query<RangeQuery>,
    auth_user: AuthUser,
) -> ApiResult<Json<ReportResponse>> {
    let range = query.month_range(state.reporting.max_range_months)?;
    let display_year = query.display_year(&range)?;
    let mandates = single_mandate(&state, &auth_user, mandate_id).await?;
    let data = load_periods(&state, mandates, range).await?;
    Ok(Json(build_report(&state, data, display_year)))
}

/// GET /periods
async fn get_consolidated_periods(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
    auth_user: AuthUser,
) -> ApiResult<Json<PeriodsResponse>> {
    let range = query.month_range(state.reporting.max_range_months)?;
    let mandates = organization_mandates(&state, &auth_user, query.mandate_type()).await?;
    Ok(Json(load_periods(&state, mandates, range).await?))
}

/// GET /report
async fn get_consolidated_report(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
    auth_user: AuthUser,
) -> ApiResult<Json<ReportResponse>> {
    let range = query.month_range(state.reporting.max_range_months)?;
    let display_year = query.display_year(&range)?;
    let mandates = organization_mandates(&state, &auth_user, query.mandate_type()).await?;
    let data = load_periods(&state, mandates, range).await?;
    Ok(Json(build_report(&state, data, display_year)))
}

async fn single_mandate(
    state: &AppState,
    auth_user: &AuthUser,
    mandate_id: Uuid,
) -> Result<Vec<MandateResponse>, MandateError> {
    let mandate = MandateRepository::new((*state.db).clone())
        .get(auth_user.organization_id(), mandate_id)
        .await?;
    Ok(vec![MandateResponse::from(&mandate)])
}

async fn organization_mandates(
    state: &AppState,
    auth_user: &AuthUser,
    mandate_type: Option<&str>,
) -> ApiResult<Vec<MandateResponse>> {
    let mandates = MandateRepository::new((*state.db).clone())
        .list_for_organization(auth_user.organization_id(), mandate_type)
        .await?;
    Ok(mandates.iter().map(MandateResponse::from).collect())
}

async fn load_periods(
    state: &AppState,
    mandates: Vec<MandateResponse>,
    range: MonthRange,
) -> ApiResult<PeriodsResponse> {
    let mandate_ids: Vec<Uuid> = mandates.iter().map(|m| m.id).collect();
    let inputs = ReportRepository::new((*state.db).clone())
        .load_period_inputs(&mandate_ids, &range)
        .await?;

    let periods =
        PeriodService::build_periods(&range, &inputs.day_values, &inputs.payroll_entries);

    info!(
        mandates = mandate_ids.len(),
        from = %range.start(),
        to = %range.end(),
        "Built period report"
    );

    Ok(PeriodsResponse {
        from: range.start(),
        to: range.end(),
        mandates,
        periods,
    })
}

fn build_report(state: &AppState, data: PeriodsResponse, display_year: i32) -> ReportResponse {
    let options = DisplayOptions::from(state.reporting.as_ref());
    let table = PeriodTable::build(&data.periods, display_year);
    let rendered = table.render(&data.periods, &options);
    ReportResponse {
        data,
        table,
        rendered,
    }
}
