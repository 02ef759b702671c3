//! Payroll routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, put},
};
use chrono::{Datelike, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use chaff_core::periods::PeriodService;
use chaff_db::{
    MandateRepository, PayrollRepository,
    entities::{payroll_entries, sea_orm_active_enums::PayrollSource},
    repositories::UpsertPayrollInput,
};

use super::params::RawAmount;
use crate::{
    AppState,
    error::{ApiError, ApiResult},
    middleware::AuthUser,
};

/// Creates the payroll routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/mandates/{mandate_id}/payroll", get(list_payroll))
        .route(
            "/mandates/{mandate_id}/payroll/{year}/{month}",
            put(put_payroll),
        )
}

/// Query parameters for listing payroll.
#[derive(Debug, Deserialize)]
pub struct PayrollQuery {
    /// Calendar year; defaults to the current one.
    pub year: Option<i32>,
}

/// Request body for a manual payroll entry.
#[derive(Debug, Deserialize)]
pub struct PayrollRequest {
    /// Gross wages.
    pub gross_amount: RawAmount,
    /// Employer social charges.
    pub social_charges: RawAmount,
    /// Headcount.
    pub employee_count: Option<i32>,
    /// Free-text notes.
    pub notes: Option<String>,
}

/// Payroll entry in responses.
#[derive(Debug, Serialize)]
pub struct PayrollResponse {
    /// Entry ID.
    pub id: Uuid,
    /// Year.
    pub year: i32,
    /// Month (1-12).
    pub month: i32,
    /// Gross wages.
    pub gross_amount: Decimal,
    /// Employer social charges.
    pub social_charges: Decimal,
    /// Gross wages plus charges.
    pub total_cost: Decimal,
    /// Headcount.
    pub employee_count: Option<i32>,
    /// Notes.
    pub notes: Option<String>,
    /// `manual` or `import`.
    pub source: PayrollSource,
    /// False for an import hidden by a manual entry of the same month.
    pub effective: bool,
}

fn to_response(model: &payroll_entries::Model, effective: bool) -> PayrollResponse {
    PayrollResponse {
        id: model.id,
        year: model.year,
        month: model.month,
        gross_amount: model.gross_amount,
        social_charges: model.social_charges,
        total_cost: model.total_cost,
        employee_count: model.employee_count,
        notes: model.notes.clone(),
        source: model.source,
        effective,
    }
}

/// GET /mandates/{mandate_id}/payroll
async fn list_payroll(
    State(state): State<AppState>,
    Path(mandate_id): Path<Uuid>,
    Query(query): Query<PayrollQuery>,
    auth_user: AuthUser,
) -> ApiResult<Json<Vec<PayrollResponse>>> {
    let year = query.year.unwrap_or_else(|| Utc::now().year());

    let mandate = MandateRepository::new((*state.db).clone())
        .get(auth_user.organization_id(), mandate_id)
        .await?;
    let entries = PayrollRepository::new((*state.db).clone())
        .list_for_year(mandate.id, year)
        .await?;

    let response = entries
        .iter()
        .map(|entry| {
            let hidden = entry.source == PayrollSource::Import
                && entries.iter().any(|other| {
                    other.month == entry.month && other.source == PayrollSource::Manual
                });
            to_response(entry, !hidden)
        })
        .collect();

    Ok(Json(response))
}

/// PUT /mandates/{mandate_id}/payroll/{year}/{month}
async fn put_payroll(
    State(state): State<AppState>,
    Path((mandate_id, year, month)): Path<(Uuid, i32, u32)>,
    auth_user: AuthUser,
    Json(request): Json<PayrollRequest>,
) -> ApiResult<Json<PayrollResponse>> {
    let gross_amount = request.gross_amount.parse()?;
    let social_charges = request.social_charges.parse()?;
    PeriodService::validate_payroll(gross_amount, social_charges, year, month)?;
    if request.employee_count.is_some_and(|count| count < 0) {
        return Err(ApiError::validation("Employee count cannot be negative"));
    }

    let mandate = MandateRepository::new((*state.db).clone())
        .get(auth_user.organization_id(), mandate_id)
        .await?;

    let stored = PayrollRepository::new((*state.db).clone())
        .upsert_manual(UpsertPayrollInput {
            mandate_id: mandate.id,
            year,
            month,
            gross_amount,
            social_charges,
            employee_count: request.employee_count,
            notes: request.notes,
        })
        .await?;

    info!(
        mandate_id = %mandate.id,
        year,
        month,
        user_id = %auth_user.user_id(),
        "Manual payroll recorded"
    );

    Ok(Json(to_response(&stored, true)))
}
