//! Daily revenue editing.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::put,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use chaff_core::format::{DisplayOptions, format_currency};
use chaff_db::{MandateRepository, RevenueRepository};

use super::params::{RawAmount, parse_date_key};
use crate::{AppState, error::ApiResult, middleware::AuthUser};

/// Creates the revenue routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/mandates/{mandate_id}/revenues/{date}",
        put(put_day_value),
    )
}

/// Request body for a revenue edit.
#[derive(Debug, Deserialize)]
pub struct DayValueRequest {
    /// Value as typed by the user.
    pub value: RawAmount,
}

/// Response for a revenue edit.
///
/// Clients re-fetch the period range afterwards; totals and cumulative
/// figures are not patched here.
#[derive(Debug, Serialize)]
pub struct DayValueResponse {
    /// Mandate ID.
    pub mandate_id: Uuid,
    /// Edited day.
    pub date: NaiveDate,
    /// Stored value.
    pub value: Decimal,
    /// Stored value, formatted.
    pub formatted_value: String,
    /// Value before the edit, for undo.
    pub previous_value: Option<Decimal>,
}

/// PUT /mandates/{mandate_id}/revenues/{date}
async fn put_day_value(
    State(state): State<AppState>,
    Path((mandate_id, date_key)): Path<(Uuid, String)>,
    auth_user: AuthUser,
    Json(request): Json<DayValueRequest>,
) -> ApiResult<Json<DayValueResponse>> {
    let date = parse_date_key(&date_key)?;
    let value = request.value.parse()?;

    let mandate = MandateRepository::new((*state.db).clone())
        .get(auth_user.organization_id(), mandate_id)
        .await?;

    let upsert = RevenueRepository::new((*state.db).clone())
        .upsert_day_value(mandate.id, date, value)
        .await?;

    info!(
        mandate_id = %mandate.id,
        date = %date,
        user_id = %auth_user.user_id(),
        "Daily revenue updated"
    );

    let options = DisplayOptions::from(state.reporting.as_ref());
    Ok(Json(DayValueResponse {
        mandate_id: mandate.id,
        date,
        value: upsert.stored.value,
        formatted_value: format_currency(upsert.stored.value, &options),
        previous_value: upsert.previous_value,
    }))
}
