//! Mandate routes.

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use chaff_db::{MandateRepository, entities::mandates};

use crate::{AppState, error::ApiResult, middleware::AuthUser};

/// Creates the mandate routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new().route("/mandates", get(list_mandates))
}

/// Query parameters for listing mandates.
#[derive(Debug, Deserialize)]
pub struct ListMandatesQuery {
    /// Only mandates of this type.
    pub mandate_type: Option<String>,
}

/// Mandate in responses.
#[derive(Debug, Serialize)]
pub struct MandateResponse {
    /// Mandate ID.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Grouping type.
    pub mandate_type: String,
}

impl From<&mandates::Model> for MandateResponse {
    fn from(model: &mandates::Model) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
            mandate_type: model.mandate_type.clone(),
        }
    }
}

/// GET /mandates
async fn list_mandates(
    State(state): State<AppState>,
    Query(query): Query<ListMandatesQuery>,
    auth_user: AuthUser,
) -> ApiResult<Json<Vec<MandateResponse>>> {
    let mandate_type = query
        .mandate_type
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty());

    let mandates = MandateRepository::new((*state.db).clone())
        .list_for_organization(auth_user.organization_id(), mandate_type)
        .await?;

    Ok(Json(mandates.iter().map(MandateResponse::from).collect()))
}
