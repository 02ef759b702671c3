//! Mandate repository for database operations.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};
use uuid::Uuid;

use crate::entities::mandates;

/// Error types for mandate operations.
#[derive(Debug, thiserror::Error)]
pub enum MandateError {
    /// Mandate not found in the caller's organization.
    #[error("Mandate not found: {0}")]
    NotFound(Uuid),

    /// Name or type left blank.
    #[error("Mandate {0} cannot be empty")]
    EmptyField(&'static str),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for creating a mandate.
#[derive(Debug, Clone)]
pub struct CreateMandateInput {
    /// Owning organization.
    pub organization_id: Uuid,
    /// Display name.
    pub name: String,
    /// Grouping used for consolidated reports, e.g. `campsite`.
    pub mandate_type: String,
}

/// Mandate repository.
#[derive(Debug, Clone)]
pub struct MandateRepository {
    db: DatabaseConnection,
}

impl MandateRepository {
    /// Creates a new mandate repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an active mandate.
    ///
    /// # Errors
    ///
    /// Returns an error if the name or type is blank or the insert fails.
    pub async fn create(&self, input: CreateMandateInput) -> Result<mandates::Model, MandateError> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(MandateError::EmptyField("name"));
        }
        let mandate_type = input.mandate_type.trim();
        if mandate_type.is_empty() {
            return Err(MandateError::EmptyField("type"));
        }

        let now = chrono::Utc::now().into();
        let mandate = mandates::ActiveModel {
            id: Set(Uuid::new_v4()),
            organization_id: Set(input.organization_id),
            name: Set(name.to_string()),
            mandate_type: Set(mandate_type.to_lowercase()),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(mandate.insert(&self.db).await?)
    }

    /// Finds a mandate by ID within an organization.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(
        &self,
        organization_id: Uuid,
        mandate_id: Uuid,
    ) -> Result<Option<mandates::Model>, DbErr> {
        mandates::Entity::find_by_id(mandate_id)
            .filter(mandates::Column::OrganizationId.eq(organization_id))
            .one(&self.db)
            .await
    }

    /// Like [`Self::find_by_id`], but a missing mandate is an error.
    ///
    /// # Errors
    ///
    /// Returns `MandateError::NotFound` if the mandate does not belong to the
    /// organization.
    pub async fn get(
        &self,
        organization_id: Uuid,
        mandate_id: Uuid,
    ) -> Result<mandates::Model, MandateError> {
        self.find_by_id(organization_id, mandate_id)
            .await?
            .ok_or(MandateError::NotFound(mandate_id))
    }

    /// Lists active mandates of an organization, optionally of one type.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_for_organization(
        &self,
        organization_id: Uuid,
        mandate_type: Option<&str>,
    ) -> Result<Vec<mandates::Model>, DbErr> {
        let mut query = mandates::Entity::find()
            .filter(mandates::Column::OrganizationId.eq(organization_id))
            .filter(mandates::Column::IsActive.eq(true));

        if let Some(mandate_type) = mandate_type {
            query = query.filter(mandates::Column::MandateType.eq(mandate_type.trim().to_lowercase()));
        }

        query
            .order_by_asc(mandates::Column::MandateType)
            .order_by_asc(mandates::Column::Name)
            .all(&self.db)
            .await
    }
}
