//! Daily revenue repository.
//!
//! One value per mandate and date; edits overwrite the stored value.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
    TransactionTrait, sea_query::OnConflict,
};
use uuid::Uuid;

use crate::entities::daily_revenues;

/// Error types for revenue operations.
#[derive(Debug, thiserror::Error)]
pub enum RevenueError {
    /// Revenue cannot be negative.
    #[error("Revenue cannot be negative")]
    NegativeValue,

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Outcome of a revenue edit.
#[derive(Debug, Clone)]
pub struct RevenueUpsert {
    /// The row as stored after the edit.
    pub stored: daily_revenues::Model,
    /// Value before the edit, `None` if the day had no entry.
    pub previous_value: Option<Decimal>,
}

/// Daily revenue repository.
#[derive(Debug, Clone)]
pub struct RevenueRepository {
    db: DatabaseConnection,
}

impl RevenueRepository {
    /// Creates a new revenue repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores the revenue of one mandate for one day, replacing any earlier value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or the database fails.
    pub async fn upsert_day_value(
        &self,
        mandate_id: Uuid,
        date: NaiveDate,
        value: Decimal,
    ) -> Result<RevenueUpsert, RevenueError> {
        if value < Decimal::ZERO {
            return Err(RevenueError::NegativeValue);
        }

        let txn = self.db.begin().await?;

        // Row lock keeps the captured previous value consistent with the overwrite.
        let previous_value = daily_revenues::Entity::find()
            .filter(daily_revenues::Column::MandateId.eq(mandate_id))
            .filter(daily_revenues::Column::RevenueDate.eq(date))
            .lock_exclusive()
            .one(&txn)
            .await?
            .map(|existing| existing.value);

        let now = chrono::Utc::now().into();
        let revenue = daily_revenues::ActiveModel {
            id: Set(Uuid::new_v4()),
            mandate_id: Set(mandate_id),
            revenue_date: Set(date),
            value: Set(value),
            created_at: Set(now),
            updated_at: Set(now),
        };

        // A concurrent first edit of the same day lands on the unique key; last write wins.
        let stored = daily_revenues::Entity::insert(revenue)
            .on_conflict(
                OnConflict::columns([
                    daily_revenues::Column::MandateId,
                    daily_revenues::Column::RevenueDate,
                ])
                .update_columns([daily_revenues::Column::Value, daily_revenues::Column::UpdatedAt])
                .to_owned(),
            )
            .exec_with_returning(&txn)
            .await?;

        txn.commit().await?;

        Ok(RevenueUpsert {
            stored,
            previous_value,
        })
    }

    /// Lists revenue of the given mandates between two dates, inclusive.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_between(
        &self,
        mandate_ids: &[Uuid],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<daily_revenues::Model>, DbErr> {
        if mandate_ids.is_empty() {
            return Ok(Vec::new());
        }

        daily_revenues::Entity::find()
            .filter(daily_revenues::Column::MandateId.is_in(mandate_ids.iter().copied()))
            .filter(daily_revenues::Column::RevenueDate.gte(start))
            .filter(daily_revenues::Column::RevenueDate.lte(end))
            .order_by_asc(daily_revenues::Column::RevenueDate)
            .all(&self.db)
            .await
    }
}
