//! Reporting schema.
//!
//! Creates mandates, daily revenues and payroll entries.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(REPORTING_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(
            r"
            DROP TABLE IF EXISTS payroll_entries CASCADE;
            DROP TABLE IF EXISTS daily_revenues CASCADE;
            DROP TABLE IF EXISTS mandates CASCADE;
            DROP TYPE IF EXISTS payroll_source;
            ",
        )
        .await?;
        Ok(())
    }
}

const REPORTING_SQL: &str = r"
CREATE TYPE payroll_source AS ENUM ('manual', 'import');

-- Managed establishments (campsites, restaurants, ...)
CREATE TABLE mandates (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    organization_id UUID NOT NULL,
    name VARCHAR(255) NOT NULL,
    mandate_type VARCHAR(50) NOT NULL,
    is_active BOOLEAN NOT NULL DEFAULT true,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT uq_mandates_org_name UNIQUE (organization_id, name)
);

CREATE INDEX idx_mandates_org_type ON mandates(organization_id, mandate_type) WHERE is_active;

-- One revenue figure per mandate and calendar day
CREATE TABLE daily_revenues (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    mandate_id UUID NOT NULL REFERENCES mandates(id) ON DELETE CASCADE,
    revenue_date DATE NOT NULL,
    value NUMERIC(15, 2) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT uq_daily_revenues_mandate_date UNIQUE (mandate_id, revenue_date),
    CONSTRAINT chk_daily_revenues_non_negative CHECK (value >= 0)
);

CREATE INDEX idx_daily_revenues_date ON daily_revenues(revenue_date, mandate_id);

-- Monthly payroll cost per mandate, manual or imported
CREATE TABLE payroll_entries (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    mandate_id UUID NOT NULL REFERENCES mandates(id) ON DELETE CASCADE,
    year INTEGER NOT NULL,
    month INTEGER NOT NULL,
    gross_amount NUMERIC(15, 2) NOT NULL,
    social_charges NUMERIC(15, 2) NOT NULL,
    total_cost NUMERIC(15, 2) NOT NULL,
    employee_count INTEGER,
    notes TEXT,
    source payroll_source NOT NULL DEFAULT 'manual',
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT uq_payroll_mandate_month_source UNIQUE (mandate_id, year, month, source),
    CONSTRAINT chk_payroll_month CHECK (month BETWEEN 1 AND 12),
    CONSTRAINT chk_payroll_non_negative CHECK (gross_amount >= 0 AND social_charges >= 0),
    CONSTRAINT chk_payroll_total CHECK (total_cost = gross_amount + social_charges),
    CONSTRAINT chk_payroll_employee_count CHECK (employee_count IS NULL OR employee_count >= 0)
);

CREATE INDEX idx_payroll_entries_period ON payroll_entries(year, month, mandate_id);
";
