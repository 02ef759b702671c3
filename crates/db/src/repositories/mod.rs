//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.

pub mod mandate;
pub mod payroll;
pub mod report;
pub mod revenue;

pub use mandate::{CreateMandateInput, MandateError, MandateRepository};
pub use payroll::{PayrollError, PayrollRepository, UpsertPayrollInput, to_payroll_entry};
pub use report::{PeriodInputs, ReportError, ReportRepository};
pub use revenue::{RevenueError, RevenueRepository, RevenueUpsert};
