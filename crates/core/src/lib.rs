//! Core reporting logic for Chaff.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Amount parsing, period aggregation and table layout live here.
//!
//! # Modules
//!
//! - `normalize` - Separator-tolerant parsing of typed amounts
//! - `periods` - Monthly revenue/payroll aggregation with year-over-year comparison
//! - `table` - Day-by-period table layout and text rendering
//! - `format` - Currency, percentage and tone formatting

pub mod format;
pub mod normalize;
pub mod periods;
pub mod table;
