//! Tests for the period table.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use chaff_shared::types::MandateId;

use crate::format::{CellTone, DisplayOptions};
use crate::periods::{
    DayValue, MonthRange, PayrollEntry, PayrollSource, PeriodService, YearMonth,
};

use super::types::{CellPair, PeriodTable};

fn ym(year: i32, month: u32) -> YearMonth {
    YearMonth::new(year, month).unwrap()
}

fn day(mandate: MandateId, y: i32, m: u32, d: u32, value: Decimal) -> DayValue {
    DayValue {
        mandate_id: mandate,
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        value,
    }
}

#[test]
fn test_empty_periods_give_empty_table() {
    let table = PeriodTable::build(&[], 2025);

    assert!(table.is_empty());
    assert!(table.rows.is_empty());
    assert!(table.totals.is_empty());
    assert!(table.payroll_totals.is_empty());
    assert!(table.ratios.is_empty());
    assert_eq!(table.current_year, 2025);
    assert_eq!(table.previous_year, 2024);

    let rendered = table.render(&[], &DisplayOptions::default());
    assert!(rendered.headers.is_empty());
    assert!(rendered.day_rows.is_empty());
    assert!(rendered.summary_rows.iter().all(|row| row.cells.is_empty()));
}

#[test]
fn test_extreme_display_year_does_not_overflow() {
    let table = PeriodTable::build(&[], i32::MIN);

    assert!(table.is_empty());
    assert_eq!(table.current_year, i32::MIN);
    assert_eq!(table.previous_year, i32::MIN);
}

#[test]
fn test_january_scenario_table() {
    let mandate = MandateId::new();
    let range = MonthRange::new(ym(2025, 1), ym(2025, 1)).unwrap();
    let values = vec![
        day(mandate, 2025, 1, 1, dec!(1000)),
        day(mandate, 2025, 1, 2, dec!(0)),
        day(mandate, 2024, 1, 1, dec!(800)),
    ];
    let periods = PeriodService::build_periods(&range, &values, &[]);

    let table = PeriodTable::build(&periods, 2025);

    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0].day, 1);
    assert_eq!(
        table.rows[0].cells,
        vec![CellPair { current: dec!(1000), previous: dec!(800) }]
    );
    assert_eq!(table.rows[1].day, 2);
    assert_eq!(table.rows[1].cells, vec![CellPair::default()]);
    assert_eq!(
        table.totals,
        vec![CellPair { current: dec!(1000), previous: dec!(800) }]
    );

    let rendered = table.render(&periods, &DisplayOptions::default());

    assert_eq!(rendered.headers, vec!["Janvier 2025".to_string()]);
    assert_eq!(rendered.year_headers, vec!["2025".to_string(), "2024".to_string()]);
    let day_one: Vec<&str> = rendered.day_rows[0].cells.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(day_one, vec!["1'000.00", "800.00"]);
    let day_two: Vec<&str> = rendered.day_rows[1].cells.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(day_two, vec!["—", "—"]);

    let growth = &rendered.summary_rows[3];
    assert_eq!(growth.cells[0].text, "+25.0%");
    assert_eq!(growth.cells[0].tone, CellTone::Positive);
}

#[test]
fn test_day_union_across_periods() {
    let mandate = MandateId::new();
    let range = MonthRange::new(ym(2025, 3), ym(2025, 4)).unwrap();
    let values = vec![
        day(mandate, 2025, 3, 5, dec!(10)),
        day(mandate, 2025, 4, 20, dec!(20)),
    ];
    let periods = PeriodService::build_periods(&range, &values, &[]);

    let table = PeriodTable::build(&periods, 2025);

    let days: Vec<u32> = table.rows.iter().map(|r| r.day).collect();
    assert_eq!(days, vec![5, 20]);
    assert_eq!(table.rows[0].cells[1], CellPair::default());
    assert_eq!(table.rows[1].cells[0], CellPair::default());
    assert_eq!(table.rows[1].cells[1].current, dec!(20));
}

#[test]
fn test_day_31_shows_placeholder_in_short_month() {
    let mandate = MandateId::new();
    let range = MonthRange::new(ym(2025, 3), ym(2025, 4)).unwrap();
    let values = vec![
        day(mandate, 2025, 3, 31, dec!(450)),
        day(mandate, 2025, 4, 30, dec!(300)),
    ];
    let periods = PeriodService::build_periods(&range, &values, &[]);

    let rendered = PeriodTable::build(&periods, 2025).render(&periods, &DisplayOptions::default());

    let day_31 = rendered.day_rows.iter().find(|r| r.label == "31").unwrap();
    assert_eq!(day_31.cells[0].text, "450.00");
    assert_eq!(day_31.cells[2].text, "—");
}

#[test]
fn test_payroll_totals_and_ratios() {
    let mandate = MandateId::new();
    let range = MonthRange::new(ym(2025, 5), ym(2025, 6)).unwrap();
    let values = vec![
        day(mandate, 2025, 5, 1, dec!(10000)),
        day(mandate, 2024, 5, 1, dec!(8000)),
        day(mandate, 2025, 6, 1, dec!(5000)),
    ];
    let payroll = vec![
        PayrollEntry::new(mandate, ym(2025, 5), dec!(3500), dec!(700), PayrollSource::Manual)
            .unwrap(),
        PayrollEntry::new(mandate, ym(2024, 5), dec!(2000), dec!(400), PayrollSource::Import)
            .unwrap(),
        PayrollEntry::new(mandate, ym(2024, 6), dec!(1000), dec!(0), PayrollSource::Import)
            .unwrap(),
    ];
    let periods = PeriodService::build_periods(&range, &values, &payroll);

    let table = PeriodTable::build(&periods, 2025);

    assert_eq!(
        table.payroll_totals,
        vec![
            CellPair { current: dec!(4200), previous: dec!(2400) },
            CellPair { current: dec!(0), previous: dec!(1000) },
        ]
    );
    // June 2024 has payroll but no revenue: no prior-year ratio.
    assert_eq!(
        table.ratios,
        vec![
            CellPair { current: dec!(42.00), previous: dec!(30.00) },
            CellPair { current: dec!(0), previous: dec!(0) },
        ]
    );

    let rendered = table.render(&periods, &DisplayOptions::default());
    let ratio_row = &rendered.summary_rows[2];
    assert_eq!(ratio_row.cells[0].text, "42.0%");
    assert_eq!(ratio_row.cells[0].tone, CellTone::Critical);
    assert_eq!(ratio_row.cells[1].text, "30.0%");
    assert_eq!(ratio_row.cells[1].tone, CellTone::Warning);
    assert_eq!(ratio_row.cells[2].text, "—");
    assert_eq!(ratio_row.cells[2].tone, CellTone::Neutral);
}

#[test]
fn test_growth_without_prior_year_is_placeholder() {
    let mandate = MandateId::new();
    let range = MonthRange::new(ym(2025, 8), ym(2025, 8)).unwrap();
    let values = vec![day(mandate, 2025, 8, 12, dec!(640))];
    let periods = PeriodService::build_periods(&range, &values, &[]);

    let rendered = PeriodTable::build(&periods, 2025).render(&periods, &DisplayOptions::default());

    for row in &rendered.summary_rows[3..] {
        assert_eq!(row.cells[0].text, "—");
        assert_eq!(row.cells[0].tone, CellTone::Neutral);
    }
}

proptest! {
    /// Rows are the distinct days found across all periods, nothing more.
    #[test]
    fn test_rows_match_distinct_days(
        raw in prop::collection::vec((0i32..2, 1u32..=3, 1u32..=28, 0i64..100_000), 0..60),
    ) {
        let mandate = MandateId::new();
        let values: Vec<DayValue> = raw
            .iter()
            .map(|(offset, m, d, cents)| day(mandate, 2025 - offset, *m, *d, Decimal::new(*cents, 2)))
            .collect();
        let range = MonthRange::new(ym(2025, 1), ym(2025, 3)).unwrap();
        let periods = PeriodService::build_periods(&range, &values, &[]);

        let table = PeriodTable::build(&periods, 2025);

        let expected: BTreeSet<u32> = raw.iter().map(|(_, _, d, _)| *d).collect();
        prop_assert_eq!(table.rows.len(), expected.len());
        prop_assert!(table.rows.windows(2).all(|w| w[0].day < w[1].day));
        for row in &table.rows {
            prop_assert_eq!(row.cells.len(), periods.len());
        }
    }

    /// Totals are copied from the periods without drift.
    #[test]
    fn test_totals_match_periods(
        raw in prop::collection::vec((0i32..2, 1u32..=3, 1u32..=28, 0i64..100_000), 0..60),
    ) {
        let mandate = MandateId::new();
        let values: Vec<DayValue> = raw
            .iter()
            .map(|(offset, m, d, cents)| day(mandate, 2025 - offset, *m, *d, Decimal::new(*cents, 2)))
            .collect();
        let range = MonthRange::new(ym(2025, 1), ym(2025, 3)).unwrap();
        let periods = PeriodService::build_periods(&range, &values, &[]);

        let table = PeriodTable::build(&periods, 2025);

        prop_assert_eq!(table.totals.len(), periods.len());
        for (total, period) in table.totals.iter().zip(&periods) {
            prop_assert_eq!(total.current, period.total_value);
            prop_assert_eq!(total.previous, period.year_over_year.previous_year_revenue);
        }
    }
}
