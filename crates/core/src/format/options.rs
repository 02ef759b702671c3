//! Display options.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use chaff_shared::ReportingConfig;

/// Payroll-to-revenue ratio levels, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatioThresholds {
    /// Ratio from which a period is shown as a warning.
    pub warning: Decimal,
    /// Ratio from which a period is shown as critical.
    pub critical: Decimal,
}

impl Default for RatioThresholds {
    fn default() -> Self {
        Self {
            warning: Decimal::from(30),
            critical: Decimal::from(40),
        }
    }
}

/// How numbers are rendered in a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayOptions {
    /// Thousands grouping character.
    pub thousands_separator: char,
    /// Decimal places for percentages (1 or 2).
    pub percent_precision: u32,
    /// Payroll ratio colouring levels.
    pub ratio_thresholds: RatioThresholds,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            thousands_separator: '\'',
            percent_precision: 1,
            ratio_thresholds: RatioThresholds::default(),
        }
    }
}

impl From<&ReportingConfig> for DisplayOptions {
    fn from(config: &ReportingConfig) -> Self {
        Self {
            thousands_separator: config.thousands_separator_char(),
            percent_precision: config.clamped_percent_precision(),
            ratio_thresholds: RatioThresholds {
                warning: Decimal::from(config.payroll_ratio_warning_percent),
                critical: Decimal::from(config.payroll_ratio_critical_percent),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_reporting_config() {
        let config = ReportingConfig {
            percent_precision: 9,
            payroll_ratio_warning_percent: 25,
            payroll_ratio_critical_percent: 35,
            max_range_months: 12,
            thousands_separator: " ".to_string(),
        };

        let options = DisplayOptions::from(&config);

        assert_eq!(options.thousands_separator, ' ');
        assert_eq!(options.percent_precision, 2);
        assert_eq!(options.ratio_thresholds.warning, Decimal::from(25));
        assert_eq!(options.ratio_thresholds.critical, Decimal::from(35));
    }

    #[test]
    fn test_defaults_match_reporting_defaults() {
        assert_eq!(
            DisplayOptions::from(&ReportingConfig::default()),
            DisplayOptions::default()
        );
    }
}
