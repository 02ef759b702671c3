//! Cell colouring.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::options::RatioThresholds;

/// Colour of a growth figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrowthTone {
    /// Growth above zero (green).
    Positive,
    /// Growth below zero (red).
    Negative,
    /// No change or nothing to compare.
    Neutral,
}

impl GrowthTone {
    /// Picks the tone for a growth percentage.
    #[must_use]
    pub fn from_growth(growth: Option<Decimal>) -> Self {
        match growth {
            Some(g) if g > Decimal::ZERO => Self::Positive,
            Some(g) if g < Decimal::ZERO => Self::Negative,
            _ => Self::Neutral,
        }
    }
}

/// Colour of a payroll-to-revenue ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatioTone {
    /// Below the warning level.
    Healthy,
    /// At or above the warning level.
    Warning,
    /// At or above the critical level.
    Critical,
    /// No ratio available.
    Unknown,
}

impl RatioTone {
    /// Classifies a ratio against the configured levels.
    #[must_use]
    pub fn classify(ratio: Option<Decimal>, thresholds: &RatioThresholds) -> Self {
        match ratio {
            None => Self::Unknown,
            Some(r) if r >= thresholds.critical => Self::Critical,
            Some(r) if r >= thresholds.warning => Self::Warning,
            Some(_) => Self::Healthy,
        }
    }
}

/// Tone attached to a rendered cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellTone {
    /// Plain text.
    Neutral,
    /// Green.
    Positive,
    /// Red.
    Negative,
    /// Ratio below the warning level.
    Healthy,
    /// Ratio at the warning level.
    Warning,
    /// Ratio at the critical level.
    Critical,
}

impl From<GrowthTone> for CellTone {
    fn from(tone: GrowthTone) -> Self {
        match tone {
            GrowthTone::Positive => Self::Positive,
            GrowthTone::Negative => Self::Negative,
            GrowthTone::Neutral => Self::Neutral,
        }
    }
}

impl From<RatioTone> for CellTone {
    fn from(tone: RatioTone) -> Self {
        match tone {
            RatioTone::Healthy => Self::Healthy,
            RatioTone::Warning => Self::Warning,
            RatioTone::Critical => Self::Critical,
            RatioTone::Unknown => Self::Neutral,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(Some(dec!(25)), GrowthTone::Positive)]
    #[case(Some(dec!(-0.5)), GrowthTone::Negative)]
    #[case(Some(dec!(0)), GrowthTone::Neutral)]
    #[case(None, GrowthTone::Neutral)]
    fn test_growth_tone(#[case] growth: Option<Decimal>, #[case] expected: GrowthTone) {
        assert_eq!(GrowthTone::from_growth(growth), expected);
    }

    #[rstest]
    #[case(Some(dec!(12.5)), RatioTone::Healthy)]
    #[case(Some(dec!(29.99)), RatioTone::Healthy)]
    #[case(Some(dec!(30)), RatioTone::Warning)]
    #[case(Some(dec!(39.99)), RatioTone::Warning)]
    #[case(Some(dec!(40)), RatioTone::Critical)]
    #[case(Some(dec!(150)), RatioTone::Critical)]
    #[case(None, RatioTone::Unknown)]
    fn test_ratio_tone(#[case] ratio: Option<Decimal>, #[case] expected: RatioTone) {
        assert_eq!(
            RatioTone::classify(ratio, &RatioThresholds::default()),
            expected
        );
    }

    #[test]
    fn test_cell_tone_conversion() {
        assert_eq!(CellTone::from(GrowthTone::Positive), CellTone::Positive);
        assert_eq!(CellTone::from(RatioTone::Unknown), CellTone::Neutral);
    }
}
