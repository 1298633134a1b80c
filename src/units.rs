use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Number of indivisible units per inch. The default is thousandths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitScale(u32);

impl UnitScale {
    pub const THOUSANDTHS: UnitScale = UnitScale(1000);

    /// Finest supported resolution: ten-thousandths of an inch.
    pub const MAX_UNITS_PER_INCH: u32 = 10_000;

    pub fn new(units_per_inch: u32) -> Result<Self, CatalogError> {
        if units_per_inch == 0 {
            return Err(CatalogError::ZeroScale);
        }
        if units_per_inch > Self::MAX_UNITS_PER_INCH {
            return Err(CatalogError::ScaleTooLarge {
                scale: units_per_inch,
                max: Self::MAX_UNITS_PER_INCH,
            });
        }
        Ok(Self(units_per_inch))
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    /// Rounds `inches * scale` to the nearest unit. Negative and NaN inputs
    /// clamp to zero, values beyond `u32::MAX` saturate.
    pub fn to_units(&self, inches: f64) -> u32 {
        (inches * self.0 as f64).round() as u32
    }

    pub fn from_units(&self, units: u32) -> f64 {
        units as f64 / self.0 as f64
    }
}

impl Default for UnitScale {
    fn default() -> Self {
        Self::THOUSANDTHS
    }
}

/// Three-decimal inch display, e.g. `0.750"`.
pub fn format_inches(inches: f64) -> String {
    format!("{:.3}\"", inches)
}

/// Rounds to three decimals for serialized output.
pub fn round3(inches: f64) -> f64 {
    (inches * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_units_rounds_to_nearest() {
        let scale = UnitScale::default();
        assert_eq!(scale.to_units(1.005), 1005);
        assert_eq!(scale.to_units(0.031), 31);
        assert_eq!(scale.to_units(0.0304), 30);
        assert_eq!(scale.to_units(0.0306), 31);
        assert_eq!(scale.to_units(3.0), 3000);
    }

    #[test]
    fn test_to_units_clamps_invalid() {
        let scale = UnitScale::default();
        assert_eq!(scale.to_units(-1.0), 0);
        assert_eq!(scale.to_units(f64::NAN), 0);
    }

    #[test]
    fn test_from_units() {
        let scale = UnitScale::default();
        assert!((scale.from_units(1005) - 1.005).abs() < 1e-12);
        assert_eq!(scale.from_units(0), 0.0);

        let tenths = UnitScale::new(10).unwrap();
        assert_eq!(tenths.to_units(0.25), 3);
        assert!((tenths.from_units(3) - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_scale_bounds() {
        assert_eq!(UnitScale::new(0), Err(CatalogError::ZeroScale));
        assert_eq!(
            UnitScale::new(1_000_000),
            Err(CatalogError::ScaleTooLarge {
                scale: 1_000_000,
                max: 10_000
            })
        );
        assert!(UnitScale::new(u32::MAX).is_err());
        assert_eq!(UnitScale::new(10_000).unwrap().get(), 10_000);
    }

    #[test]
    fn test_format_inches() {
        assert_eq!(format_inches(0.75), "0.750\"");
        assert_eq!(format_inches(3.0), "3.000\"");
        assert_eq!(round3(1.00499999), 1.005);
    }
}
