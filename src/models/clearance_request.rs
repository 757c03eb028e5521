//! Clearance request model.
//!
//! This module defines the [`ClearanceRequest`] value object carrying all
//! inputs the engine needs. A request is constructed once from
//! caller-supplied values and never mutated.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::{EngineKind, ImporterCategory};

/// The full set of inputs for a customs clearance calculation.
///
/// Age, power and volume are unsigned integers, so the "must not be
/// negative" precondition on them holds by construction. The two decimal
/// inputs are checked by [`ClearanceRequest::validate`] before any
/// computation runs.
///
/// # Example
///
/// ```
/// use clearance_engine::models::{ClearanceRequest, EngineKind, ImporterCategory};
/// use rust_decimal::Decimal;
///
/// let request = ClearanceRequest {
///     importer_category: ImporterCategory::Individual,
///     car_age_years: 2,
///     engine_kind: EngineKind::Gasoline,
///     engine_power_hp: 150,
///     engine_volume_cc: 1600,
///     car_price_rub: Decimal::from(800_000),
///     euro_to_rub_rate: Decimal::from(100),
/// };
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClearanceRequest {
    /// The category of the importing party.
    pub importer_category: ImporterCategory,
    /// The age of the car in whole years.
    pub car_age_years: u32,
    /// The kind of engine installed in the car.
    pub engine_kind: EngineKind,
    /// Engine power in horsepower.
    pub engine_power_hp: u32,
    /// Engine displacement in cubic centimeters.
    pub engine_volume_cc: u32,
    /// The declared car price in rubles.
    pub car_price_rub: Decimal,
    /// The euro-to-ruble conversion rate used for euro-denominated duty
    /// thresholds.
    pub euro_to_rub_rate: Decimal,
}

impl ClearanceRequest {
    /// Checks the decimal inputs before any fee is computed.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidRate`] if the exchange rate is zero or
    ///   negative (it divides the declared price).
    /// - [`EngineError::InvalidPrice`] if the declared price is negative.
    pub fn validate(&self) -> EngineResult<()> {
        if self.euro_to_rub_rate <= Decimal::ZERO {
            return Err(EngineError::InvalidRate {
                rate: self.euro_to_rub_rate,
            });
        }
        if self.car_price_rub < Decimal::ZERO {
            return Err(EngineError::InvalidPrice {
                price: self.car_price_rub,
            });
        }
        Ok(())
    }

    /// Returns the declared price expressed in euros.
    ///
    /// Duty thresholds for new cars are defined in euros, so the ruble price
    /// is converted through the supplied rate.
    pub fn price_in_euro(&self) -> Decimal {
        self.car_price_rub / self.euro_to_rub_rate
    }
}
