//! Clearance cost model.
//!
//! This module contains the [`ClearanceCost`] breakdown returned by the
//! engine: the five fee components in rubles and the derived total.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The complete cost breakdown of a customs clearance, in rubles.
///
/// The total is never stored; [`ClearanceCost::total`] recomputes the sum of
/// the five components on every call, so the breakdown and its total cannot
/// drift apart.
///
/// # Example
///
/// ```
/// use clearance_engine::models::ClearanceCost;
/// use rust_decimal::Decimal;
///
/// let cost = ClearanceCost {
///     customs_fee: Decimal::from(4269),
///     customs_duty: Decimal::from(432_000),
///     excise_tax: Decimal::ZERO,
///     vat: Decimal::ZERO,
///     recycling_fee: Decimal::from(3400),
/// };
/// assert_eq!(cost.total(), Decimal::from(439_669));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearanceCost {
    /// Fixed administrative charge banded by the declared price.
    pub customs_fee: Decimal,
    /// The primary import tariff.
    pub customs_duty: Decimal,
    /// Power-banded excise tax (legal-entity imports only).
    pub excise_tax: Decimal,
    /// Value-added tax on price plus duty plus excise (legal-entity only).
    pub vat: Decimal,
    /// Environmental disposal fee.
    pub recycling_fee: Decimal,
}

impl ClearanceCost {
    /// Returns the total clearance cost: the sum of the five components.
    pub fn total(&self) -> Decimal {
        self.customs_fee + self.customs_duty + self.excise_tax + self.vat + self.recycling_fee
    }
}
