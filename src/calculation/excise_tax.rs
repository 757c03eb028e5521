//! Excise tax calculation.
//!
//! Excise is levied on legal-entity imports only. The schedule is a
//! per-horsepower rate banded by engine power; the tax is the rate times the
//! full power figure.

use rust_decimal::Decimal;

use crate::models::ImporterCategory;

use super::bands::{self, Band};

/// (inclusive power upper bound in hp, rate in rubles per hp)
const EXCISE_RATE_BANDS: [Band<u32>; 6] = [
    (90, 0),
    (150, 61),
    (200, 583),
    (300, 955),
    (400, 1_628),
    (500, 1_685),
];

/// Per-hp rate for engines above 500 hp.
const EXCISE_RATE_ABOVE_TOP: u32 = 1_740;

/// Calculates the excise tax in rubles.
///
/// Returns zero for any importer other than a legal entity.
///
/// # Examples
///
/// ```
/// use clearance_engine::calculation::calculate_excise_tax;
/// use clearance_engine::models::ImporterCategory;
/// use rust_decimal::Decimal;
///
/// // 320 hp falls in the 1628 RUB/hp band.
/// assert_eq!(
///     calculate_excise_tax(ImporterCategory::LegalEntity, 320),
///     Decimal::from(520_960)
/// );
/// assert_eq!(
///     calculate_excise_tax(ImporterCategory::Individual, 320),
///     Decimal::ZERO
/// );
/// ```
pub fn calculate_excise_tax(importer_category: ImporterCategory, engine_power_hp: u32) -> Decimal {
    if !importer_category.is_legal_entity() {
        return Decimal::ZERO;
    }

    let rate_per_hp = bands::lookup(&EXCISE_RATE_BANDS, EXCISE_RATE_ABOVE_TOP, engine_power_hp);
    Decimal::from(engine_power_hp) * Decimal::from(rate_per_hp)
}
