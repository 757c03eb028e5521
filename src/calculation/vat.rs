//! VAT calculation.
//!
//! Value-added tax is levied on legal-entity imports only, over the declared
//! price plus the already-computed customs duty and excise tax.

use rust_decimal::Decimal;

use crate::models::ImporterCategory;

/// Returns the VAT rate applied to legal-entity imports (20%).
pub fn vat_rate() -> Decimal {
    Decimal::new(20, 2)
}

/// Calculates VAT in rubles.
///
/// Returns zero for any importer other than a legal entity.
///
/// # Examples
///
/// ```
/// use clearance_engine::calculation::calculate_vat;
/// use clearance_engine::models::ImporterCategory;
/// use rust_decimal::Decimal;
///
/// let vat = calculate_vat(
///     ImporterCategory::LegalEntity,
///     Decimal::from(1_000_000),
///     Decimal::from(100_000),
///     Decimal::from(50_000),
/// );
/// assert_eq!(vat, Decimal::from(230_000));
/// ```
pub fn calculate_vat(
    importer_category: ImporterCategory,
    car_price_rub: Decimal,
    customs_duty: Decimal,
    excise_tax: Decimal,
) -> Decimal {
    if !importer_category.is_legal_entity() {
        return Decimal::ZERO;
    }

    (car_price_rub + customs_duty + excise_tax) * vat_rate()
}
