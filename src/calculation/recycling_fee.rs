//! Recycling fee calculation.
//!
//! The environmental disposal fee is a fixed base rate scaled by a
//! coefficient keyed on importer type (individual vs everyone else), engine
//! kind (electric vs combustion), car age (up to 3 years vs older) and, for
//! combustion engines, the engine volume band.

use rust_decimal::Decimal;

use crate::models::{ClearanceRequest, ImporterCategory};

use super::bands::{self, Band, rate};

/// The recycling base rate for passenger cars, in rubles.
// TODO: add the commercial-vehicle coefficient table; only passenger cars
// are covered for now.
pub const RECYCLING_BASE_RATE_RUB: u32 = 20_000;

/// Coefficient pair (car up to 3 years old, older car), in hundredths.
type CoefficientPair = (i64, i64);

const INDIVIDUAL_ELECTRIC: CoefficientPair = (17, 26);

/// (inclusive volume upper bound in cc, coefficient pair)
const INDIVIDUAL_VOLUME_BANDS: [Band<CoefficientPair>; 4] = [
    (1_000, (17, 26)),
    (2_000, (17, 26)),
    (3_000, (17, 26)),
    (3_500, (10_767, 16_584)),
];
const INDIVIDUAL_ABOVE_TOP: CoefficientPair = (13_711, 18_024);

const NON_INDIVIDUAL_ELECTRIC: CoefficientPair = (3_337, 5_870);

const NON_INDIVIDUAL_VOLUME_BANDS: [Band<CoefficientPair>; 4] = [
    (1_000, (901, 2_300)),
    (2_000, (3_337, 5_870)),
    (3_000, (9_377, 14_197)),
    (3_500, (10_767, 16_584)),
];
// The over-3500cc coefficient for older cars (80.24) is below the one for
// newer cars (137.11), unlike every other row; kept exactly as published.
const NON_INDIVIDUAL_ABOVE_TOP: CoefficientPair = (13_711, 8_024);

/// Calculates the recycling fee in rubles.
///
/// # Examples
///
/// ```
/// use clearance_engine::calculation::calculate_recycling_fee;
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
/// // 20000 x 0.17
/// assert_eq!(calculate_recycling_fee(&request), Decimal::from(3400));
/// ```
pub fn calculate_recycling_fee(request: &ClearanceRequest) -> Decimal {
    let individual = request.importer_category == ImporterCategory::Individual;

    let (new_coefficient, old_coefficient) = if individual {
        if request.engine_kind.is_electric() {
            INDIVIDUAL_ELECTRIC
        } else {
            bands::lookup(
                &INDIVIDUAL_VOLUME_BANDS,
                INDIVIDUAL_ABOVE_TOP,
                request.engine_volume_cc,
            )
        }
    } else if request.engine_kind.is_electric() {
        NON_INDIVIDUAL_ELECTRIC
    } else {
        bands::lookup(
            &NON_INDIVIDUAL_VOLUME_BANDS,
            NON_INDIVIDUAL_ABOVE_TOP,
            request.engine_volume_cc,
        )
    };

    let coefficient = if request.car_age_years <= 3 {
        rate(new_coefficient)
    } else {
        rate(old_coefficient)
    };

    Decimal::from(RECYCLING_BASE_RATE_RUB) * coefficient
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EngineKind;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn request(
        importer_category: ImporterCategory,
        car_age_years: u32,
        engine_kind: EngineKind,
        engine_volume_cc: u32,
    ) -> ClearanceRequest {
        ClearanceRequest {
            importer_category,
            car_age_years,
            engine_kind,
            engine_power_hp: 150,
            engine_volume_cc,
            car_price_rub: dec("800000"),
            euro_to_rub_rate: dec("100"),
        }
    }

    #[test]
    fn test_individual_electric() {
        let new = request(ImporterCategory::Individual, 2, EngineKind::Electric, 0);
        assert_eq!(calculate_recycling_fee(&new), dec("3400")); // 0.17

        let old = request(ImporterCategory::Individual, 5, EngineKind::Electric, 0);
        assert_eq!(calculate_recycling_fee(&old), dec("5200")); // 0.26
    }

    #[test]
    fn test_individual_small_volume() {
        let new = request(ImporterCategory::Individual, 3, EngineKind::Gasoline, 1600);
        assert_eq!(calculate_recycling_fee(&new), dec("3400"));

        let old = request(ImporterCategory::Individual, 4, EngineKind::Gasoline, 1600);
        assert_eq!(calculate_recycling_fee(&old), dec("5200"));
    }

    #[test]
    fn test_individual_large_volume() {
        let new = request(ImporterCategory::Individual, 2, EngineKind::Gasoline, 3200);
        assert_eq!(calculate_recycling_fee(&new), dec("2153400")); // 107.67

        let old = request(ImporterCategory::Individual, 7, EngineKind::Gasoline, 3200);
        assert_eq!(calculate_recycling_fee(&old), dec("3316800")); // 165.84
    }

    #[test]
    fn test_individual_above_top_band() {
        let new = request(ImporterCategory::Individual, 2, EngineKind::Diesel, 3600);
        assert_eq!(calculate_recycling_fee(&new), dec("2742200")); // 137.11

        let old = request(ImporterCategory::Individual, 9, EngineKind::Diesel, 3600);
        assert_eq!(calculate_recycling_fee(&old), dec("3604800")); // 180.24
    }

    #[test]
    fn test_reseller_uses_non_individual_table() {
        let req = request(
            ImporterCategory::PhysicalPersonWithResell,
            2,
            EngineKind::Gasoline,
            1600,
        );
        assert_eq!(calculate_recycling_fee(&req), dec("667400")); // 33.37
    }

    #[test]
    fn test_legal_entity_electric() {
        let new = request(ImporterCategory::LegalEntity, 1, EngineKind::Electric, 0);
        assert_eq!(calculate_recycling_fee(&new), dec("667400")); // 33.37

        let old = request(ImporterCategory::LegalEntity, 8, EngineKind::Electric, 0);
        assert_eq!(calculate_recycling_fee(&old), dec("1174000")); // 58.7
    }

    #[test]
    fn test_legal_entity_volume_bands() {
        let small = request(ImporterCategory::LegalEntity, 2, EngineKind::Gasoline, 1000);
        assert_eq!(calculate_recycling_fee(&small), dec("180200")); // 9.01

        let small_old = request(ImporterCategory::LegalEntity, 6, EngineKind::Gasoline, 1000);
        assert_eq!(calculate_recycling_fee(&small_old), dec("460000")); // 23

        let mid = request(ImporterCategory::LegalEntity, 6, EngineKind::Diesel, 2000);
        assert_eq!(calculate_recycling_fee(&mid), dec("1174000")); // 58.7

        let large = request(ImporterCategory::LegalEntity, 2, EngineKind::Gasoline, 2500);
        assert_eq!(calculate_recycling_fee(&large), dec("1875400")); // 93.77
    }

    #[test]
    fn test_non_individual_above_top_keeps_published_asymmetry() {
        let new = request(ImporterCategory::LegalEntity, 2, EngineKind::Gasoline, 3600);
        assert_eq!(calculate_recycling_fee(&new), dec("2742200")); // 137.11

        // Older cars in this band carry the smaller published coefficient.
        let old = request(ImporterCategory::LegalEntity, 9, EngineKind::Gasoline, 3600);
        assert_eq!(calculate_recycling_fee(&old), dec("1604800")); // 80.24
        assert!(calculate_recycling_fee(&old) < calculate_recycling_fee(&new));
    }

    #[test]
    fn test_age_three_counts_as_new() {
        let req = request(ImporterCategory::LegalEntity, 3, EngineKind::Gasoline, 2000);
        assert_eq!(calculate_recycling_fee(&req), dec("667400")); // 33.37
    }
}
