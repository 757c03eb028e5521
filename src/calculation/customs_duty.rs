//! Customs duty calculation.
//!
//! The duty is the main import tariff. Which schedule applies depends on the
//! engine kind and, for combustion engines, on the importer category:
//!
//! - electric cars pay a flat share of the declared ruble price;
//! - hybrids use an age-keyed euro schedule;
//! - gasoline/diesel cars imported by private persons use price bands when
//!   new and volume bands when used;
//! - gasoline/diesel cars imported by legal entities use a volume-by-age
//!   grid.
//!
//! All euro-denominated schedules produce a euro amount that is converted
//! back through the supplied exchange rate as the final step.

use rust_decimal::Decimal;

use crate::models::{ClearanceRequest, EngineKind};

use super::bands::{self, Band, per_mille, rate};

/// Share of the declared ruble price charged for electric cars.
const ELECTRIC_PRICE_RATIO_HUNDREDTHS: i64 = 15;

/// Private import, car up to 3 years old:
/// (inclusive euro price upper bound, (price ratio, euros per cc)), rates in
/// hundredths. Duty is the larger of ratio x euro price and per-cc x volume.
const PRIVATE_NEW_PRICE_BANDS: [Band<(i64, i64)>; 5] = [
    (8_500, (54, 250)),
    (16_700, (48, 350)),
    (42_300, (48, 550)),
    (84_500, (48, 750)),
    (169_000, (48, 1_500)),
];
const PRIVATE_NEW_ABOVE_TOP: (i64, i64) = (48, 2_000);

/// Private import, car over 3 years old:
/// (inclusive volume upper bound in cc, (per-cc rate for 3-5 years, per-cc
/// rate over 5 years)), rates in hundredths of a euro.
const PRIVATE_USED_VOLUME_BANDS: [Band<(i64, i64)>; 5] = [
    (1_000, (150, 300)),
    (1_500, (170, 320)),
    (1_800, (250, 350)),
    (2_300, (270, 480)),
    (3_000, (300, 500)),
];
const PRIVATE_USED_ABOVE_TOP: (i64, i64) = (360, 570);

/// Duty rates for one legal-entity volume band.
#[derive(Clone, Copy)]
struct LegalDutyRates {
    /// Share of the euro price for cars up to 3 years old, in thousandths.
    new_price_ratio: i64,
    /// Per-cc floor for 3-7 year old cars, in hundredths of a euro.
    mid_per_cc: i64,
    /// Per-cc rate for cars over 7 years old, in hundredths of a euro.
    old_per_cc: i64,
}

/// Share of the euro price that 3-7 year old legal-entity imports pay when
/// it exceeds the per-cc floor.
const LEGAL_MID_AGE_PRICE_RATIO_HUNDREDTHS: i64 = 20;

const LEGAL_GASOLINE_VOLUME_BANDS: [Band<LegalDutyRates>; 6] = [
    (
        1_000,
        LegalDutyRates {
            new_price_ratio: 150,
            mid_per_cc: 36,
            old_per_cc: 140,
        },
    ),
    (
        1_500,
        LegalDutyRates {
            new_price_ratio: 150,
            mid_per_cc: 40,
            old_per_cc: 150,
        },
    ),
    (
        1_800,
        LegalDutyRates {
            new_price_ratio: 150,
            mid_per_cc: 36,
            old_per_cc: 160,
        },
    ),
    (
        2_300,
        LegalDutyRates {
            new_price_ratio: 150,
            mid_per_cc: 44,
            old_per_cc: 220,
        },
    ),
    (
        2_800,
        LegalDutyRates {
            new_price_ratio: 150,
            mid_per_cc: 44,
            old_per_cc: 220,
        },
    ),
    (
        3_000,
        LegalDutyRates {
            new_price_ratio: 125,
            mid_per_cc: 44,
            old_per_cc: 220,
        },
    ),
];
const LEGAL_GASOLINE_ABOVE_TOP: LegalDutyRates = LegalDutyRates {
    new_price_ratio: 125,
    mid_per_cc: 80,
    old_per_cc: 320,
};

const LEGAL_DIESEL_VOLUME_BANDS: [Band<LegalDutyRates>; 2] = [
    (
        1_500,
        LegalDutyRates {
            new_price_ratio: 150,
            mid_per_cc: 32,
            old_per_cc: 150,
        },
    ),
    (
        2_500,
        LegalDutyRates {
            new_price_ratio: 150,
            mid_per_cc: 40,
            old_per_cc: 220,
        },
    ),
];
const LEGAL_DIESEL_ABOVE_TOP: LegalDutyRates = LegalDutyRates {
    new_price_ratio: 150,
    mid_per_cc: 80,
    old_per_cc: 320,
};

/// Calculates the customs duty for a clearance request, in rubles.
///
/// # Examples
///
/// ```
/// use clearance_engine::calculation::calculate_customs_duty;
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
/// // 8000 EUR falls in the lowest new-car band: max(0.54 x 8000, 2.5 x 1600).
/// assert_eq!(calculate_customs_duty(&request), Decimal::from(432_000));
/// ```
pub fn calculate_customs_duty(request: &ClearanceRequest) -> Decimal {
    match request.engine_kind {
        EngineKind::Electric => electric_duty(request.car_price_rub),
        EngineKind::Hybrid => hybrid_duty(request),
        EngineKind::Gasoline | EngineKind::Diesel => {
            if request.importer_category.is_private_import() {
                private_combustion_duty(request)
            } else {
                legal_combustion_duty(request)
            }
        }
    }
}

/// Electric cars: flat share of the declared ruble price, no euro
/// conversion, same for every importer category and age.
fn electric_duty(car_price_rub: Decimal) -> Decimal {
    car_price_rub * rate(ELECTRIC_PRICE_RATIO_HUNDREDTHS)
}

// TODO: confirm the hybrid schedule with the upstream tariff source; the
// published rows are ambiguous (the 6-7 year and over-7-year rows share a
// rate, and the exchange rate applies to the whole age-selected expression).
fn hybrid_duty(request: &ClearanceRequest) -> Decimal {
    let volume = Decimal::from(request.engine_volume_cc);
    let in_euro = match request.car_age_years {
        0..=3 => (request.price_in_euro() * rate(48)).max(volume * rate(550)),
        4..=5 => volume * rate(250),
        6..=7 => volume * rate(350),
        _ => volume * rate(350),
    };
    request.euro_to_rub_rate * in_euro
}

/// Gasoline/diesel imported by a private person (with or without intent to
/// resell). New cars are priced by euro-price band with a per-cc floor; used
/// cars pay a flat per-cc rate with two age tiers.
fn private_combustion_duty(request: &ClearanceRequest) -> Decimal {
    let volume = Decimal::from(request.engine_volume_cc);
    let in_euro = if request.car_age_years <= 3 {
        let price_eur = request.price_in_euro();
        let (price_ratio, per_cc) =
            bands::lookup_decimal(&PRIVATE_NEW_PRICE_BANDS, PRIVATE_NEW_ABOVE_TOP, price_eur);
        (price_eur * rate(price_ratio)).max(volume * rate(per_cc))
    } else {
        let (mid_per_cc, old_per_cc) = bands::lookup(
            &PRIVATE_USED_VOLUME_BANDS,
            PRIVATE_USED_ABOVE_TOP,
            request.engine_volume_cc,
        );
        let per_cc = if request.car_age_years <= 5 {
            mid_per_cc
        } else {
            old_per_cc
        };
        volume * rate(per_cc)
    };
    request.euro_to_rub_rate * in_euro
}

/// Gasoline/diesel imported by a legal entity: a volume-band grid crossed
/// with three age tiers.
fn legal_combustion_duty(request: &ClearanceRequest) -> Decimal {
    let rates = match request.engine_kind {
        EngineKind::Diesel => bands::lookup(
            &LEGAL_DIESEL_VOLUME_BANDS,
            LEGAL_DIESEL_ABOVE_TOP,
            request.engine_volume_cc,
        ),
        _ => bands::lookup(
            &LEGAL_GASOLINE_VOLUME_BANDS,
            LEGAL_GASOLINE_ABOVE_TOP,
            request.engine_volume_cc,
        ),
    };

    let volume = Decimal::from(request.engine_volume_cc);
    let in_euro = match request.car_age_years {
        0..=3 => request.price_in_euro() * per_mille(rates.new_price_ratio),
        4..=7 => (request.price_in_euro() * rate(LEGAL_MID_AGE_PRICE_RATIO_HUNDREDTHS))
            .max(volume * rate(rates.mid_per_cc)),
        _ => volume * rate(rates.old_per_cc),
    };
    request.euro_to_rub_rate * in_euro
}
