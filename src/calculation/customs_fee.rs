//! Customs fee calculation.
//!
//! The customs fee is a fixed administrative charge selected by the declared
//! ruble price of the car.

use rust_decimal::Decimal;

use super::bands::{self, Band};

/// (inclusive price upper bound in rubles, fee in rubles)
const CUSTOMS_FEE_BANDS: [Band<u32>; 7] = [
    (20_000, 1_067),
    (45_000, 2_134),
    (1_200_000, 4_269),
    (2_700_000, 11_746),
    (4_200_000, 16_524),
    (5_500_000, 21_344),
    (7_000_000, 27_540),
];

/// Fee for cars declared above the top band.
const CUSTOMS_FEE_ABOVE_TOP: u32 = 30_000;

/// Calculates the customs fee for a declared ruble price.
///
/// # Examples
///
/// ```
/// use clearance_engine::calculation::calculate_customs_fee;
/// use rust_decimal::Decimal;
///
/// assert_eq!(
///     calculate_customs_fee(Decimal::from(900_000)),
///     Decimal::from(4269)
/// );
/// ```
pub fn calculate_customs_fee(car_price_rub: Decimal) -> Decimal {
    let fee = bands::lookup_decimal(&CUSTOMS_FEE_BANDS, CUSTOMS_FEE_ABOVE_TOP, car_price_rub);
    Decimal::from(fee)
}
