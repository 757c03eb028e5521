//! Ordered tariff band lookup.
//!
//! Every schedule in the engine is a sequence of bands with inclusive upper
//! bounds; the applicable value is the one of the first band whose bound is
//! not exceeded by the input, with a dedicated above-top value once every
//! bound is.

use rust_decimal::Decimal;

/// An ordered tariff band: an inclusive upper bound and the value that
/// applies up to it.
pub(crate) type Band<T> = (u32, T);

/// Returns the value of the first band whose inclusive upper bound is not
/// exceeded by `input`, or `above_top` once every bound is.
pub(crate) fn lookup<T: Copy>(bands: &[Band<T>], above_top: T, input: u32) -> T {
    bands
        .iter()
        .find(|(upper, _)| input <= *upper)
        .map(|(_, value)| *value)
        .unwrap_or(above_top)
}

/// Band lookup for decimal inputs (prices) against whole-unit bounds.
pub(crate) fn lookup_decimal<T: Copy>(bands: &[Band<T>], above_top: T, input: Decimal) -> T {
    bands
        .iter()
        .find(|(upper, _)| input <= Decimal::from(*upper))
        .map(|(_, value)| *value)
        .unwrap_or(above_top)
}

/// Converts a rate stored in hundredths into an exact decimal.
///
/// Schedules store fractional rates as integers so the tables stay `const`;
/// `rate(48)` is 0.48 and `rate(550)` is 5.5.
pub(crate) fn rate(hundredths: i64) -> Decimal {
    Decimal::new(hundredths, 2)
}

/// Converts a ratio stored in thousandths into an exact decimal.
///
/// Needed for the 0.125 price ratio of the largest legal-entity volume
/// bands, which a hundredths grid cannot express.
pub(crate) fn per_mille(thousandths: i64) -> Decimal {
    Decimal::new(thousandths, 3)
}
