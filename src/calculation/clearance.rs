//! Clearance cost orchestration.
//!
//! Validates the request, computes the five fee components into locals and
//! assembles the immutable [`ClearanceCost`] once, so a partially populated
//! breakdown is never observable.

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::error::EngineResult;
use crate::models::{ClearanceCost, ClearanceRequest};

use super::customs_duty::calculate_customs_duty;
use super::customs_fee::calculate_customs_fee;
use super::excise_tax::calculate_excise_tax;
use super::recycling_fee::calculate_recycling_fee;
use super::vat::calculate_vat;

/// Decimal places kept when rounding monetary results.
const MONEY_SCALE: u32 = 2;

/// Calculates the full customs clearance cost for a request.
///
/// The five components are computed independently; VAT consumes the
/// unrounded duty and excise. With `round` set, every component is rounded
/// to two decimal places with banker's rounding before the breakdown is
/// assembled, so the derived total is the sum of the rounded fields. With
/// `round` unset the full precision is kept everywhere.
///
/// # Errors
///
/// Fails fast with a validation error before any fee is computed; see
/// [`ClearanceRequest::validate`].
///
/// # Examples
///
/// ```
/// use clearance_engine::calculation::calculate_clearance;
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
///
/// let cost = calculate_clearance(&request, true).unwrap();
/// assert_eq!(cost.total(), Decimal::from(439_669));
/// ```
pub fn calculate_clearance(request: &ClearanceRequest, round: bool) -> EngineResult<ClearanceCost> {
    request.validate()?;

    let customs_fee = calculate_customs_fee(request.car_price_rub);
    let customs_duty = calculate_customs_duty(request);
    let excise_tax = calculate_excise_tax(request.importer_category, request.engine_power_hp);
    let vat = calculate_vat(
        request.importer_category,
        request.car_price_rub,
        customs_duty,
        excise_tax,
    );
    let recycling_fee = calculate_recycling_fee(request);

    debug!(
        %customs_fee,
        %customs_duty,
        %excise_tax,
        %vat,
        %recycling_fee,
        "Computed clearance components"
    );

    let cost = if round {
        ClearanceCost {
            customs_fee: round_money(customs_fee),
            customs_duty: round_money(customs_duty),
            excise_tax: round_money(excise_tax),
            vat: round_money(vat),
            recycling_fee: round_money(recycling_fee),
        }
    } else {
        ClearanceCost {
            customs_fee,
            customs_duty,
            excise_tax,
            vat,
            recycling_fee,
        }
    };

    info!(
        importer_category = ?request.importer_category,
        engine_kind = ?request.engine_kind,
        car_age_years = request.car_age_years,
        total = %cost.total(),
        "Clearance calculation completed"
    );

    Ok(cost)
}

/// Rounds to two decimal places, half to even.
fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp(MONEY_SCALE)
}
