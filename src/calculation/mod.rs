//! Calculation logic for the Customs Clearance Engine.
//!
//! This module contains the calculation functions for each fee component of
//! a customs clearance (customs fee, customs duty, excise tax, VAT and
//! recycling fee) and the orchestrator that validates a request, runs all
//! five and assembles the cost breakdown.

mod bands;
mod clearance;
mod customs_duty;
mod customs_fee;
mod excise_tax;
mod recycling_fee;
mod vat;

pub use clearance::calculate_clearance;
pub use customs_duty::calculate_customs_duty;
pub use customs_fee::calculate_customs_fee;
pub use excise_tax::calculate_excise_tax;
pub use recycling_fee::{RECYCLING_BASE_RATE_RUB, calculate_recycling_fee};
pub use vat::{calculate_vat, vat_rate};
