//! Customs Clearance Engine for imported passenger cars
//!
//! This crate computes the total customs clearance cost for importing a car
//! into Russia, based on the importer category, vehicle attributes and the
//! declared price, by applying the banded tariff schedule for customs fee,
//! customs duty, excise tax, VAT and recycling fee.

#![warn(missing_docs)]

pub mod calculation;
pub mod error;
pub mod models;
