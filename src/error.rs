//! Error types for the Customs Clearance Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during a clearance calculation.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Customs Clearance Engine.
///
/// All validation failures are reported through this type before any
/// computation proceeds, so a caller never receives a partial result.
///
/// # Example
///
/// ```
/// use clearance_engine::error::EngineError;
/// use rust_decimal::Decimal;
///
/// let error = EngineError::InvalidRate { rate: Decimal::ZERO };
/// assert_eq!(
///     error.to_string(),
///     "Invalid euro exchange rate: 0 (must be positive)"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The euro-to-ruble exchange rate was zero or negative.
    #[error("Invalid euro exchange rate: {rate} (must be positive)")]
    InvalidRate {
        /// The rate that was supplied.
        rate: Decimal,
    },

    /// The declared car price was negative.
    #[error("Invalid car price: {price} (must not be negative)")]
    InvalidPrice {
        /// The price that was supplied.
        price: Decimal,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
