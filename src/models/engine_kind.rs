//! Engine kind model.

use serde::{Deserialize, Serialize};

/// Represents the kind of engine installed in the imported car.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineKind {
    /// Gasoline internal combustion engine.
    Gasoline,
    /// Diesel internal combustion engine.
    Diesel,
    /// Combined combustion/electric drive.
    Hybrid,
    /// Fully electric drive.
    Electric,
}

impl EngineKind {
    /// Returns true for a fully electric drive.
    ///
    /// Electric cars are priced off the declared ruble price alone and use a
    /// dedicated recycling-fee coefficient pair.
    pub fn is_electric(self) -> bool {
        self == EngineKind::Electric
    }
}
