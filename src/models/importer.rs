//! Importer category model.

use serde::{Deserialize, Serialize};

/// Represents the category of the party importing the car.
///
/// The category decides which duty schedule applies and whether excise tax
/// and VAT are levied at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImporterCategory {
    /// A private person importing the car for personal use.
    Individual,
    /// A private person importing with intent to resell within three years.
    PhysicalPersonWithResell,
    /// A company or other legal entity.
    LegalEntity,
}

impl ImporterCategory {
    /// Returns true if the importer is a legal entity.
    ///
    /// Excise tax and VAT apply only to legal-entity imports.
    ///
    /// # Examples
    ///
    /// ```
    /// use clearance_engine::models::ImporterCategory;
    ///
    /// assert!(ImporterCategory::LegalEntity.is_legal_entity());
    /// assert!(!ImporterCategory::Individual.is_legal_entity());
    /// ```
    pub fn is_legal_entity(self) -> bool {
        self == ImporterCategory::LegalEntity
    }

    /// Returns true if the importer is a private person (with or without
    /// intent to resell).
    ///
    /// Private imports of gasoline and diesel cars use the personal-use duty
    /// schedule rather than the legal-entity one.
    pub fn is_private_import(self) -> bool {
        matches!(
            self,
            ImporterCategory::Individual | ImporterCategory::PhysicalPersonWithResell
        )
    }
}
