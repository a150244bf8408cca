//! # Validation Module
//!
//! Requirement checklist validation for the estimator.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Checklist UI (out of scope here)                             │
//! │  ├── Increment/decrement controls clamped by effective_max_count       │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - central business rules                         │
//! │  ├── Kitchen is mandatory (non-modular property types)                 │
//! │  └── Wardrobe count within the bedroom-derived cap                     │
//! │                                                                         │
//! │  Only these two rules are re-checked centrally; the other items'       │
//! │  ceilings are input-time clamps, not validation failures.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use decora_core::types::{LineItemId, PropertyType, RequirementSet};
//! use decora_core::validation::validate_requirements;
//!
//! let requirements = RequirementSet::new()
//!     .with(LineItemId::Kitchen, 1)
//!     .with(LineItemId::Wardrobe, 2);
//!
//! validate_requirements(PropertyType::TwoBhk, &requirements).unwrap();
//! ```

use crate::catalog::effective_max_count;
use crate::error::{ValidationError, ValidationResult};
use crate::types::{LineItemId, PropertyType, RequirementSet};

/// Validates a requirement set against the property type's rules.
///
/// ## Rules
/// - `modular-kitchen` properties are always valid at this layer:
///   kitchen-layout selection (handled by the UI) substitutes for the
///   requirement checklist, so this validator defers entirely.
/// - Kitchen absent or zero fails with "Kitchen is required".
/// - Wardrobe count above [`effective_max_count`] for the property
///   type fails with the cap in the message.
///
/// Failures are returned as values; nothing is thrown or logged here.
pub fn validate_requirements(
    property_type: PropertyType,
    requirements: &RequirementSet,
) -> ValidationResult<()> {
    if property_type.is_modular_kitchen() {
        return Ok(());
    }

    if requirements.count(LineItemId::Kitchen) == 0 {
        return Err(ValidationError::KitchenRequired);
    }

    let cap = effective_max_count(LineItemId::Wardrobe, property_type);
    if requirements.count(LineItemId::Wardrobe) > cap {
        return Err(ValidationError::WardrobeLimitExceeded {
            max: cap,
            property_type,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kitchen_is_required() {
        let no_kitchen = RequirementSet::new().with(LineItemId::Kitchen, 0);

        let err = validate_requirements(PropertyType::OneBhk, &no_kitchen).unwrap_err();
        assert_eq!(err, ValidationError::KitchenRequired);
        assert_eq!(err.to_string(), "Kitchen is required");

        // Absent counts the same as zero
        let empty = RequirementSet::new();
        assert!(validate_requirements(PropertyType::OneBhk, &empty).is_err());
    }

    #[test]
    fn test_modular_kitchen_skips_the_checklist() {
        // Valid regardless of requirements, even an empty set
        assert!(validate_requirements(PropertyType::ModularKitchen, &RequirementSet::new()).is_ok());

        let over_everything = RequirementSet::new().with(LineItemId::Wardrobe, 99);
        assert!(validate_requirements(PropertyType::ModularKitchen, &over_everything).is_ok());
    }

    #[test]
    fn test_wardrobe_cap_rejection() {
        let requirements = RequirementSet::new()
            .with(LineItemId::Kitchen, 1)
            .with(LineItemId::Wardrobe, 3);

        let err = validate_requirements(PropertyType::TwoBhk, &requirements).unwrap_err();
        assert_eq!(
            err,
            ValidationError::WardrobeLimitExceeded {
                max: 2,
                property_type: PropertyType::TwoBhk,
            }
        );
        assert_eq!(
            err.to_string(),
            "Number of wardrobes can't exceed 2 for 2BHK"
        );
    }

    #[test]
    fn test_wardrobe_at_cap_is_accepted() {
        let requirements = RequirementSet::new()
            .with(LineItemId::Kitchen, 1)
            .with(LineItemId::Wardrobe, 2);

        assert!(validate_requirements(PropertyType::TwoBhk, &requirements).is_ok());
    }

    #[test]
    fn test_three_bhk_worked_example_is_valid() {
        let requirements = RequirementSet::new()
            .with(LineItemId::Kitchen, 1)
            .with(LineItemId::Wardrobe, 3)
            .with(LineItemId::EntertainmentUnit, 1)
            .with(LineItemId::StudyUnit, 0)
            .with(LineItemId::CrockeryUnit, 1);

        assert!(validate_requirements(PropertyType::ThreeBhk, &requirements).is_ok());
    }

    #[test]
    fn test_other_items_are_not_validated_centrally() {
        // Entertainment over its static ceiling still passes; the UI
        // clamps those counts at input time.
        let requirements = RequirementSet::new()
            .with(LineItemId::Kitchen, 1)
            .with(LineItemId::EntertainmentUnit, 50);

        assert!(validate_requirements(PropertyType::OneBhk, &requirements).is_ok());
    }
}
