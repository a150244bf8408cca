//! # Error Types
//!
//! Domain-specific error types for decora-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  decora-core errors (this file)                                        │
//! │  ├── ValidationError          - Requirement rule violations            │
//! │  └── ParsePropertyTypeError   - Unknown property-type string           │
//! │                                                                         │
//! │  decora-store errors (separate crate)                                  │
//! │  └── StoreError               - Storage operation failures             │
//! │                                                                         │
//! │  Flow: ValidationError → surfaced verbatim to the user                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. Each validation variant's `Display` IS the user-facing message,
//!    character for character - the frontend shows it unchanged

use thiserror::Error;

use crate::types::PropertyType;

// =============================================================================
// Validation Error
// =============================================================================

/// Requirement checklist rule violations.
///
/// Returned as values, never panicked or logged as exceptions; the
/// caller (UI layer) is responsible for surfacing the message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Kitchen is the only unconditionally mandatory line item for
    /// non-modular property types.
    #[error("Kitchen is required")]
    KitchenRequired,

    /// Wardrobe count above the bedroom-derived ceiling for the
    /// selected property type.
    #[error("Number of wardrobes can't exceed {max} for {property_type}")]
    WardrobeLimitExceeded {
        max: u32,
        property_type: PropertyType,
    },
}

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Parse Errors
// =============================================================================

/// A string that names no known property type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown property type: {0}")]
pub struct ParsePropertyTypeError(pub String);

// =============================================================================
// Unit Tests
// =============================================================================
