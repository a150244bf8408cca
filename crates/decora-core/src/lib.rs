//! # decora-core: Pure Business Logic for the Decora Estimator
//!
//! This crate is the **heart** of the Decora interior-cost estimator.
//! It contains all business logic as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Decora Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Mobile Frontend (React Native)                  │   │
//! │  │    BHK Picker ──► Requirement Checklist ──► Estimate Screen    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ decora-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │ estimate  │  │ validation│  │  format   │  │   │
//! │  │   │ LineItems │  │ per-tier  │  │  kitchen  │  │ ₹x.y Lakh │  │   │
//! │  │   │ PriceTabs │  │  totals   │  │  wardrobe │  │   ₹nk     │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  decora-store (Storage Layer)                   │   │
//! │  │           Key-value port, SQLite store, saved result            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (PropertyType, PackageTier, RequirementSet, ...)
//! - [`money`] - Rupees type with integer arithmetic (no floating point!)
//! - [`catalog`] - Line-item catalog, per-tier price tables, count ceilings
//! - [`estimate`] - Package price estimator
//! - [`validation`] - Requirement checklist rules
//! - [`format`] - Compact Indian price notation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are whole rupees (u64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use decora_core::estimate::calculate_all_estimates;
//! use decora_core::types::{LineItemId, PropertyType, RequirementSet};
//! use decora_core::validation::validate_requirements;
//!
//! let requirements = RequirementSet::new()
//!     .with(LineItemId::Kitchen, 1)
//!     .with(LineItemId::Wardrobe, 2);
//!
//! validate_requirements(PropertyType::TwoBhk, &requirements)?;
//!
//! let estimates = calculate_all_estimates(&requirements);
//! assert!(estimates.essential <= estimates.luxury);
//! # Ok::<(), decora_core::error::ValidationError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod estimate;
pub mod format;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use decora_core::Rupees` instead of
// `use decora_core::money::Rupees`

pub use error::{ParsePropertyTypeError, ValidationError};
pub use money::Rupees;
pub use types::*;
