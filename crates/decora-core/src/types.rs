//! # Domain Types
//!
//! Core domain types used throughout the Decora estimator.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  PropertyType   │   │  PackageTier    │   │   LineItemId    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  1BHK           │   │  Essential      │   │  Kitchen        │       │
//! │  │  2BHK           │   │  Comfort        │   │  Wardrobe       │       │
//! │  │  3BHK           │   │  Luxury         │   │  Entertainment  │       │
//! │  │  3+BHK          │   └─────────────────┘   │  Study          │       │
//! │  │  modular-kitchen│                         │  Crockery       │       │
//! │  └─────────────────┘                         └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ RequirementSet  │   │    Estimates    │   │CalculatorResult │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  item → count   │   │  essential ₹    │   │  bhkType        │       │
//! │  │                 │   │  comfort   ₹    │   │  requirements   │       │
//! │  │                 │   │  luxury    ₹    │   │  estimates      │       │
//! │  └─────────────────┘   └─────────────────┘   │  timestamp (ms) │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! All serde renames below match the persisted JSON record and the mobile
//! frontend's field names exactly: `"1BHK"`, `"entertainmentUnit"`,
//! `"bhkType"`, and so on.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ParsePropertyTypeError;
use crate::money::Rupees;

// =============================================================================
// Property Type
// =============================================================================

/// The kind of property an estimate is prepared for.
///
/// BHK is the Indian real-estate convention "Bedroom-Hall-Kitchen";
/// "2BHK" means two bedrooms. The bedroom count drives the wardrobe
/// ceiling, and `ModularKitchen` properties skip the requirement
/// checklist entirely (kitchen-layout selection substitutes for it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PropertyType {
    #[serde(rename = "1BHK")]
    OneBhk,
    #[serde(rename = "2BHK")]
    TwoBhk,
    #[serde(rename = "3BHK")]
    ThreeBhk,
    #[serde(rename = "3+BHK")]
    ThreeBhkPlus,
    #[serde(rename = "modular-kitchen")]
    ModularKitchen,
}

impl PropertyType {
    /// Every property type, in display order.
    pub const ALL: [PropertyType; 5] = [
        PropertyType::OneBhk,
        PropertyType::TwoBhk,
        PropertyType::ThreeBhk,
        PropertyType::ThreeBhkPlus,
        PropertyType::ModularKitchen,
    ];

    /// Maximum number of wardrobes for this property type.
    ///
    /// Wardrobe count cannot exceed the number of bedrooms the property
    /// type implies; modular-kitchen-only properties have zero bedrooms
    /// in this model.
    #[inline]
    pub const fn wardrobe_cap(&self) -> u32 {
        match self {
            PropertyType::OneBhk => 1,
            PropertyType::TwoBhk => 2,
            PropertyType::ThreeBhk => 3,
            PropertyType::ThreeBhkPlus => 4,
            PropertyType::ModularKitchen => 0,
        }
    }

    /// Whether this property goes through kitchen-layout selection
    /// instead of the requirement checklist.
    #[inline]
    pub const fn is_modular_kitchen(&self) -> bool {
        matches!(self, PropertyType::ModularKitchen)
    }

    /// The wire/display label, e.g. `"2BHK"`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            PropertyType::OneBhk => "1BHK",
            PropertyType::TwoBhk => "2BHK",
            PropertyType::ThreeBhk => "3BHK",
            PropertyType::ThreeBhkPlus => "3+BHK",
            PropertyType::ModularKitchen => "modular-kitchen",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = ParsePropertyTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1BHK" => Ok(PropertyType::OneBhk),
            "2BHK" => Ok(PropertyType::TwoBhk),
            "3BHK" => Ok(PropertyType::ThreeBhk),
            "3+BHK" => Ok(PropertyType::ThreeBhkPlus),
            "modular-kitchen" => Ok(PropertyType::ModularKitchen),
            other => Err(ParsePropertyTypeError(other.to_string())),
        }
    }
}

// =============================================================================
// Package Tier
// =============================================================================

/// One of the three fixed interior-design package levels.
///
/// Tiers are strictly ordered by price. Each tier defines a complete
/// price table of its own; no tier is derived from another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum PackageTier {
    Essential,
    Comfort,
    Luxury,
}

impl PackageTier {
    /// Every tier, cheapest first.
    pub const ALL: [PackageTier; 3] = [
        PackageTier::Essential,
        PackageTier::Comfort,
        PackageTier::Luxury,
    ];

    /// The wire/display label, e.g. `"comfort"`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            PackageTier::Essential => "essential",
            PackageTier::Comfort => "comfort",
            PackageTier::Luxury => "luxury",
        }
    }
}

impl fmt::Display for PackageTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Line Items
// =============================================================================

/// Identifier of one interior work category priced independently.
///
/// Serialized in camelCase to match the requirement map keys of the
/// persisted record (`"entertainmentUnit"`, not `"entertainment_unit"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum LineItemId {
    Kitchen,
    Wardrobe,
    EntertainmentUnit,
    StudyUnit,
    CrockeryUnit,
}

impl LineItemId {
    /// Every line item, in checklist order.
    pub const ALL: [LineItemId; 5] = [
        LineItemId::Kitchen,
        LineItemId::Wardrobe,
        LineItemId::EntertainmentUnit,
        LineItemId::StudyUnit,
        LineItemId::CrockeryUnit,
    ];
}

/// One selectable interior work category.
///
/// The icon reference is opaque here; the frontend resolves it against
/// its own asset bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineItem {
    pub id: LineItemId,
    /// Display label shown on the requirement checklist.
    pub label: &'static str,
    /// Asset reference for the checklist icon.
    pub icon: &'static str,
    /// Ceiling on the count when no property-type override applies.
    pub max_count: u32,
}

// =============================================================================
// Requirement Set
// =============================================================================

/// User-selected counts per line item.
///
/// Absent items count as zero. Serializes transparently as a JSON
/// object, e.g. `{"kitchen":1,"wardrobe":3}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(transparent)]
pub struct RequirementSet(BTreeMap<LineItemId, u32>);

impl RequirementSet {
    /// Creates an empty requirement set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the count for an item, replacing any previous value.
    pub fn set(&mut self, item: LineItemId, count: u32) {
        self.0.insert(item, count);
    }

    /// Builder-style variant of [`set`](Self::set).
    ///
    /// ## Example
    /// ```rust
    /// use decora_core::types::{LineItemId, RequirementSet};
    ///
    /// let requirements = RequirementSet::new()
    ///     .with(LineItemId::Kitchen, 1)
    ///     .with(LineItemId::Wardrobe, 2);
    /// assert_eq!(requirements.count(LineItemId::Wardrobe), 2);
    /// ```
    #[must_use]
    pub fn with(mut self, item: LineItemId, count: u32) -> Self {
        self.set(item, count);
        self
    }

    /// Returns the count for an item (zero when absent).
    pub fn count(&self, item: LineItemId) -> u32 {
        self.0.get(&item).copied().unwrap_or(0)
    }

    /// Iterates over the entries that were explicitly set.
    pub fn iter(&self) -> impl Iterator<Item = (LineItemId, u32)> + '_ {
        self.0.iter().map(|(item, count)| (*item, *count))
    }

    /// True when no item has been set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// =============================================================================
// Estimates
// =============================================================================

/// The three package totals for one requirement set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Estimates {
    pub essential: Rupees,
    pub comfort: Rupees,
    pub luxury: Rupees,
}

impl Estimates {
    /// Returns the total for one tier.
    pub const fn for_tier(&self, tier: PackageTier) -> Rupees {
        match tier {
            PackageTier::Essential => self.essential,
            PackageTier::Comfort => self.comfort,
            PackageTier::Luxury => self.luxury,
        }
    }
}

// =============================================================================
// Calculator Result
// =============================================================================

/// The persisted outcome of one completed calculation flow.
///
/// Stored under a single fixed key and overwritten (never appended) on
/// each new calculation; lifecycle is create-or-replace, read-many.
///
/// ## Wire Format
/// ```json
/// {
///   "bhkType": "3BHK",
///   "requirements": { "kitchen": 1, "wardrobe": 3 },
///   "estimates": { "essential": 645000, "comfort": 795557, "luxury": 1002000 },
///   "timestamp": 1722860000000
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorResult {
    /// Property type the estimate was prepared for.
    pub bhk_type: PropertyType,

    /// The user-selected counts the estimate was computed from.
    pub requirements: RequirementSet,

    /// Totals for all three package tiers.
    pub estimates: Estimates,

    /// When the calculation completed, as epoch milliseconds.
    pub timestamp: i64,
}

impl CalculatorResult {
    /// Creates a result record stamped with the given completion time.
    pub fn new(
        bhk_type: PropertyType,
        requirements: RequirementSet,
        estimates: Estimates,
        completed_at: DateTime<Utc>,
    ) -> Self {
        CalculatorResult {
            bhk_type,
            requirements,
            estimates,
            timestamp: completed_at.timestamp_millis(),
        }
    }

    /// The completion time as a `DateTime`, if the stored millis are in
    /// chrono's representable range.
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.timestamp).single()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
