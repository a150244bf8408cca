//! # Pricing Catalog
//!
//! The static line-item catalog and the per-tier price tables.
//!
//! ## Catalog Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Pricing Catalog                                    │
//! │                                                                         │
//! │  LINE_ITEMS                 price tables (₹, per unit)                 │
//! │  ──────────────             ──────────────────────────────────────     │
//! │  kitchen        max 1       item          essential comfort  luxury    │
//! │  wardrobe       max 4*      kitchen          180000  220000  280000    │
//! │  entertainment  max 2       wardrobe          72000   93519  120000    │
//! │  study          max 3       entertainment     52000   70000   92000    │
//! │  crockery       max 2       study             34000   45000   60000    │
//! │                             crockery          40000   55000   72000    │
//! │  (*) wardrobe max is        otherInteriors   110000  170000  190000    │
//! │      overridden per                                                     │
//! │      property type          every column is a complete, independent    │
//! │                             constant set; no tier derives another      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The tables are data, not logic: plain `const` values constructed at
//! compile time with no mutation path.

use crate::money::Rupees;
use crate::types::{LineItem, LineItemId, PackageTier, PropertyType};

// =============================================================================
// Line-Item Catalog
// =============================================================================

/// The five selectable interior work categories.
///
/// `max_count` is the increment ceiling used when no property-type
/// override applies; wardrobes are further capped per property type by
/// [`effective_max_count`].
pub const LINE_ITEMS: [LineItem; 5] = [
    LineItem {
        id: LineItemId::Kitchen,
        label: "Kitchen",
        icon: "icons/kitchen.png",
        max_count: 1,
    },
    LineItem {
        id: LineItemId::Wardrobe,
        label: "Wardrobe",
        icon: "icons/wardrobe.png",
        max_count: 4,
    },
    LineItem {
        id: LineItemId::EntertainmentUnit,
        label: "Entertainment Unit",
        icon: "icons/entertainment-unit.png",
        max_count: 2,
    },
    LineItem {
        id: LineItemId::StudyUnit,
        label: "Study Unit",
        icon: "icons/study-unit.png",
        max_count: 3,
    },
    LineItem {
        id: LineItemId::CrockeryUnit,
        label: "Crockery Unit",
        icon: "icons/crockery-unit.png",
        max_count: 2,
    },
];

/// Looks up a catalog entry by id.
pub fn line_item(id: LineItemId) -> Option<&'static LineItem> {
    LINE_ITEMS.iter().find(|item| item.id == id)
}

// =============================================================================
// Price Tables
// =============================================================================

/// Per-unit prices for one package tier, plus the base charge.
///
/// All prices are whole-rupee amounts. `other_interiors` is added
/// unconditionally to every estimate for the tier and is always
/// positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingTable {
    pub kitchen: Rupees,
    pub wardrobe: Rupees,
    pub entertainment_unit: Rupees,
    pub study_unit: Rupees,
    pub crockery_unit: Rupees,
    /// Base charge covering painting, false ceiling, and other
    /// non-itemized interior work.
    pub other_interiors: Rupees,
}

const ESSENTIAL: PricingTable = PricingTable {
    kitchen: Rupees::new(180_000),
    wardrobe: Rupees::new(72_000),
    entertainment_unit: Rupees::new(52_000),
    study_unit: Rupees::new(34_000),
    crockery_unit: Rupees::new(40_000),
    other_interiors: Rupees::new(110_000),
};

const COMFORT: PricingTable = PricingTable {
    kitchen: Rupees::new(220_000),
    wardrobe: Rupees::new(93_519),
    entertainment_unit: Rupees::new(70_000),
    study_unit: Rupees::new(45_000),
    crockery_unit: Rupees::new(55_000),
    other_interiors: Rupees::new(170_000),
};

const LUXURY: PricingTable = PricingTable {
    kitchen: Rupees::new(280_000),
    wardrobe: Rupees::new(120_000),
    entertainment_unit: Rupees::new(92_000),
    study_unit: Rupees::new(60_000),
    crockery_unit: Rupees::new(72_000),
    other_interiors: Rupees::new(190_000),
};

impl PricingTable {
    /// Returns the price table for a tier.
    pub const fn for_tier(tier: PackageTier) -> &'static PricingTable {
        match tier {
            PackageTier::Essential => &ESSENTIAL,
            PackageTier::Comfort => &COMFORT,
            PackageTier::Luxury => &LUXURY,
        }
    }

    /// Returns the per-unit price for a line item in this tier.
    pub const fn unit_price(&self, item: LineItemId) -> Rupees {
        match item {
            LineItemId::Kitchen => self.kitchen,
            LineItemId::Wardrobe => self.wardrobe,
            LineItemId::EntertainmentUnit => self.entertainment_unit,
            LineItemId::StudyUnit => self.study_unit,
            LineItemId::CrockeryUnit => self.crockery_unit,
        }
    }
}

// =============================================================================
// Effective-Max-Count Resolver
// =============================================================================

/// Ceiling on the count for one item under one property type.
///
/// ## Rules
/// - Wardrobes: the bedroom-derived cap of the property type
///   (1BHK→1, 2BHK→2, 3BHK→3, 3+BHK→4, modular-kitchen→0)
/// - Every other item: the catalog's static `max_count`
/// - An id missing from the catalog resolves to 0: unknown items are
///   disallowed, never unlimited
///
/// The UI uses this as the increment ceiling on the checklist; the
/// validator re-checks only the wardrobe rule centrally.
pub fn effective_max_count(item: LineItemId, property_type: PropertyType) -> u32 {
    if item == LineItemId::Wardrobe {
        return property_type.wardrobe_cap();
    }

    line_item(item).map(|entry| entry.max_count).unwrap_or(0)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wardrobe_cap_follows_property_type() {
        assert_eq!(
            effective_max_count(LineItemId::Wardrobe, PropertyType::OneBhk),
            1
        );
        assert_eq!(
            effective_max_count(LineItemId::Wardrobe, PropertyType::TwoBhk),
            2
        );
        assert_eq!(
            effective_max_count(LineItemId::Wardrobe, PropertyType::ThreeBhk),
            3
        );
        assert_eq!(
            effective_max_count(LineItemId::Wardrobe, PropertyType::ThreeBhkPlus),
            4
        );
        assert_eq!(
            effective_max_count(LineItemId::Wardrobe, PropertyType::ModularKitchen),
            0
        );
    }

    #[test]
    fn test_non_wardrobe_items_use_static_max() {
        // Property type never changes the ceiling of other items
        for property_type in PropertyType::ALL {
            assert_eq!(
                effective_max_count(LineItemId::Kitchen, property_type),
                1
            );
            assert_eq!(
                effective_max_count(LineItemId::StudyUnit, property_type),
                3
            );
        }
    }

    #[test]
    fn test_every_line_item_is_in_catalog() {
        for id in LineItemId::ALL {
            assert!(line_item(id).is_some(), "{id:?} missing from catalog");
        }
    }

    #[test]
    fn test_tier_prices_are_monotonic_per_item() {
        let essential = PricingTable::for_tier(PackageTier::Essential);
        let comfort = PricingTable::for_tier(PackageTier::Comfort);
        let luxury = PricingTable::for_tier(PackageTier::Luxury);

        for id in LineItemId::ALL {
            assert!(
                essential.unit_price(id) <= comfort.unit_price(id),
                "{id:?} essential price above comfort"
            );
            assert!(
                comfort.unit_price(id) <= luxury.unit_price(id),
                "{id:?} comfort price above luxury"
            );
        }

        assert!(essential.other_interiors <= comfort.other_interiors);
        assert!(comfort.other_interiors <= luxury.other_interiors);
    }

    #[test]
    fn test_base_charges_are_positive() {
        for tier in PackageTier::ALL {
            assert!(!PricingTable::for_tier(tier).other_interiors.is_zero());
        }
    }

    #[test]
    fn test_reference_base_charges() {
        assert_eq!(ESSENTIAL.other_interiors, Rupees::new(110_000));
        assert_eq!(COMFORT.other_interiors, Rupees::new(170_000));
        assert_eq!(LUXURY.other_interiors, Rupees::new(190_000));
    }
}
