//! # Price Estimator
//!
//! Pure functions mapping (tier, requirements) to a package total.
//!
//! ## Estimation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  RequirementSet { kitchen:1, wardrobe:3, entertainmentUnit:1, ... }     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  calculate_package_price(Comfort, requirements) ← per tier              │
//! │       │                                                                 │
//! │       │  total = otherInteriors                                         │
//! │       │  total += count × unit_price   (for every positive count)      │
//! │       ▼                                                                 │
//! │  ₹795,557                                                               │
//! │                                                                         │
//! │  calculate_all_estimates(requirements)                                  │
//! │       └── runs the single-tier estimator once per tier                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Determinism: results depend only on the inputs and the constant
//! catalog. No side effects, no randomness, no I/O, and all arithmetic
//! is integer with no mid-calculation rounding.

use crate::catalog::PricingTable;
use crate::money::Rupees;
use crate::types::{Estimates, PackageTier, RequirementSet};

/// Computes the total price of one package tier for a requirement set.
///
/// The tier's `other_interiors` base charge is always included; each
/// item with a positive count contributes `count × unit_price`. Zero
/// counts contribute nothing.
///
/// ## Example
/// ```rust
/// use decora_core::estimate::calculate_package_price;
/// use decora_core::types::{LineItemId, PackageTier, RequirementSet};
///
/// let requirements = RequirementSet::new().with(LineItemId::Kitchen, 1);
/// let total = calculate_package_price(PackageTier::Comfort, &requirements);
/// assert_eq!(total.amount(), 390_000); // 170000 base + 220000 kitchen
/// ```
pub fn calculate_package_price(tier: PackageTier, requirements: &RequirementSet) -> Rupees {
    let table = PricingTable::for_tier(tier);

    let mut total = table.other_interiors;
    for (item, count) in requirements.iter() {
        if count > 0 {
            total += table.unit_price(item) * count;
        }
    }

    total
}

/// Computes all three package totals for a requirement set.
///
/// Calls the single-tier estimator once per tier; every call is
/// independent and idempotent, with no cross-tier computation or
/// caching.
pub fn calculate_all_estimates(requirements: &RequirementSet) -> Estimates {
    Estimates {
        essential: calculate_package_price(PackageTier::Essential, requirements),
        comfort: calculate_package_price(PackageTier::Comfort, requirements),
        luxury: calculate_package_price(PackageTier::Luxury, requirements),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LineItemId;

    #[test]
    fn test_zero_requirements_floor_is_the_base_charge() {
        let empty = RequirementSet::new();

        assert_eq!(
            calculate_package_price(PackageTier::Essential, &empty),
            Rupees::new(110_000)
        );
        assert_eq!(
            calculate_package_price(PackageTier::Comfort, &empty),
            Rupees::new(170_000)
        );
        assert_eq!(
            calculate_package_price(PackageTier::Luxury, &empty),
            Rupees::new(190_000)
        );
    }

    #[test]
    fn test_linearity_per_item() {
        // kitchen=n alone must price at base + n × kitchen unit price
        for tier in PackageTier::ALL {
            let table = PricingTable::for_tier(tier);
            for n in 0..=5u32 {
                let requirements = RequirementSet::new().with(LineItemId::Kitchen, n);
                let expected = table.other_interiors + table.kitchen * n;
                assert_eq!(
                    calculate_package_price(tier, &requirements),
                    expected,
                    "{tier} kitchen={n}"
                );
            }
        }
    }

    #[test]
    fn test_explicit_zero_counts_contribute_nothing() {
        let empty = RequirementSet::new();
        let zeroed = RequirementSet::new()
            .with(LineItemId::Kitchen, 0)
            .with(LineItemId::Wardrobe, 0)
            .with(LineItemId::CrockeryUnit, 0);

        for tier in PackageTier::ALL {
            assert_eq!(
                calculate_package_price(tier, &zeroed),
                calculate_package_price(tier, &empty)
            );
        }
    }

    #[test]
    fn test_monotonicity_across_tiers() {
        let samples = [
            RequirementSet::new(),
            RequirementSet::new().with(LineItemId::Kitchen, 1),
            RequirementSet::new()
                .with(LineItemId::Kitchen, 1)
                .with(LineItemId::Wardrobe, 4),
            RequirementSet::new()
                .with(LineItemId::Kitchen, 1)
                .with(LineItemId::Wardrobe, 2)
                .with(LineItemId::EntertainmentUnit, 2)
                .with(LineItemId::StudyUnit, 3)
                .with(LineItemId::CrockeryUnit, 2),
        ];

        for requirements in &samples {
            let estimates = calculate_all_estimates(requirements);
            assert!(estimates.essential <= estimates.comfort);
            assert!(estimates.comfort <= estimates.luxury);
        }
    }

    #[test]
    fn test_three_bhk_comfort_worked_example() {
        // 3BHK: kitchen 1, wardrobe 3, entertainment 1, study 0, crockery 1
        // comfort = 170000 + 220000 + 3×93519 + 70000 + 0 + 55000 = 795557
        let requirements = RequirementSet::new()
            .with(LineItemId::Kitchen, 1)
            .with(LineItemId::Wardrobe, 3)
            .with(LineItemId::EntertainmentUnit, 1)
            .with(LineItemId::StudyUnit, 0)
            .with(LineItemId::CrockeryUnit, 1);

        assert_eq!(
            calculate_package_price(PackageTier::Comfort, &requirements),
            Rupees::new(795_557)
        );
    }

    #[test]
    fn test_all_estimates_matches_single_tier_calls() {
        let requirements = RequirementSet::new()
            .with(LineItemId::Kitchen, 1)
            .with(LineItemId::Wardrobe, 2);

        let estimates = calculate_all_estimates(&requirements);
        for tier in PackageTier::ALL {
            assert_eq!(
                estimates.for_tier(tier),
                calculate_package_price(tier, &requirements)
            );
        }
    }
}
