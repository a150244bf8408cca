//! # Price Formatting
//!
//! Compact Indian-notation rendering of rupee amounts.
//!
//! ## Format Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  amount >= 1,00,000 (one lakh)                                          │
//! │      → "₹{lakhs rounded to 1 decimal} Lakh"                             │
//! │      → pluralized to "Lakhs" when the ROUNDED value is > 1.0            │
//! │                                                                         │
//! │  amount < 1,00,000                                                      │
//! │      → "₹{amount rounded to nearest thousand}k"                         │
//! │                                                                         │
//! │  220000 → "₹2.2 Lakhs"      100000 → "₹1.0 Lakh"                        │
//! │   99999 → "₹100k"            74539 → "₹75k"                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The pluralization check runs AFTER rounding, so an amount slightly
//! above one lakh that rounds to 1.0 still renders singular
//! (104999 → "₹1.0 Lakh"). The frontend has always shown it that way;
//! keep the order.

use crate::money::Rupees;

/// One lakh, the Indian numbering unit of 100,000.
pub const LAKH: u64 = 100_000;

/// Formats a rupee amount in compact Indian notation.
///
/// Pure formatting; the input is not validated or mutated beyond the
/// branch condition. All rounding is integer (half rounds up).
///
/// ## Example
/// ```rust
/// use decora_core::format::format_indian_price;
/// use decora_core::money::Rupees;
///
/// assert_eq!(format_indian_price(Rupees::new(795_557)), "₹8.0 Lakhs");
/// assert_eq!(format_indian_price(Rupees::new(74_539)), "₹75k");
/// ```
pub fn format_indian_price(amount: Rupees) -> String {
    let rupees = amount.amount();

    if rupees >= LAKH {
        // Lakhs rounded to one decimal, carried as integer tenths
        let tenths = (rupees * 10 + LAKH / 2) / LAKH;
        let unit = if tenths > 10 { "Lakhs" } else { "Lakh" };
        format!("₹{}.{} {}", tenths / 10, tenths % 10, unit)
    } else {
        let thousands = (rupees + 500) / 1000;
        format!("₹{thousands}k")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands_branch_rounds_to_nearest() {
        assert_eq!(format_indian_price(Rupees::new(74_539)), "₹75k");
        assert_eq!(format_indian_price(Rupees::new(74_499)), "₹74k");
        assert_eq!(format_indian_price(Rupees::new(500)), "₹1k");
        assert_eq!(format_indian_price(Rupees::new(0)), "₹0k");
    }

    #[test]
    fn test_lakh_boundary() {
        // 99999 stays in the thousands branch and rounds up to 100k
        assert_eq!(format_indian_price(Rupees::new(99_999)), "₹100k");
        // exactly one lakh is singular
        assert_eq!(format_indian_price(Rupees::new(100_000)), "₹1.0 Lakh");
    }

    #[test]
    fn test_lakh_pluralization() {
        assert_eq!(format_indian_price(Rupees::new(220_000)), "₹2.2 Lakhs");
        assert_eq!(format_indian_price(Rupees::new(150_000)), "₹1.5 Lakhs");
        assert_eq!(format_indian_price(Rupees::new(110_000)), "₹1.1 Lakhs");
    }

    #[test]
    fn test_rounded_to_one_point_zero_stays_singular() {
        // 104999 → 1.04999 lakhs → rounds to 1.0 → singular, even
        // though the true value exceeds one lakh
        assert_eq!(format_indian_price(Rupees::new(104_999)), "₹1.0 Lakh");
        // and the first amount that rounds to 1.1 is plural
        assert_eq!(format_indian_price(Rupees::new(105_000)), "₹1.1 Lakhs");
    }

    #[test]
    fn test_large_amounts() {
        assert_eq!(format_indian_price(Rupees::new(795_557)), "₹8.0 Lakhs");
        assert_eq!(format_indian_price(Rupees::new(1_234_567)), "₹12.3 Lakhs");
    }
}
