//! Price formatting over decimal arithmetic.
//!
//! Prices are plain `rust_decimal::Decimal` values in the store's single
//! currency; totals are exact decimal sums, never floats.

use rust_decimal::Decimal;

/// Format a decimal amount for display (e.g. `$250.00`).
#[must_use]
pub fn format_price(amount: Decimal) -> String {
    format!("${amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_two_decimal_places() {
        assert_eq!(format_price(Decimal::new(250, 0)), "$250.00");
        assert_eq!(format_price(Decimal::new(1205, 1)), "$120.50");
        assert_eq!(format_price(Decimal::ZERO), "$0.00");
    }

    #[test]
    fn test_format_keeps_cents_exact() {
        // 0.1 + 0.2 is exact in decimal arithmetic
        let total = Decimal::new(1, 1) + Decimal::new(2, 1);
        assert_eq!(format_price(total), "$0.30");
    }
}
