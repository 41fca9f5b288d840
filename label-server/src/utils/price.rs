//! Amount formatting helpers
//!
//! Amounts are carried as `rust_decimal::Decimal` and shown with a dollar
//! sign and exactly two decimals, matching what ends up on the label.

use rust_decimal::Decimal;

/// Format an amount as a currency string
///
/// # Examples
///
/// ```
/// use label_server::utils::price::format_amount;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_amount(&Decimal::from_str("9.99").unwrap()), "$9.99");
/// assert_eq!(format_amount(&Decimal::from_str("100").unwrap()), "$100.00");
/// ```
pub fn format_amount(amount: &Decimal) -> String {
    format!("${:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_format_amount() {
        for (raw, expected) in [
            ("9.99", "$9.99"),
            ("0", "$0.00"),
            ("0.5", "$0.50"),
            ("100.00", "$100.00"),
            ("1234.567", "$1234.57"),
        ] {
            assert_eq!(format_amount(&Decimal::from_str(raw).unwrap()), expected);
        }
    }
}
