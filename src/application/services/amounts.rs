//! Amount parsing and formatting shared by the transaction flows.

use crate::domain::errors::TransactionError;

/// Parses a raw amount string from the amount input field.
///
/// # Errors
/// Returns `EmptyAmount` when the trimmed input is empty, and
/// `InvalidAmount` when it does not parse to a finite positive number.
pub fn parse_amount(raw: &str) -> Result<f64, TransactionError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TransactionError::EmptyAmount);
    }

    let amount: f64 = trimmed
        .parse()
        .map_err(|_| TransactionError::InvalidAmount)?;

    if !amount.is_finite() || amount <= 0.0 {
        return Err(TransactionError::InvalidAmount);
    }

    Ok(amount)
}

/// Formats an amount to the two decimal places every display uses.
#[must_use]
pub fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("50", 50.0)]
    #[test_case("0.01", 0.01)]
    #[test_case(" 25.5 ", 25.5; "surrounding whitespace is trimmed")]
    #[test_case("1e3", 1000.0; "scientific notation")]
    fn test_valid_amounts(raw: &str, expected: f64) {
        assert_eq!(parse_amount(raw).unwrap(), expected);
    }

    #[test_case(""; "empty")]
    #[test_case("   "; "whitespace only")]
    fn test_empty_amounts(raw: &str) {
        assert!(matches!(parse_amount(raw), Err(TransactionError::EmptyAmount)));
    }

    #[test_case("0"; "zero")]
    #[test_case("-5"; "negative")]
    #[test_case("abc"; "not a number")]
    #[test_case("inf"; "infinite")]
    #[test_case("NaN"; "nan")]
    fn test_invalid_amounts(raw: &str) {
        assert!(matches!(
            parse_amount(raw),
            Err(TransactionError::InvalidAmount)
        ));
    }

    #[test]
    fn test_format_amount_pads_to_two_decimals() {
        assert_eq!(format_amount(1500.0), "1500.00");
        assert_eq!(format_amount(25.5), "25.50");
        assert_eq!(format_amount(0.0), "0.00");
    }
}
