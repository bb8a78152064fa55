//! Strict parsing of admin-entered amounts.
//!
//! Form input is validated before any request is sent. Unlike the lenient
//! wire parsing in [`super::serde_util`], these reject anything that is not a
//! clean, finite number.

use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

/// Why an admin-entered amount was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    #[error("Amount is required")]
    Empty,

    #[error("Amount must be a number: {0}")]
    NotANumber(String),

    #[error("Amount must be greater than zero")]
    NotPositive,

    #[error("Amount cannot be negative")]
    Negative,
}

fn parse_number(input: &str) -> Result<Decimal, AmountError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AmountError::Empty);
    }
    Decimal::from_str(trimmed).map_err(|_| AmountError::NotANumber(trimmed.to_string()))
}

/// Parse a strictly positive amount (fund adjustments, bet points).
pub fn parse_amount(input: &str) -> Result<Decimal, AmountError> {
    let value = parse_number(input)?;
    if value <= Decimal::ZERO {
        return Err(AmountError::NotPositive);
    }
    Ok(value.normalize())
}

/// Parse an amount that may be zero (minimum limits; zero disables the floor).
pub fn parse_non_negative_amount(input: &str) -> Result<Decimal, AmountError> {
    let value = parse_number(input)?;
    if value < Decimal::ZERO {
        return Err(AmountError::Negative);
    }
    Ok(value.normalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_accepts_clean_numbers() {
        assert_eq!(parse_amount("500"), Ok(Decimal::from(500)));
        assert_eq!(parse_amount(" 12.50 "), Ok(Decimal::new(125, 1)));
    }

    #[test]
    fn test_parse_amount_rejects_bad_input() {
        assert_eq!(parse_amount(""), Err(AmountError::Empty));
        assert_eq!(parse_amount("   "), Err(AmountError::Empty));
        assert_eq!(
            parse_amount("12abc"),
            Err(AmountError::NotANumber("12abc".to_string()))
        );
        assert_eq!(parse_amount("NaN"), Err(AmountError::NotANumber("NaN".to_string())));
        assert_eq!(parse_amount("0"), Err(AmountError::NotPositive));
        assert_eq!(parse_amount("-5"), Err(AmountError::NotPositive));
    }

    #[test]
    fn test_parse_non_negative_amount() {
        assert_eq!(parse_non_negative_amount("0"), Ok(Decimal::ZERO));
        assert_eq!(parse_non_negative_amount("10"), Ok(Decimal::from(10)));
        assert_eq!(parse_non_negative_amount("-1"), Err(AmountError::Negative));
    }
}
