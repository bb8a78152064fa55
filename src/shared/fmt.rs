//! Amount formatting for display.
//!
//! Amounts are shown in Indian digit grouping (`12,34,567`): the last three
//! integer digits form one group, every group before that has two digits.

use rust_decimal::{Decimal, RoundingStrategy};

/// Group an unsigned run of integer digits the Indian way.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Trims trailing zeros, adds Indian thousands separators.
pub fn display_formatted_string(formatted: String) -> String {
    let trimmed = if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    };

    let (sign, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed.as_str()),
    };

    let mut parts = unsigned.splitn(2, '.');
    let integer_part = group_indian(parts.next().unwrap_or_default());
    match parts.next() {
        Some(fraction) => format!("{sign}{integer_part}.{fraction}"),
        None => format!("{sign}{integer_part}"),
    }
}

/// Format an amount with at most two decimals: `1,23,456.5`.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let rendered = if rounded.is_zero() {
        "0".to_string()
    } else {
        format!("{:.2}", rounded)
    };
    display_formatted_string(rendered)
}

/// Format an amount in rupees: `₹1,23,456.5`, `-₹250`.
pub fn format_inr(amount: Decimal) -> String {
    let formatted = format_amount(amount);
    match formatted.strip_prefix('-') {
        Some(rest) => format!("-₹{rest}"),
        None => format!("₹{formatted}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_display_formatted_string_small_values() {
        assert_eq!(display_formatted_string("0".to_string()), "0");
        assert_eq!(display_formatted_string("123".to_string()), "123");
        assert_eq!(display_formatted_string("999.50".to_string()), "999.5");
    }

    #[test]
    fn test_display_formatted_string_indian_grouping() {
        assert_eq!(display_formatted_string("1000".to_string()), "1,000");
        assert_eq!(display_formatted_string("100000".to_string()), "1,00,000");
        assert_eq!(display_formatted_string("1234567".to_string()), "12,34,567");
        assert_eq!(display_formatted_string("123456789".to_string()), "12,34,56,789");
        assert_eq!(display_formatted_string("-1234567.00".to_string()), "-12,34,567");
    }

    #[test]
    fn test_format_amount_rounds_to_two_places() {
        assert_eq!(format_amount(Decimal::from_str("1234.567").unwrap()), "1,234.57");
        assert_eq!(format_amount(Decimal::from_str("250.00").unwrap()), "250");
        assert_eq!(format_amount(Decimal::ZERO), "0");
    }

    #[test]
    fn test_format_inr() {
        assert_eq!(format_inr(Decimal::from(150000)), "₹1,50,000");
        assert_eq!(format_inr(Decimal::from(-250)), "-₹250");
    }
}
