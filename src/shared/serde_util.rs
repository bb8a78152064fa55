//! Custom serde helpers for backend wire formats.
//!
//! The backend is loosely typed: numbers arrive as JSON numbers or strings,
//! timestamps as ISO strings or epoch milliseconds, and lists either bare or
//! wrapped in an envelope object.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use std::str::FromStr;

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Str(String),
    Num(serde_json::Number),
}

/// Deserializes a string or a number into its string form.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::Str(s) => s,
        StringOrNumber::Num(n) => n.to_string(),
    })
}

/// Like [`string_or_number`], but `null` or a missing field gives `None`.
pub fn optional_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<StringOrNumber>::deserialize(deserializer)?.map(|v| match v {
            StringOrNumber::Str(s) => s,
            StringOrNumber::Num(n) => n.to_string(),
        }),
    )
}

/// Parse the longest numeric prefix of `input`, defaulting to zero.
///
/// Matches how form values and loosely-typed backend fields are read:
/// `"250"` → 250, `" 12.5 "` → 12.5, `"100abc"` → 100, `"abc"` → 0.
pub fn parse_decimal_lenient(input: &str) -> Decimal {
    let trimmed = input.trim();
    if let Ok(d) = Decimal::from_str(trimmed) {
        return d;
    }
    if trimmed.contains(['e', 'E']) {
        if let Ok(d) = Decimal::from_scientific(trimmed) {
            return d;
        }
    }

    let mut end = 0;
    let mut seen_dot = false;
    let mut seen_digit = false;
    for (i, c) in trimmed.char_indices() {
        match c {
            '+' | '-' if i == 0 => {}
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = i + c.len_utf8();
    }

    if !seen_digit {
        return Decimal::ZERO;
    }
    Decimal::from_str(trimmed[..end].trim_end_matches('.')).unwrap_or(Decimal::ZERO)
}

/// Lenient decimal from an arbitrary JSON value. Anything unparsable is zero.
pub fn decimal_from_value(value: &serde_json::Value) -> Decimal {
    match value {
        serde_json::Value::Number(n) => parse_decimal_lenient(&n.to_string()),
        serde_json::Value::String(s) => parse_decimal_lenient(s),
        _ => Decimal::ZERO,
    }
}

/// `deserialize_with` helper: a number/string/null field read as `Decimal`,
/// defaulting to zero.
pub mod lenient_decimal {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
        Ok(raw
            .as_ref()
            .map(super::decimal_from_value)
            .unwrap_or(Decimal::ZERO))
    }
}

/// `deserialize_with` helper: ISO 8601 string, `YYYY-MM-DD HH:MM:SS` (UTC),
/// or epoch milliseconds into `Option<DateTime<Utc>>`. Unparsable input is `None`.
pub mod flexible_timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
        Ok(raw.as_ref().and_then(parse))
    }

    pub fn parse(value: &serde_json::Value) -> Option<DateTime<Utc>> {
        match value {
            serde_json::Value::Number(n) => n
                .as_i64()
                .and_then(DateTime::<Utc>::from_timestamp_millis),
            serde_json::Value::String(s) => {
                let s = s.trim();
                DateTime::parse_from_rfc3339(s)
                    .map(|dt| dt.with_timezone(&Utc))
                    .ok()
                    .or_else(|| {
                        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
                            .ok()
                            .map(|n| n.and_utc())
                    })
            }
            _ => None,
        }
    }
}

// ─── Envelopes ───────────────────────────────────────────────────────────────

/// A list response: either a bare array or an object wrapping it.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Bare(Vec<T>),
    Wrapped(ListEnvelope<T>),
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListEnvelope<T> {
    #[serde(
        alias = "markets",
        alias = "games",
        alias = "limits",
        alias = "funds",
        alias = "history",
        alias = "bids",
        alias = "bets",
        alias = "winnings"
    )]
    pub data: Vec<T>,
}

impl<T> Listing<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Listing::Bare(items) => items,
            Listing::Wrapped(envelope) => envelope.data,
        }
    }
}

/// A single-record response: either wrapped in an object or bare.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Single<T> {
    Wrapped(SingleEnvelope<T>),
    Bare(T),
}

#[derive(Debug, Clone, Deserialize)]
pub struct SingleEnvelope<T> {
    #[serde(alias = "market", alias = "game", alias = "user", alias = "settings")]
    pub data: T,
}

impl<T> Single<T> {
    pub fn into_inner(self) -> T {
        match self {
            Single::Wrapped(envelope) => envelope.data,
            Single::Bare(item) => item,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    #[test]
    fn test_parse_decimal_lenient() {
        assert_eq!(parse_decimal_lenient("250"), Decimal::from(250));
        assert_eq!(parse_decimal_lenient(" 12.5 "), Decimal::new(125, 1));
        assert_eq!(parse_decimal_lenient("100abc"), Decimal::from(100));
        assert_eq!(parse_decimal_lenient("-7.25x"), Decimal::new(-725, 2));
        assert_eq!(parse_decimal_lenient("abc"), Decimal::ZERO);
        assert_eq!(parse_decimal_lenient(""), Decimal::ZERO);
        assert_eq!(parse_decimal_lenient("5."), Decimal::from(5));
    }

    #[test]
    fn test_decimal_from_value() {
        assert_eq!(decimal_from_value(&json!(99.5)), Decimal::new(995, 1));
        assert_eq!(decimal_from_value(&json!("1000")), Decimal::from(1000));
        assert_eq!(decimal_from_value(&json!(null)), Decimal::ZERO);
        assert_eq!(decimal_from_value(&json!(true)), Decimal::ZERO);
    }

    #[test]
    fn test_flexible_timestamp() {
        let expected = Utc.with_ymd_and_hms(2025, 3, 1, 10, 30, 0).unwrap();
        assert_eq!(flexible_timestamp::parse(&json!("2025-03-01T10:30:00Z")), Some(expected));
        assert_eq!(flexible_timestamp::parse(&json!("2025-03-01T16:00:00+05:30")), Some(expected));
        assert_eq!(flexible_timestamp::parse(&json!("2025-03-01 10:30:00")), Some(expected));
        assert_eq!(
            flexible_timestamp::parse(&json!(expected.timestamp_millis())),
            Some(expected)
        );
        assert_eq!(flexible_timestamp::parse(&json!("yesterday")), None);
    }

    #[test]
    fn test_listing_bare_and_wrapped() {
        let bare: Listing<u32> = serde_json::from_value(json!([1, 2, 3])).unwrap();
        assert_eq!(bare.into_vec(), vec![1, 2, 3]);

        let wrapped: Listing<u32> =
            serde_json::from_value(json!({"success": true, "data": [4, 5]})).unwrap();
        assert_eq!(wrapped.into_vec(), vec![4, 5]);

        let named: Listing<u32> = serde_json::from_value(json!({"bids": [6]})).unwrap();
        assert_eq!(named.into_vec(), vec![6]);
    }

    #[test]
    fn test_single_bare_and_wrapped() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Thing {
            name: String,
        }

        let bare: Single<Thing> = serde_json::from_value(json!({"name": "a"})).unwrap();
        assert_eq!(bare.into_inner().name, "a");

        let wrapped: Single<Thing> =
            serde_json::from_value(json!({"user": {"name": "b"}})).unwrap();
        assert_eq!(wrapped.into_inner().name, "b");
    }
}
