//! Shared newtypes and utilities used across all domain modules.
//!
//! The id newtypes are serialization-tolerant: the backend sends ids as strings
//! (`"64f0c1..."`) or numbers (`42`), under either `id` or `_id`. They always
//! serialize back as strings.

pub mod amount;
pub mod fmt;
pub mod pagination;
pub mod serde_util;
pub mod time;

pub use amount::{parse_amount, parse_non_negative_amount, AmountError};
pub use pagination::{PageRow, PageWindow, Paginator};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

macro_rules! id_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&$name> for $name {
            fn from(id: &$name) -> Self {
                id.clone()
            }
        }

        impl FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.to_string()))
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                serde_util::string_or_number(deserializer).map(Self)
            }
        }
    };
}

// ─── Ids ─────────────────────────────────────────────────────────────────────

id_newtype!(
    /// Identifier of a game market.
    MarketId
);

id_newtype!(
    /// Identifier of a user account.
    UserId
);

id_newtype!(
    /// Identifier of a single bet (bid).
    BetId
);

id_newtype!(
    /// Identifier of a minimum-limit row.
    LimitId
);

id_newtype!(
    /// Identifier of a fund ledger entry.
    FundEntryId
);

// ─── ActiveStatus ────────────────────────────────────────────────────────────

/// Active/inactive flag shared by markets and user accounts.
///
/// The backend is inconsistent: some records carry `"active"`/`"inactive"`,
/// others a boolean or `1`/`0`. [`ActiveStatus::from_wire`] accepts all of them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveStatus {
    Active,
    #[default]
    Inactive,
}

impl ActiveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Active => Self::Inactive,
            Self::Inactive => Self::Active,
        }
    }

    /// Interpret a loosely-typed status value. `None` when unrecognised.
    pub fn from_wire(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Bool(true) => Some(Self::Active),
            serde_json::Value::Bool(false) => Some(Self::Inactive),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(1) => Some(Self::Active),
                Some(0) => Some(Self::Inactive),
                _ => None,
            },
            serde_json::Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                "active" | "open" | "true" | "1" | "enabled" => Some(Self::Active),
                "inactive" | "closed" | "false" | "0" | "disabled" | "blocked" => {
                    Some(Self::Inactive)
                }
                _ => None,
            },
            _ => None,
        }
    }
}

impl std::fmt::Display for ActiveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::Inactive => write!(f, "Inactive"),
        }
    }
}
