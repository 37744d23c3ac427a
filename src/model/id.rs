//! Type-safe identifiers.
//!
//! IDs are allocated by the owning actor from a `u32` counter starting at 1. They display with
//! a kind prefix (`order_3`), serialize as the bare number, and parse from either form.

use thiserror::Error;

/// Error returned when a string is not a valid identifier.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid {kind} id: {input:?}")]
pub struct ParseIdError {
    pub kind: &'static str,
    pub input: String,
}

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, "_{}"), self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::model::id::ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                let digits = trimmed
                    .strip_prefix(concat!($prefix, "_"))
                    .unwrap_or(trimmed);
                digits
                    .parse::<u32>()
                    .map(Self)
                    .map_err(|_| $crate::model::id::ParseIdError {
                        kind: $prefix,
                        input: s.to_string(),
                    })
            }
        }
    };
}

pub(crate) use entity_id;

#[cfg(test)]
mod tests {
    use crate::model::{OrderId, PaymentTypeId};

    #[test]
    fn test_display_uses_kind_prefix() {
        assert_eq!(OrderId(3).to_string(), "order_3");
        assert_eq!(PaymentTypeId(12).to_string(), "payment_type_12");
    }

    #[test]
    fn test_parse_accepts_bare_and_prefixed_forms() {
        assert_eq!("7".parse::<OrderId>(), Ok(OrderId(7)));
        assert_eq!("order_7".parse::<OrderId>(), Ok(OrderId(7)));
        assert_eq!(" payment_type_2 ".parse::<PaymentTypeId>(), Ok(PaymentTypeId(2)));
    }

    #[test]
    fn test_parse_rejects_empty_and_foreign_prefixes() {
        assert!("".parse::<PaymentTypeId>().is_err());
        assert!("   ".parse::<PaymentTypeId>().is_err());
        assert!("order_2".parse::<PaymentTypeId>().is_err());
        assert!("-1".parse::<OrderId>().is_err());

        let err = "visa".parse::<PaymentTypeId>().unwrap_err();
        assert_eq!(err.to_string(), "invalid payment_type id: \"visa\"");
    }

    #[test]
    fn test_serializes_as_bare_number() {
        assert_eq!(serde_json::to_string(&OrderId(5)).unwrap(), "5");
        let parsed: OrderId = serde_json::from_str("9").unwrap();
        assert_eq!(parsed, OrderId(9));
    }
}
