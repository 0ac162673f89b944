//! Protocol value tables: currencies, payment methods, subscription types.
//!
//! Each value renders to its exact wire spelling through `as_str` and parses
//! back from it through `FromStr`.

use crate::{FlexPayError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($(#[$vmeta])* #[serde(rename = $wire)] $variant),+
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire spelling.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = FlexPayError;

            fn from_str(s: &str) -> Result<Self> {
                $name::ALL
                    .iter()
                    .copied()
                    .find(|value| value.as_str() == s)
                    .ok_or_else(|| FlexPayError::wrong_value($field, format!("unknown value {s:?}")))
            }
        }
    };
}

wire_enum! {
    /// Currencies a sale can be priced in.
    ///
    /// Only EUR can be used with the DDEU payment method.
    SaleCurrency, "priceCurrency" {
        Usd => "USD",
        Eur => "EUR",
        Gbp => "GBP",
        Aud => "AUD",
        Cad => "CAD",
        Chf => "CHF",
        Dkk => "DKK",
        Nok => "NOK",
        Sek => "SEK",
    }
}

wire_enum! {
    /// Payment method preselected on the order page.
    ///
    /// When unset, buyers choose among the methods available to them.
    PaymentMethod, "paymentMethod" {
        /// Credit card; required when a one-click token is sent.
        Cc => "CC",
        /// SEPA direct debit (DE, AT, CH, BE, IT, NL, ES and FR only).
        Ddeu => "DDEU",
        /// iDEAL; the only method accepting MCC and sub-creditor data.
        Ideal => "IDEAL",
    }
}

wire_enum! {
    /// Billing model of a subscription.
    SubscriptionType, "subscriptionType" {
        /// Single charge for a fixed period. The only type DDEU supports.
        OneTime => "one-time",
        /// Rebilled every period until cancelled.
        Recurring => "recurring",
    }
}

wire_enum! {
    /// What happens to the remaining period of the sale being upgraded.
    UpgradeOption, "upgradeOption" {
        /// Remaining period is lost.
        Lost => "lost",
        /// Remaining period is added to the new sale.
        Extend => "extend",
    }
}

/// Final creditor of an iDEAL payment made on behalf of a sub-merchant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubCreditor {
    pub name: String,
    pub id: String,
    /// ISO 3166 alpha-2 country code.
    pub country: String,
}

impl SubCreditor {
    pub fn new(name: impl Into<String>, id: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            country: country.into(),
        }
    }

    /// Reject countries that are not two ASCII letters.
    pub fn validate(&self) -> Result<()> {
        let country = self.country.as_bytes();
        if country.len() == 2 && country.iter().all(u8::is_ascii_alphabetic) {
            Ok(())
        } else {
            Err(FlexPayError::wrong_value(
                "subCreditorCountry",
                "Sub creditor country must be a 2-letter ISO 3166 country code",
            ))
        }
    }
}
