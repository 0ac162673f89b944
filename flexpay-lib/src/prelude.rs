//! Prelude module for convenient imports.
//!
//! ```rust
//! use flexpay_lib::prelude::*;
//! ```
//!
//! ## What's Included
//!
//! - Client: `FlexPayClient`, `FlexPayConfig`, `Brand`
//! - Requests: `Purchase`, `Subscription`, `SubscriptionUpgrade` and their builders
//! - Values: `Amount`, `SaleCurrency`, `PaymentMethod`, `SubscriptionType`, `UpgradeOption`, `SubCreditor`
//! - Error types: `FlexPayError`, `FlexPayErrorCode`, `Result`

// Client
pub use crate::{Brand, FlexPayClient, FlexPayConfig};

// Requests
pub use crate::builder::{PurchaseBuilder, SubscriptionBuilder, SubscriptionUpgradeBuilder};
pub use crate::client::{Purchase, Subscription, SubscriptionUpgrade};

// Values
pub use crate::types::{PaymentMethod, SaleCurrency, SubCreditor, SubscriptionType, UpgradeOption};
pub use crate::Amount;

// Error handling
pub use crate::errors::{FlexPayError, FlexPayErrorCode};
pub use crate::Result;

// Postbacks
pub use crate::postback::parse_query;
