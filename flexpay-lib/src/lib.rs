//! FlexPay client library.
//!
//! Merchants redirect buyers to the gateway's hosted payment pages with a
//! signed URL, and the gateway reports back through signed postbacks. This
//! crate produces those URLs and verifies those signatures. It performs no
//! network I/O and holds no mutable state.
//!
//! # Features
//!
//! - **Brands**: every white-label family of the gateway, resolved from the
//!   merchant ID prefix
//! - **Signed URLs**: purchases, subscriptions, upgrades, sale status and
//!   subscription cancellation
//! - **Postbacks**: constant-time signature validation, accepting the legacy
//!   SHA-1 digest next to SHA-256
//! - **Builders**: fluent, repeatable alternatives to the request records
//!
//! # Example
//!
//! ```
//! use flexpay_lib::{Amount, Brand, FlexPayClient, SaleCurrency};
//!
//! let brand = Brand::from_merchant_id("9804000000000000").unwrap();
//! let client = FlexPayClient::new("60678", "zpXwe2D77g4P7ysGJcr3rY87TBYs6J", brand).unwrap();
//!
//! let url = client
//!     .purchase_builder()
//!     .with_price_amount("45.20".parse::<Amount>().unwrap())
//!     .with_price_currency(SaleCurrency::Eur)
//!     .with_description("Extra comfy XL pyjamas")
//!     .build()
//!     .unwrap();
//! assert!(url.as_str().ends_with(&format!(
//!     "signature={}",
//!     client.get_signature(url.query_pairs().filter(|(k, _)| k != "signature"))
//! )));
//!
//! // postback handler
//! assert!(!client.validate_postback_query("saleID=1&signature=00"));
//! ```
//!
//! # Cargo features
//!
//! - `tracing`: emit `tracing` spans and events. The signature key is never
//!   recorded.

pub mod amount;
pub mod brand;
pub mod builder;
pub mod client;
pub mod config;
pub mod errors;
pub mod generator;
pub mod params;
pub mod postback;
pub mod prelude;
pub mod signing;
pub mod types;

pub use amount::Amount;
pub use brand::Brand;
pub use builder::{PurchaseBuilder, SubscriptionBuilder, SubscriptionUpgradeBuilder};
pub use client::{FlexPayClient, Purchase, Subscription, SubscriptionUpgrade};
pub use config::FlexPayConfig;
pub use errors::{FlexPayError, FlexPayErrorCode};
pub use params::{ParamsMap, RequestParameter};
pub use signing::SignatureAlgorithm;
pub use types::{PaymentMethod, SaleCurrency, SubCreditor, SubscriptionType, UpgradeOption};

/// Protocol version sent with every request.
pub const FLEXPAY_VERSION: &str = "4";

/// Common result alias for FlexPay operations.
pub type Result<T> = std::result::Result<T, FlexPayError>;
