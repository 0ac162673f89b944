//! Merchant configuration.
//!
//! A [`FlexPayConfig`] can be built in code, read from the environment or
//! loaded from a JSON document:
//!
//! ```json
//! {
//!   "shop_id": "60678",
//!   "signature_key": "zpXwe2D77g4P7ysGJcr3rY87TBYs6J",
//!   "merchant_id": "9804000000000000"
//! }
//! ```

use crate::brand::Brand;
use crate::client::FlexPayClient;
use crate::{FlexPayError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Environment variable holding the website ID.
pub const ENV_SHOP_ID: &str = "FLEXPAY_SHOP_ID";
/// Environment variable holding the signature key.
pub const ENV_SIGNATURE_KEY: &str = "FLEXPAY_SIGNATURE_KEY";
/// Environment variable holding the merchant account ID.
pub const ENV_MERCHANT_ID: &str = "FLEXPAY_MERCHANT_ID";

/// Credentials and brand selection for one website.
#[derive(Clone, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct FlexPayConfig {
    /// Website ID.
    pub shop_id: String,

    /// FlexPay signature key of the website.
    pub signature_key: String,

    /// Explicit brand. Takes precedence over `merchant_id`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[zeroize(skip)]
    pub brand: Option<Brand>,

    /// Merchant account ID, used to derive the brand.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<String>,
}

impl FlexPayConfig {
    /// Create a new configuration.
    pub fn new(shop_id: impl Into<String>, signature_key: impl Into<String>) -> Self {
        Self {
            shop_id: shop_id.into(),
            signature_key: signature_key.into(),
            brand: None,
            merchant_id: None,
        }
    }

    /// Set the brand.
    pub fn with_brand(mut self, brand: Brand) -> Self {
        self.brand = Some(brand);
        self
    }

    /// Set the merchant ID.
    pub fn with_merchant_id(mut self, merchant_id: impl Into<String>) -> Self {
        self.merchant_id = Some(merchant_id.into());
        self
    }

    /// Read `FLEXPAY_SHOP_ID`, `FLEXPAY_SIGNATURE_KEY` and the optional
    /// `FLEXPAY_MERCHANT_ID` from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let shop_id = present(ENV_SHOP_ID)
            .ok_or(FlexPayError::MissingCredential("FLEXPAY_SHOP_ID is not set"))?;
        let signature_key = present(ENV_SIGNATURE_KEY).ok_or(
            FlexPayError::MissingCredential("FLEXPAY_SIGNATURE_KEY is not set"),
        )?;

        let mut config = Self::new(shop_id, signature_key);
        config.merchant_id = present(ENV_MERCHANT_ID);
        Ok(config)
    }

    /// Parse a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON document from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| FlexPayError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&contents)
    }

    /// Brand to use: the explicit one, else the one the merchant ID maps to,
    /// else [`Brand::Verotel`].
    pub fn resolve_brand(&self) -> Result<Brand> {
        match (&self.brand, &self.merchant_id) {
            (Some(brand), _) => Ok(*brand),
            (None, Some(merchant_id)) => Brand::from_merchant_id(merchant_id),
            (None, None) => Ok(Brand::default()),
        }
    }

    /// Build a client from this configuration.
    pub fn into_client(self) -> Result<FlexPayClient> {
        let brand = self.resolve_brand()?;
        FlexPayClient::new(self.shop_id.clone(), self.signature_key.clone(), brand)
    }
}

impl fmt::Debug for FlexPayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlexPayConfig")
            .field("shop_id", &self.shop_id)
            .field("signature_key", &"<redacted>")
            .field("brand", &self.brand)
            .field("merchant_id", &self.merchant_id)
            .finish()
    }
}
