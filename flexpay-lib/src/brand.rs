//! Brand registry.
//!
//! A brand is one white-label family of the payment gateway. Each brand has
//! its own origin and owns a four-digit merchant ID prefix. The table is
//! static; lookups are pure.

use crate::{FlexPayError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Path of the order page (purchases, subscriptions, upgrades).
pub const FLEXPAY_PATH: &str = "/startorder";

/// Path of the machine-readable sale status page.
pub const STATUS_PATH: &str = "/salestatus";

/// Path of the subscription cancellation page.
pub const CANCEL_PATH: &str = "/cancel-subscription";

/// Number of leading merchant ID characters that identify the brand.
const MERCHANT_PREFIX_LEN: usize = 4;

/// Payment gateway brand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Brand {
    #[default]
    Verotel,
    CardBilling,
    BitsafePay,
    Bill,
    PaintFest,
    GayCharge,
    YoursafeDirect,
}

struct BrandRecord {
    brand: Brand,
    name: &'static str,
    merchant_prefix: &'static str,
    base_url: &'static str,
}

const BRAND_TABLE: [BrandRecord; 7] = [
    BrandRecord {
        brand: Brand::Verotel,
        name: "Verotel",
        merchant_prefix: "9804",
        base_url: "https://secure.verotel.com",
    },
    BrandRecord {
        brand: Brand::CardBilling,
        name: "CardBilling",
        merchant_prefix: "9762",
        base_url: "https://secure.billing.creditcard",
    },
    BrandRecord {
        brand: Brand::BitsafePay,
        name: "BitsafePay",
        merchant_prefix: "9653",
        base_url: "https://secure.bitsafepay.com",
    },
    BrandRecord {
        brand: Brand::Bill,
        name: "Bill",
        merchant_prefix: "9511",
        base_url: "https://secure.bill.creditcard",
    },
    BrandRecord {
        brand: Brand::PaintFest,
        name: "PaintFest",
        merchant_prefix: "9444",
        base_url: "https://secure.paintfestpayments.com",
    },
    BrandRecord {
        brand: Brand::GayCharge,
        name: "GayCharge",
        merchant_prefix: "9388",
        base_url: "https://secure.gaycharge.com",
    },
    BrandRecord {
        brand: Brand::YoursafeDirect,
        name: "YoursafeDirect",
        merchant_prefix: "9001",
        base_url: "https://secure.yoursafedirect.com",
    },
];

impl Brand {
    /// All known brands, in registry order.
    pub const ALL: [Brand; 7] = [
        Brand::Verotel,
        Brand::CardBilling,
        Brand::BitsafePay,
        Brand::Bill,
        Brand::PaintFest,
        Brand::GayCharge,
        Brand::YoursafeDirect,
    ];

    fn record(&self) -> &'static BrandRecord {
        // BRAND_TABLE is indexed in declaration order
        &BRAND_TABLE[*self as usize]
    }

    /// Resolve the brand from a customer/merchant ID.
    ///
    /// Only the first four characters are significant.
    ///
    /// # Errors
    ///
    /// Returns [`FlexPayError::InvalidMerchantId`] when the prefix is unknown.
    ///
    /// # Example
    ///
    /// ```
    /// use flexpay_lib::Brand;
    ///
    /// let brand = Brand::from_merchant_id("9804000000000000").unwrap();
    /// assert_eq!(brand, Brand::Verotel);
    /// assert_eq!(brand.base_url(), "https://secure.verotel.com");
    /// ```
    pub fn from_merchant_id(merchant_id: &str) -> Result<Brand> {
        let prefix = merchant_id.get(..MERCHANT_PREFIX_LEN).unwrap_or(merchant_id);

        BRAND_TABLE
            .iter()
            .find(|record| record.merchant_prefix == prefix)
            .map(|record| record.brand)
            .ok_or_else(|| FlexPayError::InvalidMerchantId {
                merchant_id: merchant_id.to_string(),
            })
    }

    /// Resolve the brand from its name, ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// Returns [`FlexPayError::InvalidBrandName`] when no brand has this name.
    #[deprecated(note = "derive the brand from the merchant ID with `Brand::from_merchant_id`")]
    pub fn from_name(name: &str) -> Result<Brand> {
        BRAND_TABLE
            .iter()
            .find(|record| record.name.eq_ignore_ascii_case(name))
            .map(|record| record.brand)
            .ok_or_else(|| FlexPayError::InvalidBrandName {
                name: name.to_string(),
            })
    }

    /// Human readable brand name.
    pub fn name(&self) -> &'static str {
        self.record().name
    }

    /// Four-digit merchant ID prefix owned by this brand.
    pub fn merchant_prefix(&self) -> &'static str {
        self.record().merchant_prefix
    }

    /// Origin of the brand's payment pages, without trailing slash.
    pub fn base_url(&self) -> &'static str {
        self.record().base_url
    }

    /// Full URL of the order page.
    pub fn flexpay_url(&self) -> String {
        format!("{}{}", self.base_url(), FLEXPAY_PATH)
    }

    /// Full URL of the sale status page.
    pub fn status_url(&self) -> String {
        format!("{}{}", self.base_url(), STATUS_PATH)
    }

    /// Full URL of the cancellation page.
    pub fn cancel_url(&self) -> String {
        format!("{}{}", self.base_url(), CANCEL_PATH)
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_matches_enum() {
        for brand in Brand::ALL {
            assert_eq!(brand.record().brand, brand);
        }
    }

    #[test]
    fn test_prefixes_are_unique() {
        let mut prefixes: Vec<_> = BRAND_TABLE.iter().map(|r| r.merchant_prefix).collect();
        prefixes.sort_unstable();
        prefixes.dedup();
        assert_eq!(prefixes.len(), BRAND_TABLE.len());
    }

    #[test]
    fn test_from_merchant_id() {
        assert_eq!(
            Brand::from_merchant_id("9804000000000000").unwrap(),
            Brand::Verotel
        );
        assert_eq!(
            Brand::from_merchant_id("9511000000004236").unwrap(),
            Brand::Bill
        );
        assert_eq!(
            Brand::from_merchant_id("9001000000000001").unwrap(),
            Brand::YoursafeDirect
        );
    }

    #[test]
    fn test_unknown_merchant_id() {
        let err = Brand::from_merchant_id("1234000000000000").unwrap_err();
        assert!(matches!(err, FlexPayError::InvalidMerchantId { .. }));
    }

    #[test]
    fn test_short_merchant_id() {
        assert!(Brand::from_merchant_id("98").is_err());
        assert!(Brand::from_merchant_id("").is_err());
        // exactly the prefix is enough
        assert_eq!(Brand::from_merchant_id("9762").unwrap(), Brand::CardBilling);
    }

    #[test]
    fn test_non_ascii_merchant_id_does_not_panic() {
        assert!(Brand::from_merchant_id("98ř4000").is_err());
    }

    #[test]
    #[allow(deprecated)]
    fn test_from_name() {
        assert_eq!(Brand::from_name("Verotel").unwrap(), Brand::Verotel);
        assert_eq!(Brand::from_name("cardbilling").unwrap(), Brand::CardBilling);
        assert_eq!(Brand::from_name("PAINTFEST").unwrap(), Brand::PaintFest);

        let err = Brand::from_name("UnknownBrand").unwrap_err();
        assert!(matches!(err, FlexPayError::InvalidBrandName { .. }));
    }

    #[test]
    fn test_endpoint_urls() {
        let brand = Brand::CardBilling;
        assert_eq!(
            brand.flexpay_url(),
            "https://secure.billing.creditcard/startorder"
        );
        assert_eq!(
            brand.status_url(),
            "https://secure.billing.creditcard/salestatus"
        );
        assert_eq!(
            brand.cancel_url(),
            "https://secure.billing.creditcard/cancel-subscription"
        );
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Brand::BitsafePay).unwrap();
        assert_eq!(json, "\"bitsafepay\"");
        let brand: Brand = serde_json::from_str("\"yoursafedirect\"").unwrap();
        assert_eq!(brand, Brand::YoursafeDirect);
    }
}
