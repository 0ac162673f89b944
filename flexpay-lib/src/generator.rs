//! Signed redirect URL assembly.
//!
//! Pure, single-pass transformation from a parameter set to the final URL:
//!
//! 1. reject an empty parameter set
//! 2. overwrite `version` with [`FLEXPAY_VERSION`]
//! 3. add `shopID` when absent
//! 4. add `type` for operations that carry it
//! 5. drop empty values
//! 6. order by key
//! 7. sign the signed subset
//! 8. append `signature` last
//! 9. form-encode values and join onto the brand endpoint

use crate::brand::{Brand, CANCEL_PATH, FLEXPAY_PATH, STATUS_PATH};
use crate::params::{put, ParamsMap, RequestParameter};
use crate::signing::get_signature;
use crate::{FlexPayError, Result, FLEXPAY_VERSION};
use url::form_urlencoded::byte_serialize;
use url::Url;

/// Kind of operation a URL is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlType {
    Purchase,
    Subscription,
    UpgradeSubscription,
    Status,
    CancelSubscription,
}

impl UrlType {
    /// Value of the `type` parameter.
    pub fn name_for_url(&self) -> &'static str {
        match self {
            Self::Purchase => "purchase",
            Self::Subscription => "subscription",
            Self::UpgradeSubscription => "upgradesubscription",
            Self::Status => "status",
            Self::CancelSubscription => "cancel_subscription",
        }
    }

    /// Whether the `type` parameter is sent for this operation.
    pub fn is_part_of_url(&self) -> bool {
        matches!(
            self,
            Self::Purchase | Self::Subscription | Self::UpgradeSubscription
        )
    }
}

/// Brand-relative endpoint a URL points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    OrderStart,
    SaleStatus,
    CancelSubscription,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Self::OrderStart => FLEXPAY_PATH,
            Self::SaleStatus => STATUS_PATH,
            Self::CancelSubscription => CANCEL_PATH,
        }
    }
}

/// Builds signed URLs for one merchant identity.
///
/// Borrowed from the client for the duration of a call; holds no state of
/// its own.
pub struct UrlGenerator<'a> {
    brand: Brand,
    shop_id: &'a str,
    signature_key: &'a str,
}

impl<'a> UrlGenerator<'a> {
    pub fn new(brand: Brand, shop_id: &'a str, signature_key: &'a str) -> Self {
        Self {
            brand,
            shop_id,
            signature_key,
        }
    }

    /// Produce the final redirect URL.
    ///
    /// # Errors
    ///
    /// - [`FlexPayError::EmptyParameterSet`] if `params` is empty
    /// - [`FlexPayError::InvalidUrl`] if the assembled URL does not parse
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, params), fields(brand = %self.brand, shop_id = %self.shop_id)))]
    pub fn generate(&self, endpoint: Endpoint, url_type: UrlType, params: ParamsMap) -> Result<Url> {
        let query = self.signed_query(url_type, params)?;
        let url = Url::parse(&format!(
            "{}{}?{}",
            self.brand.base_url(),
            endpoint.path(),
            query
        ))?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            path = endpoint.path(),
            url_type = url_type.name_for_url(),
            query_params = query.split('&').count(),
            "generated FlexPay URL"
        );

        Ok(url)
    }

    /// The encoded query string, `signature` last.
    pub fn signed_query(&self, url_type: UrlType, params: ParamsMap) -> Result<String> {
        let working = self.working_params(url_type, params)?;
        let signature = get_signature(&working, self.signature_key, self.shop_id);

        let query = working
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .chain(std::iter::once((
                RequestParameter::Signature.wire_name(),
                signature.as_str(),
            )))
            .map(|(key, value)| format!("{}={}", key, encode_url_value(value)))
            .collect::<Vec<_>>()
            .join("&");

        Ok(query)
    }

    /// Inject protocol fields, drop empty values. Ordered by key.
    fn working_params(&self, url_type: UrlType, mut params: ParamsMap) -> Result<ParamsMap> {
        if params.is_empty() {
            return Err(FlexPayError::EmptyParameterSet);
        }

        put(&mut params, RequestParameter::Version, FLEXPAY_VERSION);
        params
            .entry(RequestParameter::ShopId.wire_name().to_string())
            .or_insert_with(|| self.shop_id.to_string());
        if url_type.is_part_of_url() {
            put(&mut params, RequestParameter::Type, url_type.name_for_url());
        }

        params.retain(|_, value| !value.is_empty());
        Ok(params)
    }
}

/// Form-encode a query value: UTF-8 percent-encoding, space as `+`.
///
/// Leaves `A-Z a-z 0-9 * - . _` untouched.
pub fn encode_url_value(value: &str) -> String {
    byte_serialize(value.as_bytes()).collect()
}
