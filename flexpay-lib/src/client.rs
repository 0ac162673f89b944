//! FlexPay client facade.
//!
//! [`FlexPayClient`] owns the merchant identity (shop ID, signature key,
//! brand) and exposes one method per use case. Each method assembles its own
//! parameter set and hands it to the [`UrlGenerator`].

use crate::amount::Amount;
use crate::brand::Brand;
use crate::builder::{PurchaseBuilder, SubscriptionBuilder, SubscriptionUpgradeBuilder};
use crate::generator::{Endpoint, UrlGenerator, UrlType};
use crate::params::{put, put_if_some, ParamsMap, RequestParameter};
use crate::postback;
use crate::signing;
use crate::types::{PaymentMethod, SaleCurrency, SubCreditor, SubscriptionType, UpgradeOption};
use crate::{FlexPayError, Result};
use std::fmt;
use url::Url;
use zeroize::Zeroizing;

const IDEAL_ONLY: &str = "MCC code and subCreditor can only be used with iDEAL payment method";

/// One-off purchase.
#[derive(Debug, Clone, PartialEq)]
pub struct Purchase {
    /// Amount to be processed, in nnn.nn format.
    pub price_amount: Amount,
    pub price_currency: SaleCurrency,
    /// Shown on the order page, max 100 printable characters.
    pub description: String,
    pub payment_method: Option<PaymentMethod>,
    /// Merchant's reference; must be unique when provided.
    pub reference_id: Option<String>,
    pub custom1: Option<String>,
    pub custom2: Option<String>,
    pub custom3: Option<String>,
    /// Redirect after a successful transaction (formerly `backURL`).
    pub success_url: Option<String>,
    pub decline_url: Option<String>,
    /// Token of a previous purchase. Not signed; requires `CC`.
    pub one_click_token: Option<String>,
    /// Buyer email. Not signed; collected on the order page when unset.
    pub email: Option<String>,
    /// Merchant category code, iDEAL only.
    pub mcc: Option<String>,
    /// iDEAL only.
    pub sub_creditor: Option<SubCreditor>,
}

impl Purchase {
    pub fn new(
        price_amount: impl Into<Amount>,
        price_currency: SaleCurrency,
        description: impl Into<String>,
    ) -> Self {
        Self {
            price_amount: price_amount.into(),
            price_currency,
            description: description.into(),
            payment_method: None,
            reference_id: None,
            custom1: None,
            custom2: None,
            custom3: None,
            success_url: None,
            decline_url: None,
            one_click_token: None,
            email: None,
            mcc: None,
            sub_creditor: None,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.mcc.is_some() || self.sub_creditor.is_some() {
            if self.payment_method != Some(PaymentMethod::Ideal) {
                return Err(FlexPayError::WrongParameterCombination(IDEAL_ONLY.to_string()));
            }
            if let Some(sub_creditor) = &self.sub_creditor {
                sub_creditor.validate()?;
            }
        }
        Ok(())
    }
}

/// Initial payment plus subscription.
#[derive(Debug, Clone, PartialEq)]
pub struct Subscription {
    /// ISO 8601 duration, e.g. `P30D`. Minimum 7 days recurring, 2 days one-time.
    pub period: String,
    pub subscription_type: SubscriptionType,
    pub price_amount: Amount,
    pub price_currency: SaleCurrency,
    pub trial_amount: Option<Amount>,
    /// ISO 8601 duration of the trial, minimum 2 days.
    pub trial_period: Option<String>,
    /// Sent as `name`.
    pub description: Option<String>,
    pub payment_method: Option<PaymentMethod>,
    pub reference_id: Option<String>,
    pub custom1: Option<String>,
    pub custom2: Option<String>,
    pub custom3: Option<String>,
    pub success_url: Option<String>,
    pub decline_url: Option<String>,
    pub email: Option<String>,
}

impl Subscription {
    pub fn new(
        period: impl Into<String>,
        subscription_type: SubscriptionType,
        price_amount: impl Into<Amount>,
        price_currency: SaleCurrency,
    ) -> Self {
        Self {
            period: period.into(),
            subscription_type,
            price_amount: price_amount.into(),
            price_currency,
            trial_amount: None,
            trial_period: None,
            description: None,
            payment_method: None,
            reference_id: None,
            custom1: None,
            custom2: None,
            custom3: None,
            success_url: None,
            decline_url: None,
            email: None,
        }
    }
}

/// Upgrade of an existing subscription sale.
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionUpgrade {
    /// Sale the buyer is upgrading from.
    pub preceding_sale_id: String,
    pub period: String,
    pub subscription_type: SubscriptionType,
    pub price_amount: Amount,
    pub price_currency: SaleCurrency,
    pub trial_amount: Option<Amount>,
    pub trial_period: Option<String>,
    pub description: Option<String>,
    pub payment_method: Option<PaymentMethod>,
    pub custom1: Option<String>,
    pub custom2: Option<String>,
    pub custom3: Option<String>,
    pub success_url: Option<String>,
    pub decline_url: Option<String>,
    pub email: Option<String>,
    pub upgrade_option: Option<UpgradeOption>,
}

impl SubscriptionUpgrade {
    pub fn new(
        preceding_sale_id: impl Into<String>,
        period: impl Into<String>,
        subscription_type: SubscriptionType,
        price_amount: impl Into<Amount>,
        price_currency: SaleCurrency,
    ) -> Self {
        Self {
            preceding_sale_id: preceding_sale_id.into(),
            period: period.into(),
            subscription_type,
            price_amount: price_amount.into(),
            price_currency,
            trial_amount: None,
            trial_period: None,
            description: None,
            payment_method: None,
            custom1: None,
            custom2: None,
            custom3: None,
            success_url: None,
            decline_url: None,
            email: None,
            upgrade_option: None,
        }
    }
}

/// Optional fields shared by every order-page operation.
struct CommonParams<'a> {
    payment_method: Option<PaymentMethod>,
    reference_id: Option<&'a String>,
    custom1: Option<&'a String>,
    custom2: Option<&'a String>,
    custom3: Option<&'a String>,
    success_url: Option<&'a String>,
    decline_url: Option<&'a String>,
    email: Option<&'a String>,
}

impl CommonParams<'_> {
    fn apply(self, params: &mut ParamsMap) {
        let owned = |value: Option<&String>| value.cloned();

        put_if_some(
            params,
            RequestParameter::PaymentMethod,
            self.payment_method.map(|m| m.as_str().to_string()),
        );
        put_if_some(params, RequestParameter::ReferenceId, owned(self.reference_id));
        put_if_some(params, RequestParameter::Custom1, owned(self.custom1));
        put_if_some(params, RequestParameter::Custom2, owned(self.custom2));
        put_if_some(params, RequestParameter::Custom3, owned(self.custom3));
        put_if_some(params, RequestParameter::SuccessUrl, owned(self.success_url));
        put_if_some(params, RequestParameter::DeclineUrl, owned(self.decline_url));
        put_if_some(params, RequestParameter::Email, owned(self.email));
    }
}

/// FlexPay client.
///
/// Lets merchants send buyers to the gateway's payment pages and verify
/// postbacks. The client is immutable and cheap to share across threads.
///
/// # Example
///
/// ```
/// use flexpay_lib::{Brand, FlexPayClient, Purchase, SaleCurrency};
///
/// let client = FlexPayClient::new("65147", "mySecret", Brand::Verotel).unwrap();
/// let purchase = Purchase::new(
///     "25.99".parse::<flexpay_lib::Amount>().unwrap(),
///     SaleCurrency::Eur,
///     "Extra comfy XL pyjamas",
/// );
/// let url = client.purchase_url(&purchase).unwrap();
/// assert!(url.as_str().starts_with("https://secure.verotel.com/startorder?"));
/// ```
#[derive(Clone)]
pub struct FlexPayClient {
    shop_id: String,
    signature_key: Zeroizing<String>,
    brand: Brand,
}

impl FlexPayClient {
    /// Create a client for one website/shop.
    ///
    /// # Arguments
    ///
    /// * `shop_id` - Website ID, found in Control Center under "SETUP WEBSITES"
    /// * `signature_key` - The website's FlexPay signature key
    /// * `brand` - Brand of the merchant account, see [`Brand::from_merchant_id`]
    ///
    /// # Errors
    ///
    /// Returns [`FlexPayError::MissingCredential`] when either value is empty.
    pub fn new(
        shop_id: impl Into<String>,
        signature_key: impl Into<String>,
        brand: Brand,
    ) -> Result<Self> {
        let shop_id = shop_id.into();
        let signature_key = Zeroizing::new(signature_key.into());

        if signature_key.is_empty() {
            return Err(FlexPayError::MissingCredential("No FlexPay secret given"));
        }
        if shop_id.is_empty() {
            return Err(FlexPayError::MissingCredential(
                "No shop ID (website ID) given",
            ));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(shop_id = %shop_id, brand = %brand, "created FlexPay client");

        Ok(Self {
            shop_id,
            signature_key,
            brand,
        })
    }

    pub fn shop_id(&self) -> &str {
        &self.shop_id
    }

    pub fn brand(&self) -> Brand {
        self.brand
    }

    fn generator(&self) -> UrlGenerator<'_> {
        UrlGenerator::new(self.brand, &self.shop_id, &self.signature_key)
    }

    pub fn purchase_builder(&self) -> PurchaseBuilder<'_> {
        PurchaseBuilder::new(self)
    }

    pub fn subscription_builder(&self) -> SubscriptionBuilder<'_> {
        SubscriptionBuilder::new(self)
    }

    pub fn subscription_upgrade_builder(&self) -> SubscriptionUpgradeBuilder<'_> {
        SubscriptionUpgradeBuilder::new(self)
    }

    /// URL where a buyer can pay for a one-off purchase.
    ///
    /// # Errors
    ///
    /// [`FlexPayError::WrongParameterCombination`] when MCC or sub-creditor
    /// data is given without the iDEAL payment method, and
    /// [`FlexPayError::WrongParameterValue`] for a malformed sub-creditor
    /// country.
    pub fn purchase_url(&self, purchase: &Purchase) -> Result<Url> {
        purchase.validate()?;

        let mut params = ParamsMap::new();
        put(
            &mut params,
            RequestParameter::PriceAmount,
            purchase.price_amount.to_plain_string(),
        );
        put(
            &mut params,
            RequestParameter::PriceCurrency,
            purchase.price_currency.as_str(),
        );
        put(&mut params, RequestParameter::Description, purchase.description.as_str());
        put_if_some(
            &mut params,
            RequestParameter::OneClickToken,
            purchase.one_click_token.clone(),
        );
        put_if_some(&mut params, RequestParameter::Mcc, purchase.mcc.clone());
        if let Some(sub_creditor) = &purchase.sub_creditor {
            put(&mut params, RequestParameter::SubCreditorName, sub_creditor.name.as_str());
            put(&mut params, RequestParameter::SubCreditorId, sub_creditor.id.as_str());
            put(
                &mut params,
                RequestParameter::SubCreditorCountry,
                sub_creditor.country.as_str(),
            );
        }

        CommonParams {
            payment_method: purchase.payment_method,
            reference_id: purchase.reference_id.as_ref(),
            custom1: purchase.custom1.as_ref(),
            custom2: purchase.custom2.as_ref(),
            custom3: purchase.custom3.as_ref(),
            success_url: purchase.success_url.as_ref(),
            decline_url: purchase.decline_url.as_ref(),
            email: purchase.email.as_ref(),
        }
        .apply(&mut params);

        self.generator()
            .generate(Endpoint::OrderStart, UrlType::Purchase, params)
    }

    /// URL where a buyer pays the initial amount and subscribes.
    pub fn subscription_url(&self, subscription: &Subscription) -> Result<Url> {
        let mut params = ParamsMap::new();
        put(
            &mut params,
            RequestParameter::PriceAmount,
            subscription.price_amount.to_plain_string(),
        );
        put(
            &mut params,
            RequestParameter::PriceCurrency,
            subscription.price_currency.as_str(),
        );
        put(
            &mut params,
            RequestParameter::SubscriptionType,
            subscription.subscription_type.as_str(),
        );
        put(&mut params, RequestParameter::Period, subscription.period.as_str());
        put_if_some(
            &mut params,
            RequestParameter::DescriptionForSubscription,
            subscription.description.clone(),
        );
        put_if_some(
            &mut params,
            RequestParameter::TrialAmount,
            subscription.trial_amount.map(|a| a.to_plain_string()),
        );
        put_if_some(
            &mut params,
            RequestParameter::TrialPeriod,
            subscription.trial_period.clone(),
        );

        CommonParams {
            payment_method: subscription.payment_method,
            reference_id: subscription.reference_id.as_ref(),
            custom1: subscription.custom1.as_ref(),
            custom2: subscription.custom2.as_ref(),
            custom3: subscription.custom3.as_ref(),
            success_url: subscription.success_url.as_ref(),
            decline_url: subscription.decline_url.as_ref(),
            email: subscription.email.as_ref(),
        }
        .apply(&mut params);

        self.generator()
            .generate(Endpoint::OrderStart, UrlType::Subscription, params)
    }

    /// URL where a subscriber upgrades an existing subscription sale.
    pub fn upgrade_subscription_url(&self, upgrade: &SubscriptionUpgrade) -> Result<Url> {
        let mut params = ParamsMap::new();
        put(
            &mut params,
            RequestParameter::PrecedingSaleId,
            upgrade.preceding_sale_id.as_str(),
        );
        put(
            &mut params,
            RequestParameter::PriceAmount,
            upgrade.price_amount.to_plain_string(),
        );
        put(
            &mut params,
            RequestParameter::PriceCurrency,
            upgrade.price_currency.as_str(),
        );
        put(
            &mut params,
            RequestParameter::SubscriptionType,
            upgrade.subscription_type.as_str(),
        );
        put(&mut params, RequestParameter::Period, upgrade.period.as_str());
        put_if_some(
            &mut params,
            RequestParameter::DescriptionForSubscription,
            upgrade.description.clone(),
        );
        put_if_some(
            &mut params,
            RequestParameter::TrialAmount,
            upgrade.trial_amount.map(|a| a.to_plain_string()),
        );
        put_if_some(&mut params, RequestParameter::TrialPeriod, upgrade.trial_period.clone());
        put_if_some(
            &mut params,
            RequestParameter::UpgradeOption,
            upgrade.upgrade_option.map(|o| o.as_str().to_string()),
        );

        CommonParams {
            payment_method: upgrade.payment_method,
            reference_id: None,
            custom1: upgrade.custom1.as_ref(),
            custom2: upgrade.custom2.as_ref(),
            custom3: upgrade.custom3.as_ref(),
            success_url: upgrade.success_url.as_ref(),
            decline_url: upgrade.decline_url.as_ref(),
            email: upgrade.email.as_ref(),
        }
        .apply(&mut params);

        self.generator()
            .generate(Endpoint::OrderStart, UrlType::UpgradeSubscription, params)
    }

    /// URL with machine-readable (YAML) information about a sale, by sale ID.
    pub fn status_url_by_sale(&self, sale_id: &str) -> Result<Url> {
        let mut params = ParamsMap::new();
        put(&mut params, RequestParameter::SaleId, sale_id);
        self.generator()
            .generate(Endpoint::SaleStatus, UrlType::Status, params)
    }

    /// URL with machine-readable (YAML) information about a sale, by the
    /// merchant's reference ID.
    pub fn status_url_by_reference(&self, reference_id: &str) -> Result<Url> {
        let mut params = ParamsMap::new();
        put(&mut params, RequestParameter::ReferenceId, reference_id);
        self.generator()
            .generate(Endpoint::SaleStatus, UrlType::Status, params)
    }

    /// URL where a subscriber can cancel the subscription of `sale_id`.
    pub fn cancel_subscription_url(&self, sale_id: &str) -> Result<Url> {
        let mut params = ParamsMap::new();
        put(&mut params, RequestParameter::SaleId, sale_id);
        self.generator().generate(
            Endpoint::CancelSubscription,
            UrlType::CancelSubscription,
            params,
        )
    }

    /// Signature of the signed subset of `params`.
    ///
    /// Parameters that are not part of the signing process are ignored.
    pub fn get_signature<K, V, I>(&self, params: I) -> String
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        signing::get_signature(params, &self.signature_key, &self.shop_id)
    }

    /// Check the authenticity of postback parameters.
    ///
    /// Pass *all* received GET parameters, including `signature`. Returns
    /// `false` when the signature is missing or matches neither algorithm.
    pub fn validate_signature<K, V, I>(&self, params: I) -> bool
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        signing::validate_signature(params, &self.signature_key, &self.shop_id)
    }

    /// [`validate_signature`](Self::validate_signature) over a raw query string.
    pub fn validate_postback_query(&self, query: &str) -> bool {
        self.validate_signature(&postback::parse_query(query))
    }
}

impl fmt::Debug for FlexPayClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlexPayClient")
            .field("shop_id", &self.shop_id)
            .field("signature_key", &"<redacted>")
            .field("brand", &self.brand)
            .finish()
    }
}
