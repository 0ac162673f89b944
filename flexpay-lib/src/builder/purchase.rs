use super::required;
use crate::amount::Amount;
use crate::client::{FlexPayClient, Purchase};
use crate::types::{PaymentMethod, SaleCurrency, SubCreditor};
use crate::Result;
use url::Url;

/// Builder for [`FlexPayClient::purchase_url`].
///
/// # Example
///
/// ```
/// use flexpay_lib::{Amount, Brand, FlexPayClient, SaleCurrency};
///
/// let client = FlexPayClient::new("65147", "mySecret", Brand::Verotel).unwrap();
/// let url = client
///     .purchase_builder()
///     .with_price_amount(Amount::from(10i64))
///     .with_price_currency(SaleCurrency::Usd)
///     .with_description("Monthly pass")
///     .with_reference_id("order-1")
///     .build()
///     .unwrap();
/// assert!(url.query().unwrap().contains("referenceID=order-1"));
/// ```
#[derive(Debug, Clone)]
pub struct PurchaseBuilder<'a> {
    client: &'a FlexPayClient,
    price_amount: Option<Amount>,
    price_currency: Option<SaleCurrency>,
    description: Option<String>,
    payment_method: Option<PaymentMethod>,
    reference_id: Option<String>,
    custom1: Option<String>,
    custom2: Option<String>,
    custom3: Option<String>,
    success_url: Option<String>,
    decline_url: Option<String>,
    one_click_token: Option<String>,
    email: Option<String>,
    mcc: Option<String>,
    sub_creditor: Option<SubCreditor>,
}

impl<'a> PurchaseBuilder<'a> {
    pub fn new(client: &'a FlexPayClient) -> Self {
        Self {
            client,
            price_amount: None,
            price_currency: None,
            description: None,
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

    pub fn with_price_amount(mut self, amount: impl Into<Amount>) -> Self {
        self.price_amount = Some(amount.into());
        self
    }

    pub fn with_price_currency(mut self, currency: SaleCurrency) -> Self {
        self.price_currency = Some(currency);
        self
    }

    pub fn with_payment_method(mut self, method: PaymentMethod) -> Self {
        self.payment_method = Some(method);
        self
    }

    /// iDEAL only.
    pub fn with_sub_creditor(mut self, sub_creditor: SubCreditor) -> Self {
        self.sub_creditor = Some(sub_creditor);
        self
    }

    optional_string_setters! {
        with_description => description,
        with_reference_id => reference_id,
        with_custom1 => custom1,
        with_custom2 => custom2,
        with_custom3 => custom3,
        with_success_url => success_url,
        with_decline_url => decline_url,
        /// Requires the `CC` payment method.
        with_one_click_token => one_click_token,
        with_email => email,
        /// Merchant category code, iDEAL only.
        with_mcc => mcc,
    }

    /// Old name of the success URL.
    #[deprecated(note = "use `with_success_url`")]
    pub fn with_back_url(self, url: impl Into<String>) -> Self {
        self.with_success_url(url)
    }

    /// Generate the purchase URL.
    ///
    /// # Errors
    ///
    /// [`MissingRequiredField`](crate::FlexPayError::MissingRequiredField) for
    /// an unset price amount, price currency or description, checked in that
    /// order; otherwise whatever [`FlexPayClient::purchase_url`] returns.
    pub fn build(&self) -> Result<Url> {
        let purchase = Purchase {
            price_amount: required(&self.price_amount, "Price amount")?,
            price_currency: required(&self.price_currency, "Price currency")?,
            description: required(&self.description, "Description")?,
            payment_method: self.payment_method,
            reference_id: self.reference_id.clone(),
            custom1: self.custom1.clone(),
            custom2: self.custom2.clone(),
            custom3: self.custom3.clone(),
            success_url: self.success_url.clone(),
            decline_url: self.decline_url.clone(),
            one_click_token: self.one_click_token.clone(),
            email: self.email.clone(),
            mcc: self.mcc.clone(),
            sub_creditor: self.sub_creditor.clone(),
        };
        self.client.purchase_url(&purchase)
    }
}
