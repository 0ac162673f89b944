use super::required;
use crate::amount::Amount;
use crate::client::{FlexPayClient, Subscription};
use crate::types::{PaymentMethod, SaleCurrency, SubscriptionType};
use crate::Result;
use url::Url;

/// Builder for [`FlexPayClient::subscription_url`].
#[derive(Debug, Clone)]
pub struct SubscriptionBuilder<'a> {
    client: &'a FlexPayClient,
    period: Option<String>,
    subscription_type: Option<SubscriptionType>,
    price_amount: Option<Amount>,
    price_currency: Option<SaleCurrency>,
    trial_amount: Option<Amount>,
    trial_period: Option<String>,
    description: Option<String>,
    payment_method: Option<PaymentMethod>,
    reference_id: Option<String>,
    custom1: Option<String>,
    custom2: Option<String>,
    custom3: Option<String>,
    success_url: Option<String>,
    decline_url: Option<String>,
    email: Option<String>,
}

impl<'a> SubscriptionBuilder<'a> {
    pub fn new(client: &'a FlexPayClient) -> Self {
        Self {
            client,
            period: None,
            subscription_type: None,
            price_amount: None,
            price_currency: None,
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

    pub fn with_subscription_type(mut self, subscription_type: SubscriptionType) -> Self {
        self.subscription_type = Some(subscription_type);
        self
    }

    pub fn with_price_amount(mut self, amount: impl Into<Amount>) -> Self {
        self.price_amount = Some(amount.into());
        self
    }

    pub fn with_price_currency(mut self, currency: SaleCurrency) -> Self {
        self.price_currency = Some(currency);
        self
    }

    pub fn with_trial_amount(mut self, amount: impl Into<Amount>) -> Self {
        self.trial_amount = Some(amount.into());
        self
    }

    pub fn with_payment_method(mut self, method: PaymentMethod) -> Self {
        self.payment_method = Some(method);
        self
    }

    optional_string_setters! {
        /// ISO 8601 duration, e.g. `P30D`.
        with_period => period,
        with_trial_period => trial_period,
        /// Sent as `name`.
        with_description => description,
        with_reference_id => reference_id,
        with_custom1 => custom1,
        with_custom2 => custom2,
        with_custom3 => custom3,
        with_success_url => success_url,
        with_decline_url => decline_url,
        with_email => email,
    }

    /// Generate the subscription URL.
    ///
    /// Period, subscription type, price amount and price currency are
    /// required and checked in that order.
    pub fn build(&self) -> Result<Url> {
        let subscription = Subscription {
            period: required(&self.period, "Period")?,
            subscription_type: required(&self.subscription_type, "Subscription type")?,
            price_amount: required(&self.price_amount, "Price amount")?,
            price_currency: required(&self.price_currency, "Price currency")?,
            trial_amount: self.trial_amount,
            trial_period: self.trial_period.clone(),
            description: self.description.clone(),
            payment_method: self.payment_method,
            reference_id: self.reference_id.clone(),
            custom1: self.custom1.clone(),
            custom2: self.custom2.clone(),
            custom3: self.custom3.clone(),
            success_url: self.success_url.clone(),
            decline_url: self.decline_url.clone(),
            email: self.email.clone(),
        };
        self.client.subscription_url(&subscription)
    }
}
