//! Builders produce exactly what the matching client methods produce.

use flexpay_lib::{
    Amount, Brand, FlexPayClient, FlexPayError, PaymentMethod, Purchase, SaleCurrency,
    SubCreditor, Subscription, SubscriptionType, SubscriptionUpgrade, UpgradeOption,
};

fn client() -> FlexPayClient {
    FlexPayClient::new("7", "xx", Brand::Verotel).unwrap()
}

#[test]
fn test_purchase_builder_matches_client() {
    let client = client();
    let from_builder = client
        .purchase_builder()
        .with_price_amount(Amount::from(10i64))
        .with_price_currency(SaleCurrency::Usd)
        .with_description("Extra comfy XL pyjamas")
        .with_payment_method(PaymentMethod::Cc)
        .with_reference_id("ref1")
        .with_custom1("cus1")
        .with_custom2("cus2")
        .with_custom3("cus3")
        .with_success_url("success.url")
        .with_decline_url("decline.url")
        .with_one_click_token("token")
        .with_email("email")
        .build()
        .unwrap();

    let mut purchase = Purchase::new(Amount::from(10i64), SaleCurrency::Usd, "Extra comfy XL pyjamas");
    purchase.payment_method = Some(PaymentMethod::Cc);
    purchase.reference_id = Some("ref1".into());
    purchase.custom1 = Some("cus1".into());
    purchase.custom2 = Some("cus2".into());
    purchase.custom3 = Some("cus3".into());
    purchase.success_url = Some("success.url".into());
    purchase.decline_url = Some("decline.url".into());
    purchase.one_click_token = Some("token".into());
    purchase.email = Some("email".into());

    assert_eq!(from_builder, client.purchase_url(&purchase).unwrap());
}

#[test]
fn test_purchase_builder_ideal_fields() {
    let client = client();
    let url = client
        .purchase_builder()
        .with_price_amount("45.20".parse::<Amount>().unwrap())
        .with_price_currency(SaleCurrency::Eur)
        .with_description("x")
        .with_payment_method(PaymentMethod::Ideal)
        .with_mcc("1144")
        .with_sub_creditor(SubCreditor::new("Foo", "bar", "NL"))
        .build()
        .unwrap();

    let query = url.query().unwrap();
    for key in ["mcc=", "subCreditorName=", "subCreditorId=", "subCreditorCountry="] {
        assert!(query.contains(key), "{key} missing from {query}");
    }
}

#[test]
fn test_subscription_builder_matches_client() {
    let client = client();
    let from_builder = client
        .subscription_builder()
        .with_period("P3D")
        .with_subscription_type(SubscriptionType::Recurring)
        .with_trial_amount(Amount::from(1i64))
        .with_trial_period("P1D")
        .with_description("funny subscription")
        .with_price_amount(Amount::from(10i64))
        .with_price_currency(SaleCurrency::Usd)
        .with_payment_method(PaymentMethod::Ddeu)
        .with_reference_id("ref1")
        .with_custom1("cus1")
        .with_custom2("cus2")
        .with_custom3("cus3")
        .with_success_url("success.url")
        .with_decline_url("decline.url")
        .with_email("email")
        .build()
        .unwrap();

    let mut subscription = Subscription::new(
        "P3D",
        SubscriptionType::Recurring,
        Amount::from(10i64),
        SaleCurrency::Usd,
    );
    subscription.trial_amount = Some(Amount::from(1i64));
    subscription.trial_period = Some("P1D".into());
    subscription.description = Some("funny subscription".into());
    subscription.payment_method = Some(PaymentMethod::Ddeu);
    subscription.reference_id = Some("ref1".into());
    subscription.custom1 = Some("cus1".into());
    subscription.custom2 = Some("cus2".into());
    subscription.custom3 = Some("cus3".into());
    subscription.success_url = Some("success.url".into());
    subscription.decline_url = Some("decline.url".into());
    subscription.email = Some("email".into());

    assert_eq!(from_builder, client.subscription_url(&subscription).unwrap());
}

#[test]
fn test_upgrade_builder_matches_client() {
    let client = client();
    let from_builder = client
        .subscription_upgrade_builder()
        .with_preceding_sale_id("42")
        .with_period("P3D")
        .with_subscription_type(SubscriptionType::Recurring)
        .with_trial_amount(Amount::from(1i64))
        .with_trial_period("P1D")
        .with_description("funny subscription")
        .with_price_amount(Amount::from(10i64))
        .with_price_currency(SaleCurrency::Usd)
        .with_payment_method(PaymentMethod::Ddeu)
        .with_custom1("cus1")
        .with_custom2("cus2")
        .with_custom3("cus3")
        .with_success_url("success.url")
        .with_email("email")
        .with_decline_url("https://example.com/decline")
        .with_upgrade_option(UpgradeOption::Lost)
        .build()
        .unwrap();

    let mut upgrade = SubscriptionUpgrade::new(
        "42",
        "P3D",
        SubscriptionType::Recurring,
        Amount::from(10i64),
        SaleCurrency::Usd,
    );
    upgrade.trial_amount = Some(Amount::from(1i64));
    upgrade.trial_period = Some("P1D".into());
    upgrade.description = Some("funny subscription".into());
    upgrade.payment_method = Some(PaymentMethod::Ddeu);
    upgrade.custom1 = Some("cus1".into());
    upgrade.custom2 = Some("cus2".into());
    upgrade.custom3 = Some("cus3".into());
    upgrade.success_url = Some("success.url".into());
    upgrade.email = Some("email".into());
    upgrade.decline_url = Some("https://example.com/decline".into());
    upgrade.upgrade_option = Some(UpgradeOption::Lost);

    assert_eq!(from_builder, client.upgrade_subscription_url(&upgrade).unwrap());
}

#[test]
fn test_missing_required_field() {
    let client = client();

    let err = client
        .subscription_upgrade_builder()
        .with_preceding_sale_id("42")
        .with_period("P3D")
        .with_subscription_type(SubscriptionType::OneTime)
        .with_price_currency(SaleCurrency::Eur)
        .build()
        .unwrap_err();

    assert!(matches!(err, FlexPayError::MissingRequiredField("Price amount")));
    assert_eq!(err.to_string(), "Price amount must be set");
}

#[test]
fn test_builder_errors_propagate_from_client() {
    let err = client()
        .purchase_builder()
        .with_price_amount(Amount::from(1i64))
        .with_price_currency(SaleCurrency::Eur)
        .with_description("x")
        .with_mcc("1144")
        .build()
        .unwrap_err();

    assert!(matches!(err, FlexPayError::WrongParameterCombination(_)));
}
