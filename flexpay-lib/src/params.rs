//! FlexPay request parameters.
//!
//! The protocol defines a fixed set of query parameters. Each carries a wire
//! name (the query-string key) and a flag telling whether it takes part in
//! the signature. The table belongs to protocol version
//! [`FLEXPAY_VERSION`](crate::FLEXPAY_VERSION) and must not be extended ad hoc:
//! a field missing here is silently excluded from signatures.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

/// Key/value parameters keyed by wire name.
///
/// `BTreeMap<String, String>` orders keys byte-wise, which is exactly the
/// canonical order used for signing and for URL emission.
pub type ParamsMap = BTreeMap<String, String>;

/// A protocol parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestParameter {
    Version,
    ShopId,
    PriceAmount,
    PriceCurrency,
    PaymentMethod,
    Description,
    ReferenceId,
    SaleId,
    Custom1,
    Custom2,
    Custom3,
    SubscriptionType,
    Period,
    /// Subscription description, transmitted as `name`.
    DescriptionForSubscription,
    TrialAmount,
    TrialPeriod,
    CancelDiscountPercentage,
    Type,
    SuccessUrl,
    DeclineUrl,
    PrecedingSaleId,
    UpgradeOption,
    Mcc,
    SubCreditorName,
    SubCreditorId,
    SubCreditorCountry,
    Signature,
    Email,
    OneClickToken,
}

/// Static description of one protocol parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub parameter: RequestParameter,
    /// Internal name of the field.
    pub name: &'static str,
    /// Query-string key; differs from `name` only for overridden fields.
    pub wire_name: &'static str,
    /// Whether the field participates in signature canonicalization.
    pub signed: bool,
}

const fn field(parameter: RequestParameter, name: &'static str, signed: bool) -> FieldDescriptor {
    FieldDescriptor {
        parameter,
        name,
        wire_name: name,
        signed,
    }
}

const fn renamed(
    parameter: RequestParameter,
    name: &'static str,
    wire_name: &'static str,
    signed: bool,
) -> FieldDescriptor {
    FieldDescriptor {
        parameter,
        name,
        wire_name,
        signed,
    }
}

// Must stay in `RequestParameter` declaration order.
const FIELD_TABLE: [FieldDescriptor; 29] = [
    field(RequestParameter::Version, "version", true),
    field(RequestParameter::ShopId, "shopID", true),
    field(RequestParameter::PriceAmount, "priceAmount", true),
    field(RequestParameter::PriceCurrency, "priceCurrency", true),
    field(RequestParameter::PaymentMethod, "paymentMethod", true),
    field(RequestParameter::Description, "description", true),
    field(RequestParameter::ReferenceId, "referenceID", true),
    field(RequestParameter::SaleId, "saleID", true),
    field(RequestParameter::Custom1, "custom1", true),
    field(RequestParameter::Custom2, "custom2", true),
    field(RequestParameter::Custom3, "custom3", true),
    field(RequestParameter::SubscriptionType, "subscriptionType", true),
    field(RequestParameter::Period, "period", true),
    renamed(
        RequestParameter::DescriptionForSubscription,
        "descriptionForSubscription",
        "name",
        true,
    ),
    field(RequestParameter::TrialAmount, "trialAmount", true),
    field(RequestParameter::TrialPeriod, "trialPeriod", true),
    field(
        RequestParameter::CancelDiscountPercentage,
        "cancelDiscountPercentage",
        true,
    ),
    field(RequestParameter::Type, "type", true),
    field(RequestParameter::SuccessUrl, "successURL", true),
    field(RequestParameter::DeclineUrl, "declineURL", true),
    field(RequestParameter::PrecedingSaleId, "precedingSaleID", true),
    field(RequestParameter::UpgradeOption, "upgradeOption", true),
    field(RequestParameter::Mcc, "mcc", true),
    field(RequestParameter::SubCreditorName, "subCreditorName", true),
    field(RequestParameter::SubCreditorId, "subCreditorId", true),
    field(RequestParameter::SubCreditorCountry, "subCreditorCountry", true),
    field(RequestParameter::Signature, "signature", false),
    field(RequestParameter::Email, "email", false),
    field(RequestParameter::OneClickToken, "oneClickToken", false),
];

impl RequestParameter {
    /// Descriptor of this parameter.
    pub fn descriptor(self) -> &'static FieldDescriptor {
        &FIELD_TABLE[self as usize]
    }

    /// Query-string key of this parameter.
    pub fn wire_name(self) -> &'static str {
        self.descriptor().wire_name
    }

    /// Whether this parameter is covered by the signature.
    pub fn is_signed(self) -> bool {
        self.descriptor().signed
    }
}

/// All parameter descriptors of the current protocol version.
pub fn descriptors() -> &'static [FieldDescriptor] {
    &FIELD_TABLE
}

/// Wire names eligible for signature canonicalization.
pub fn signed_wire_names() -> &'static BTreeSet<&'static str> {
    static SIGNED: OnceLock<BTreeSet<&'static str>> = OnceLock::new();
    SIGNED.get_or_init(|| {
        FIELD_TABLE
            .iter()
            .filter(|descriptor| descriptor.signed)
            .map(|descriptor| descriptor.wire_name)
            .collect()
    })
}

/// Whether `key` is the wire name of a signed parameter.
pub fn is_signed_wire_name(key: &str) -> bool {
    signed_wire_names().contains(key)
}

/// Insert `value` under the parameter's wire name when present.
pub(crate) fn put_if_some(params: &mut ParamsMap, parameter: RequestParameter, value: Option<String>) {
    if let Some(value) = value {
        params.insert(parameter.wire_name().to_string(), value);
    }
}

/// Insert `value` under the parameter's wire name.
pub(crate) fn put(params: &mut ParamsMap, parameter: RequestParameter, value: impl Into<String>) {
    params.insert(parameter.wire_name().to_string(), value.into());
}
