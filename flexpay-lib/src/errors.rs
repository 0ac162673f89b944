//! Error types for FlexPay operations.
//!
//! Every failure in this crate is a programmer-visible, synchronous condition:
//! there is nothing to retry. A postback whose signature does not match is
//! *not* an error, see [`crate::FlexPayClient::validate_signature`].

/// Stable numeric codes, useful when errors cross an FFI or logging boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum FlexPayErrorCode {
    /// Merchant ID prefix does not belong to any brand
    InvalidMerchantId = 1001,
    /// Brand name lookup failed
    InvalidBrandName = 1002,
    /// Shop ID or signature key missing
    MissingCredential = 2001,
    /// URL generation called without parameters
    EmptyParameterSet = 3001,
    /// Builder finalized without a mandatory field
    MissingRequiredField = 3002,
    /// Parameters that cannot be used together
    WrongParameterCombination = 3003,
    /// Parameter value rejected
    WrongParameterValue = 3004,
    /// Final URL could not be assembled
    InvalidUrl = 4001,
    /// Configuration could not be loaded
    Config = 5001,
}

/// Error type for FlexPay operations.
#[derive(thiserror::Error, Debug)]
pub enum FlexPayError {
    /// The first four characters of the merchant ID match no known brand.
    #[error("invalid merchant ID: {merchant_id}")]
    InvalidMerchantId {
        /// The merchant ID as supplied
        merchant_id: String,
    },

    /// No brand carries this name.
    #[error("invalid brand name: {name}")]
    InvalidBrandName {
        /// The brand name as supplied
        name: String,
    },

    /// Shop ID or signature key is empty.
    #[error("missing credential: {0}")]
    MissingCredential(&'static str),

    /// URL generation was invoked with no parameters at all.
    #[error("no params given")]
    EmptyParameterSet,

    /// A builder was finalized before a mandatory field was set.
    #[error("{0} must be set")]
    MissingRequiredField(&'static str),

    /// Parameters were combined in a way the gateway rejects.
    #[error("{0}")]
    WrongParameterCombination(String),

    /// A parameter value is malformed.
    #[error("invalid {field}: {reason}")]
    WrongParameterValue {
        /// Wire name or logical name of the field
        field: String,
        /// Why the value was rejected
        reason: String,
    },

    /// The redirect URL could not be parsed after assembly.
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Configuration could not be read or decoded.
    #[error("configuration error: {0}")]
    Config(String),
}

impl FlexPayError {
    /// Get the error code for FFI/logging integration.
    pub fn code(&self) -> FlexPayErrorCode {
        match self {
            Self::InvalidMerchantId { .. } => FlexPayErrorCode::InvalidMerchantId,
            Self::InvalidBrandName { .. } => FlexPayErrorCode::InvalidBrandName,
            Self::MissingCredential(_) => FlexPayErrorCode::MissingCredential,
            Self::EmptyParameterSet => FlexPayErrorCode::EmptyParameterSet,
            Self::MissingRequiredField(_) => FlexPayErrorCode::MissingRequiredField,
            Self::WrongParameterCombination(_) => FlexPayErrorCode::WrongParameterCombination,
            Self::WrongParameterValue { .. } => FlexPayErrorCode::WrongParameterValue,
            Self::InvalidUrl(_) => FlexPayErrorCode::InvalidUrl,
            Self::Config(_) => FlexPayErrorCode::Config,
        }
    }

    /// Create a wrong parameter value error.
    pub fn wrong_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::WrongParameterValue {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for FlexPayError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}
