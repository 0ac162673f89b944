//! Fluent builders over the [`FlexPayClient`](crate::FlexPayClient) operations.
//!
//! A builder borrows the client, collects fields through `with_*` setters and
//! produces exactly the URL the matching client method would for the same
//! values. Required fields are checked in [`build`](PurchaseBuilder::build),
//! in a fixed order, and reported as
//! [`FlexPayError::MissingRequiredField`](crate::FlexPayError::MissingRequiredField).

/// Setters for optional string fields.
macro_rules! optional_string_setters {
    ($($(#[$meta:meta])* $setter:ident => $field:ident),+ $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $setter(mut self, value: impl Into<String>) -> Self {
                self.$field = Some(value.into());
                self
            }
        )+
    };
}

mod purchase;
mod subscription;
mod upgrade;

pub use purchase::PurchaseBuilder;
pub use subscription::SubscriptionBuilder;
pub use upgrade::SubscriptionUpgradeBuilder;

/// Unwrap a required builder field.
pub(crate) fn required<T: Clone>(value: &Option<T>, label: &'static str) -> crate::Result<T> {
    value
        .clone()
        .ok_or(crate::FlexPayError::MissingRequiredField(label))
}
