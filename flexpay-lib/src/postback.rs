//! Postback parameter extraction.
//!
//! After every sale or transaction based action the gateway sends a GET
//! request to the registered postback URL. This module only turns the raw
//! query string into key/value pairs; verifying them is
//! [`crate::signing::validate_signature`]'s job.

use crate::params::ParamsMap;
use url::form_urlencoded;

/// Decode an `application/x-www-form-urlencoded` query string.
///
/// A leading `?` is ignored, `+` decodes to a space and the last occurrence
/// of a repeated key wins. Keys and values are kept byte-for-byte otherwise.
///
/// # Example
///
/// ```
/// use flexpay_lib::postback::parse_query;
///
/// let params = parse_query("?saleID=42&custom1=hello+world&signature=ABC");
/// assert_eq!(params["custom1"], "hello world");
/// assert_eq!(params["signature"], "ABC");
/// ```
pub fn parse_query(query: &str) -> ParamsMap {
    let query = query.strip_prefix('?').unwrap_or(query);
    form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}
