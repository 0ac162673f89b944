//! # FlexPay Signature Scheme
//!
//! A signature is a keyed digest over a canonical rendering of the
//! parameters:
//!
//! ```text
//! hex( H( signatureKey ":" k1=v1 ":" k2=v2 ... ) )
//! ```
//!
//! - `shopID` is added when absent and never overwritten (sub-merchant calls
//!   carry their own shop ID)
//! - entries are ordered byte-wise by key
//! - the key is a plain prefix, not an HMAC key
//! - `H` is SHA-256; SHA-1 is still accepted on validation so postback
//!   consumers keep working across the migration
//!
//! Only wire names marked signed in [`crate::params`] are fed to the digest
//! by [`get_signature`]. Incidental fields such as `email` or
//! `oneClickToken` never influence it.

use crate::params::{is_signed_wire_name, ParamsMap, RequestParameter};
use sha1::Sha1;
use sha2::{Digest, Sha256};
use subtle::{Choice, ConstantTimeEq};

/// Separator between the key and the rendered entries.
const SEPARATOR: &str = ":";

/// Digest used to compute a signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignatureAlgorithm {
    /// Current algorithm.
    #[default]
    Sha256,
    /// Legacy algorithm, accepted on validation only.
    Sha1,
}

impl SignatureAlgorithm {
    fn digest(self, input: &[u8]) -> Vec<u8> {
        match self {
            Self::Sha256 => Sha256::digest(input).to_vec(),
            Self::Sha1 => Sha1::digest(input).to_vec(),
        }
    }
}

/// Render the canonical signing input.
///
/// The secret comes first, followed by every `key=value` pair in key order,
/// joined with `:`.
fn signature_input(params: &ParamsMap, signature_key: &str, shop_id: &str) -> String {
    let shop_id_key = RequestParameter::ShopId.wire_name();
    let mut canonical = params.clone();
    canonical
        .entry(shop_id_key.to_string())
        .or_insert_with(|| shop_id.to_string());

    std::iter::once(signature_key.to_string())
        .chain(canonical.iter().map(|(key, value)| format!("{key}={value}")))
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Compute the signature over *all* given parameters.
///
/// No filtering happens here; use [`get_signature`] for caller-supplied maps.
///
/// # Example
///
/// ```
/// use flexpay_lib::params::ParamsMap;
/// use flexpay_lib::signing::{compute_signature, SignatureAlgorithm};
///
/// let mut params = ParamsMap::new();
/// params.insert("saleID".into(), "433456".into());
///
/// let a = compute_signature(&params, "secret", "60678", SignatureAlgorithm::Sha256);
/// let b = compute_signature(&params, "secret", "60678", SignatureAlgorithm::Sha256);
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 64);
/// ```
pub fn compute_signature(
    params: &ParamsMap,
    signature_key: &str,
    shop_id: &str,
    algorithm: SignatureAlgorithm,
) -> String {
    let input = signature_input(params, signature_key, shop_id);
    hex::encode(algorithm.digest(input.as_bytes()))
}

/// Keep only the parameters that participate in the signature.
pub fn filter_signed<K, V, I>(params: I) -> ParamsMap
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    params
        .into_iter()
        .filter(|(key, _)| is_signed_wire_name(key.as_ref()))
        .map(|(key, value)| (key.as_ref().to_string(), value.as_ref().to_string()))
        .collect()
}

/// Signature of the signed subset of `params`, with the default algorithm.
pub fn get_signature<K, V, I>(params: I, signature_key: &str, shop_id: &str) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    compute_signature(
        &filter_signed(params),
        signature_key,
        shop_id,
        SignatureAlgorithm::default(),
    )
}

/// Validate the `signature` field of received parameters.
///
/// # Returns
///
/// `true` when the received signature matches the expected one computed with
/// either SHA-256 or legacy SHA-1. A missing signature or a mismatch yields
/// `false`; nothing is raised.
///
/// Both candidates are always computed and compared in constant time, so the
/// outcome does not leak through timing which algorithm matched.
pub fn validate_signature<K, V, I>(received: I, signature_key: &str, shop_id: &str) -> bool
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let signature_field = RequestParameter::Signature.wire_name();
    let mut received_signature = None;
    let mut remaining = ParamsMap::new();

    for (key, value) in received {
        let (key, value) = (key.as_ref(), value.as_ref());
        if key == signature_field {
            received_signature = Some(value.to_ascii_lowercase());
        } else {
            remaining.insert(key.to_string(), value.to_string());
        }
    }

    let Some(received_signature) = received_signature else {
        #[cfg(feature = "tracing")]
        tracing::debug!("postback carries no signature");
        return false;
    };

    let signed = filter_signed(&remaining);
    let current = compute_signature(&signed, signature_key, shop_id, SignatureAlgorithm::Sha256);
    let legacy = compute_signature(&signed, signature_key, shop_id, SignatureAlgorithm::Sha1);

    let matched = hex_eq(&received_signature, &current) | hex_eq(&received_signature, &legacy);
    let valid = bool::from(matched);

    if !valid {
        #[cfg(feature = "tracing")]
        tracing::warn!(fields = signed.len(), "postback signature mismatch");
    }

    valid
}

fn hex_eq(received: &str, expected: &str) -> Choice {
    // Length differs between algorithms, and is not secret.
    if received.len() != expected.len() {
        return Choice::from(0);
    }
    received.as_bytes().ct_eq(expected.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "zpXwe2D77g4P7ysGJcr3rY87TBYs6J";
    const SHOP_ID: &str = "60678";

    fn params(pairs: &[(&str, &str)]) -> ParamsMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_signature_input_layout() {
        let input = signature_input(&params(&[("version", "4"), ("saleID", "1")]), "key", "7");
        assert_eq!(input, "key:saleID=1:shopID=7:version=4");
    }

    #[test]
    fn test_shop_id_not_overwritten() {
        let input = signature_input(&params(&[("shopID", "68849")]), "key", "60678");
        assert_eq!(input, "key:shopID=68849");
    }

    #[test]
    fn test_keys_sorted_bytewise() {
        // uppercase sorts before lowercase
        let input = signature_input(&params(&[("b", "1"), ("B", "2"), ("a", "3")]), "k", "s");
        assert_eq!(input, "k:B=2:a=3:b=1:shopID=s");
    }

    #[test]
    fn test_status_signature() {
        let signature = get_signature(
            &params(&[("saleID", "433456"), ("version", "4")]),
            SECRET,
            SHOP_ID,
        );
        assert_eq!(
            signature,
            "3a1302367c836c003d1674bf14aab48ef537fae7213f97e054b779940e925c2b"
        );
    }

    #[test]
    fn test_algorithms_differ_in_length() {
        let p = params(&[("saleID", "1")]);
        assert_eq!(compute_signature(&p, SECRET, SHOP_ID, SignatureAlgorithm::Sha256).len(), 64);
        assert_eq!(compute_signature(&p, SECRET, SHOP_ID, SignatureAlgorithm::Sha1).len(), 40);
    }

    #[test]
    fn test_unsigned_fields_are_ignored() {
        let base = params(&[("saleID", "1")]);
        let noisy = params(&[("saleID", "1"), ("email", "a@b.c"), ("blah", "x")]);
        assert_eq!(
            get_signature(&base, SECRET, SHOP_ID),
            get_signature(&noisy, SECRET, SHOP_ID)
        );
    }

    #[test]
    fn test_validate_accepts_uppercase_hex() {
        let mut p = params(&[("saleID", "1")]);
        let signature = get_signature(&p, SECRET, SHOP_ID).to_uppercase();
        p.insert("signature".into(), signature);
        assert!(validate_signature(&p, SECRET, SHOP_ID));
    }

    #[test]
    fn test_validate_accepts_legacy_sha1() {
        let mut p = params(&[("saleID", "1"), ("priceAmount", "9.99")]);
        let legacy = compute_signature(&filter_signed(&p), SECRET, SHOP_ID, SignatureAlgorithm::Sha1);
        p.insert("signature".into(), legacy);
        assert!(validate_signature(&p, SECRET, SHOP_ID));
    }

    #[test]
    fn test_validate_without_signature() {
        assert!(!validate_signature(&params(&[("saleID", "1")]), SECRET, SHOP_ID));
    }

    #[test]
    fn test_validate_garbage_signature() {
        let p = params(&[("saleID", "1"), ("signature", "not-hex")]);
        assert!(!validate_signature(&p, SECRET, SHOP_ID));
    }

    #[test]
    fn test_signature_key_is_case_sensitive() {
        // only the `signature` value is compared case-insensitively
        let mut p = params(&[("saleID", "1")]);
        let signature = get_signature(&p, SECRET, SHOP_ID);
        p.insert("Signature".into(), signature);
        assert!(!validate_signature(&p, SECRET, SHOP_ID));
    }

    #[test]
    fn test_validate_with_wrong_key() {
        let mut p = params(&[("saleID", "1")]);
        let signature = get_signature(&p, SECRET, SHOP_ID);
        p.insert("signature".into(), signature);
        assert!(!validate_signature(&p, "another-secret", SHOP_ID));
    }
}
