//! Sign and validate commands

use anyhow::{anyhow, Result};
use flexpay_lib::postback::parse_query;
use flexpay_lib::FlexPayClient;

use crate::ui;

/// Parse `KEY=VALUE` arguments. The value may itself contain `=`.
pub fn parse_pairs(pairs: &[String]) -> Result<Vec<(String, String)>> {
    pairs
        .iter()
        .map(|pair| {
            pair.split_once('=')
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .ok_or_else(|| anyhow!("Expected KEY=VALUE, got {pair:?}"))
        })
        .collect()
}

/// Print the signature of the given parameters.
pub fn sign(client: &FlexPayClient, pairs: &[String]) -> Result<()> {
    let params = parse_pairs(pairs)?;
    println!("{}", client.get_signature(params));
    Ok(())
}

/// Check a postback query string. Returns whether the signature is valid.
pub fn validate(client: &FlexPayClient, query: &str) -> bool {
    let params = parse_query(query);
    tracing::debug!(fields = params.len(), "validating postback");

    if client.validate_signature(&params) {
        ui::success("Signature is valid");
        true
    } else {
        ui::error("Signature is invalid or missing");
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pairs() {
        let pairs = parse_pairs(&["saleID=1".to_string(), "successURL=http://a?b=c".to_string()])
            .unwrap();
        assert_eq!(pairs[0], ("saleID".to_string(), "1".to_string()));
        assert_eq!(pairs[1].1, "http://a?b=c");

        assert!(parse_pairs(&["novalue".to_string()]).is_err());
    }
}
