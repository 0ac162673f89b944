//! CLI command implementations

pub mod brand;
pub mod order;
pub mod sale;
pub mod signature;

use anyhow::{Context, Result};
use flexpay_lib::{FlexPayClient, FlexPayConfig};
use std::path::PathBuf;

/// Merchant credentials as given on the command line or in the environment.
pub struct Credentials {
    pub config: Option<PathBuf>,
    pub shop_id: Option<String>,
    pub signature_key: Option<String>,
    pub merchant_id: Option<String>,
}

impl Credentials {
    /// Resolve the configuration: the config file first, then individual
    /// flags on top of it.
    pub fn resolve(self) -> Result<FlexPayConfig> {
        let mut config = match &self.config {
            Some(path) => FlexPayConfig::from_file(path)
                .with_context(|| format!("Failed to load {}", path.display()))?,
            None => FlexPayConfig::new(String::new(), String::new()),
        };

        if let Some(shop_id) = self.shop_id {
            config.shop_id = shop_id;
        }
        if let Some(signature_key) = self.signature_key {
            config.signature_key = signature_key;
        }
        if let Some(merchant_id) = self.merchant_id {
            config.merchant_id = Some(merchant_id);
        }

        Ok(config)
    }

    pub fn into_client(self) -> Result<FlexPayClient> {
        let config = self.resolve()?;
        tracing::debug!(shop_id = %config.shop_id, "resolved merchant configuration");
        config.into_client().context(
            "No usable credentials. Pass --shop-id and --signature-key, \
             set FLEXPAY_SHOP_ID and FLEXPAY_SIGNATURE_KEY, or use --config",
        )
    }
}
