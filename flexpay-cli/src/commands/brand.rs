//! Brand command - show the brand a merchant ID belongs to

use anyhow::Result;
use flexpay_lib::Brand;

use crate::ui;

pub fn run(merchant_id: &str, json: bool) -> Result<()> {
    let brand = Brand::from_merchant_id(merchant_id)?;

    if json {
        ui::json(&serde_json::json!({
            "brand": brand,
            "name": brand.name(),
            "merchant_prefix": brand.merchant_prefix(),
            "flexpay_url": brand.flexpay_url(),
            "status_url": brand.status_url(),
            "cancel_url": brand.cancel_url(),
        }));
        return Ok(());
    }

    ui::header(brand.name());
    ui::key_value("Merchant prefix", brand.merchant_prefix());
    ui::key_value("Order page", &brand.flexpay_url());
    ui::key_value("Sale status", &brand.status_url());
    ui::key_value("Cancel subscription", &brand.cancel_url());
    Ok(())
}
