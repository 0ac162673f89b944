//! Status and cancel commands

use anyhow::Result;
use flexpay_lib::FlexPayClient;

/// Which identifier a status lookup uses.
pub enum SaleLookup {
    Sale(String),
    Reference(String),
}

pub fn status(client: &FlexPayClient, lookup: SaleLookup) -> Result<()> {
    let url = match lookup {
        SaleLookup::Sale(sale_id) => client.status_url_by_sale(&sale_id)?,
        SaleLookup::Reference(reference_id) => client.status_url_by_reference(&reference_id)?,
    };
    println!("{url}");
    Ok(())
}

pub fn cancel(client: &FlexPayClient, sale_id: &str) -> Result<()> {
    println!("{}", client.cancel_subscription_url(sale_id)?);
    Ok(())
}
