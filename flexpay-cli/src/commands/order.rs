//! Purchase, subscription and upgrade commands

use anyhow::{bail, Result};
use clap::Args;
use flexpay_lib::{
    Amount, FlexPayClient, PaymentMethod, Purchase, SaleCurrency, SubCreditor, Subscription,
    SubscriptionType, SubscriptionUpgrade, UpgradeOption,
};

/// Optional fields every order page accepts.
#[derive(Args, Debug)]
pub struct OrderArgs {
    /// Preselected payment method (CC, DDEU, IDEAL)
    #[arg(long)]
    pub payment_method: Option<PaymentMethod>,

    /// Passed back in postbacks
    #[arg(long)]
    pub custom1: Option<String>,

    /// Passed back in postbacks
    #[arg(long)]
    pub custom2: Option<String>,

    /// Passed back in postbacks
    #[arg(long)]
    pub custom3: Option<String>,

    /// Redirect after a successful transaction
    #[arg(long)]
    pub success_url: Option<String>,

    /// Redirect after a declined transaction
    #[arg(long)]
    pub decline_url: Option<String>,

    /// Buyer email address
    #[arg(long)]
    pub email: Option<String>,
}

/// Price and plan of a subscription or upgrade.
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Amount in nnn.nn format
    #[arg(long)]
    pub amount: Amount,

    /// Sale currency (USD, EUR, GBP, ...)
    #[arg(long)]
    pub currency: SaleCurrency,

    /// ISO 8601 duration, e.g. P30D
    #[arg(long)]
    pub period: String,

    /// one-time or recurring
    #[arg(long)]
    pub subscription_type: SubscriptionType,

    /// Amount charged for the trial period
    #[arg(long)]
    pub trial_amount: Option<Amount>,

    /// ISO 8601 duration of the trial
    #[arg(long)]
    pub trial_period: Option<String>,

    /// Shown on the order page
    #[arg(long)]
    pub description: Option<String>,
}

/// iDEAL sub-merchant data of a purchase.
#[derive(Args, Debug)]
pub struct IdealArgs {
    /// Merchant category code (iDEAL only)
    #[arg(long)]
    pub mcc: Option<String>,

    /// Sub-creditor name (iDEAL only)
    #[arg(long)]
    pub sub_creditor_name: Option<String>,

    /// Sub-creditor ID (iDEAL only)
    #[arg(long)]
    pub sub_creditor_id: Option<String>,

    /// Sub-creditor ISO 3166 country code (iDEAL only)
    #[arg(long)]
    pub sub_creditor_country: Option<String>,
}

impl IdealArgs {
    fn sub_creditor(&self) -> Result<Option<SubCreditor>> {
        match (
            &self.sub_creditor_name,
            &self.sub_creditor_id,
            &self.sub_creditor_country,
        ) {
            (None, None, None) => Ok(None),
            (Some(name), Some(id), Some(country)) => Ok(Some(SubCreditor::new(
                name.as_str(),
                id.as_str(),
                country.as_str(),
            ))),
            _ => bail!(
                "--sub-creditor-name, --sub-creditor-id and --sub-creditor-country must be given together"
            ),
        }
    }
}

/// One-off purchase.
#[derive(Args, Debug)]
pub struct PurchaseArgs {
    /// Amount in nnn.nn format
    #[arg(long)]
    pub amount: Amount,

    /// Sale currency (USD, EUR, GBP, ...)
    #[arg(long)]
    pub currency: SaleCurrency,

    /// Shown on the order page, max 100 printable characters
    #[arg(long)]
    pub description: String,

    /// Merchant's unique reference
    #[arg(long)]
    pub reference_id: Option<String>,

    /// Token of a previous purchase (requires CC)
    #[arg(long)]
    pub one_click_token: Option<String>,

    #[command(flatten)]
    pub ideal: IdealArgs,

    #[command(flatten)]
    pub order: OrderArgs,
}

/// Initial payment plus subscription.
#[derive(Args, Debug)]
pub struct SubscriptionArgs {
    #[command(flatten)]
    pub plan: PlanArgs,

    /// Merchant's unique reference
    #[arg(long)]
    pub reference_id: Option<String>,

    #[command(flatten)]
    pub order: OrderArgs,
}

/// Upgrade of an existing subscription.
#[derive(Args, Debug)]
pub struct UpgradeArgs {
    /// Sale being upgraded
    #[arg(long)]
    pub preceding_sale_id: String,

    #[command(flatten)]
    pub plan: PlanArgs,

    /// What happens to the remaining period (lost, extend)
    #[arg(long)]
    pub upgrade_option: Option<UpgradeOption>,

    #[command(flatten)]
    pub order: OrderArgs,
}

pub fn purchase(client: &FlexPayClient, args: PurchaseArgs) -> Result<()> {
    let order = args.order;
    let mut purchase = Purchase::new(args.amount, args.currency, args.description);
    purchase.reference_id = args.reference_id;
    purchase.one_click_token = args.one_click_token;
    purchase.sub_creditor = args.ideal.sub_creditor()?;
    purchase.mcc = args.ideal.mcc;
    purchase.payment_method = order.payment_method;
    purchase.custom1 = order.custom1;
    purchase.custom2 = order.custom2;
    purchase.custom3 = order.custom3;
    purchase.success_url = order.success_url;
    purchase.decline_url = order.decline_url;
    purchase.email = order.email;

    println!("{}", client.purchase_url(&purchase)?);
    Ok(())
}

pub fn subscription(client: &FlexPayClient, args: SubscriptionArgs) -> Result<()> {
    let (plan, order) = (args.plan, args.order);
    let mut subscription = Subscription::new(
        plan.period,
        plan.subscription_type,
        plan.amount,
        plan.currency,
    );
    subscription.trial_amount = plan.trial_amount;
    subscription.trial_period = plan.trial_period;
    subscription.description = plan.description;
    subscription.reference_id = args.reference_id;
    subscription.payment_method = order.payment_method;
    subscription.custom1 = order.custom1;
    subscription.custom2 = order.custom2;
    subscription.custom3 = order.custom3;
    subscription.success_url = order.success_url;
    subscription.decline_url = order.decline_url;
    subscription.email = order.email;

    println!("{}", client.subscription_url(&subscription)?);
    Ok(())
}

pub fn upgrade(client: &FlexPayClient, args: UpgradeArgs) -> Result<()> {
    let (plan, order) = (args.plan, args.order);
    let mut upgrade = SubscriptionUpgrade::new(
        args.preceding_sale_id,
        plan.period,
        plan.subscription_type,
        plan.amount,
        plan.currency,
    );
    upgrade.trial_amount = plan.trial_amount;
    upgrade.trial_period = plan.trial_period;
    upgrade.description = plan.description;
    upgrade.upgrade_option = args.upgrade_option;
    upgrade.payment_method = order.payment_method;
    upgrade.custom1 = order.custom1;
    upgrade.custom2 = order.custom2;
    upgrade.custom3 = order.custom3;
    upgrade.success_url = order.success_url;
    upgrade.decline_url = order.decline_url;
    upgrade.email = order.email;

    println!("{}", client.upgrade_subscription_url(&upgrade)?);
    Ok(())
}
