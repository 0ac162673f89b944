//! FlexPay CLI
//!
//! Generate signed FlexPay URLs and check postback signatures from the
//! command line.

use anyhow::Result;
use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod ui;

use commands::order::{PurchaseArgs, SubscriptionArgs, UpgradeArgs};
use commands::sale::SaleLookup;
use commands::Credentials;

#[derive(Parser)]
#[command(name = "flexpay")]
#[command(about = "FlexPay CLI - signed payment page URLs and postback validation", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON file with shop_id, signature_key and optional brand / merchant_id
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Website ID
    #[arg(long, global = true, env = "FLEXPAY_SHOP_ID")]
    shop_id: Option<String>,

    /// FlexPay signature key of the website
    #[arg(long, global = true, env = "FLEXPAY_SIGNATURE_KEY", hide_env_values = true)]
    signature_key: Option<String>,

    /// Merchant account ID, selects the brand
    #[arg(long, global = true, env = "FLEXPAY_MERCHANT_ID")]
    merchant_id: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// URL for a one-off purchase
    Purchase(PurchaseArgs),

    /// URL for an initial payment plus subscription
    Subscription(SubscriptionArgs),

    /// URL for upgrading an existing subscription
    Upgrade(UpgradeArgs),

    /// URL with machine-readable sale information
    #[command(group(ArgGroup::new("lookup").required(true).args(["sale_id", "reference_id"])))]
    Status {
        /// Sale ID
        #[arg(long)]
        sale_id: Option<String>,

        /// Merchant's reference ID
        #[arg(long)]
        reference_id: Option<String>,
    },

    /// URL where a subscriber can cancel a subscription
    Cancel {
        /// Sale ID of the subscription
        #[arg(long)]
        sale_id: String,
    },

    /// Print the signature of KEY=VALUE parameters
    Sign {
        /// Parameters, e.g. saleID=433456
        #[arg(required = true)]
        params: Vec<String>,
    },

    /// Check the signature of a postback query string (exit status 1 when invalid)
    Validate {
        /// Query string, e.g. "saleID=1&shopID=2&signature=..."
        query: String,
    },

    /// Show the brand a merchant ID belongs to
    Brand {
        /// Merchant account ID
        merchant_id: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("flexpay_cli=debug,flexpay_lib=debug")
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("flexpay_cli=info,flexpay_lib=warn")
            .with_writer(std::io::stderr)
            .init();
    }

    let credentials = Credentials {
        config: cli.config,
        shop_id: cli.shop_id,
        signature_key: cli.signature_key,
        merchant_id: cli.merchant_id,
    };

    match cli.command {
        Commands::Brand { merchant_id, json } => {
            commands::brand::run(&merchant_id, json)?;
        }
        Commands::Purchase(args) => {
            commands::order::purchase(&credentials.into_client()?, args)?;
        }
        Commands::Subscription(args) => {
            commands::order::subscription(&credentials.into_client()?, args)?;
        }
        Commands::Upgrade(args) => {
            commands::order::upgrade(&credentials.into_client()?, args)?;
        }
        Commands::Status {
            sale_id,
            reference_id,
        } => {
            let lookup = match (sale_id, reference_id) {
                (Some(sale_id), _) => SaleLookup::Sale(sale_id),
                (None, Some(reference_id)) => SaleLookup::Reference(reference_id),
                (None, None) => anyhow::bail!("--sale-id or --reference-id is required"),
            };
            commands::sale::status(&credentials.into_client()?, lookup)?;
        }
        Commands::Cancel { sale_id } => {
            commands::sale::cancel(&credentials.into_client()?, &sale_id)?;
        }
        Commands::Sign { params } => {
            commands::signature::sign(&credentials.into_client()?, &params)?;
        }
        Commands::Validate { query } => {
            if !commands::signature::validate(&credentials.into_client()?, &query) {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
