use crate::config::Config;
use crate::error::Result;
use crate::lookup::LookupEngine;
use crate::models::EntryRow;
use crate::zoho::ZohoClient;
use clap::Args;
use rust_decimal::Decimal;
use tracing::info;

#[derive(Args, Debug)]
pub struct SubmitArgs {
    /// Contributor name as written in the worksheet
    #[arg(long)]
    pub name: String,

    /// Month name, e.g. JANUARI
    #[arg(long)]
    pub month: String,

    /// Which Friday of the month (1-5)
    #[arg(long)]
    pub week: u8,

    /// Amount paid now, in rupiah
    #[arg(long, default_value = "0")]
    pub amount_paid: Decimal,

    /// Infaq amount, in rupiah
    #[arg(long, default_value = "0")]
    pub amount_infaq: Decimal,

    /// Liability text carried over from a prior lookup
    #[arg(long, default_value = "")]
    pub tanggungan: String,

    /// Value recorded in the input column
    #[arg(long, default_value = "0")]
    pub input_value: Decimal,
}

pub async fn execute(args: &SubmitArgs) -> Result<()> {
    let config = Config::load()?;
    let client = ZohoClient::new(&config.zoho);
    let engine = LookupEngine::new(config, client);

    let entry = EntryRow {
        name: args.name.clone(),
        month: args.month.clone(),
        week_index: args.week,
        amount_paid: args.amount_paid,
        amount_infaq: args.amount_infaq,
        tanggungan: args.tanggungan.clone(),
        input_value: args.input_value,
    };

    engine.submit(&entry).await?;

    info!(name = %args.name, month = %args.month, week = args.week, "Entry recorded");

    Ok(())
}
