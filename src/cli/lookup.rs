use crate::config::Config;
use crate::error::Result;
use crate::lookup::LookupEngine;
use crate::models::Selector;
use crate::zoho::ZohoClient;
use clap::Args;
use tracing::warn;

#[derive(Args, Debug)]
pub struct LookupArgs {
    /// Contributor name as written in the worksheet
    #[arg(long)]
    pub name: String,

    /// Month name, e.g. JANUARI
    #[arg(long)]
    pub month: String,

    /// Which Friday of the month (1-5)
    #[arg(long)]
    pub week: u8,
}

pub async fn execute(args: &LookupArgs) -> Result<()> {
    let config = Config::load()?;
    let client = ZohoClient::new(&config.zoho);
    let engine = LookupEngine::new(config, client);

    let selector = Selector {
        name: args.name.clone(),
        month: args.month.clone(),
        week_index: args.week,
    };

    let outcome = engine.lookup(&selector).await;

    for message in &outcome.diagnostics {
        warn!("{}", message);
    }

    println!("TANGGUNGAN:    {}", outcome.result.tanggungan);
    println!("TOTAL SETAHUN: {}", outcome.result.total_setahun);

    Ok(())
}
