use crate::config::Config;
use crate::error::Result;
use crate::zoho::ZohoClient;
use tracing::info;

pub async fn execute() -> Result<()> {
    let config = Config::load()?;
    let client = ZohoClient::new(&config.zoho);

    client.verify_credentials().await?;

    info!("Zoho credentials verified");

    Ok(())
}
