use crate::config::Config;
use crate::error::Result;
use crate::zoho::{ZohoClient, ZohoOperations};
use clap::Subcommand;
use tracing::info;

#[derive(Subcommand, Debug)]
pub enum ShowResource {
    /// Show the configuration file path
    Paths,
    /// Fetch and print the lookup worksheet
    Table,
}

impl ShowResource {
    pub async fn execute(&self) -> Result<()> {
        match self {
            ShowResource::Paths => show_paths(),
            ShowResource::Table => show_table().await,
        }
    }
}

fn show_paths() -> Result<()> {
    let config_path = Config::config_file()?;

    info!(path = ?config_path, "Config path");

    Ok(())
}

async fn show_table() -> Result<()> {
    let config = Config::load()?;
    let client = ZohoClient::new(&config.zoho);

    let table = client
        .fetch_table(&config.zoho.workbook_id, &config.zoho.lookup_worksheet)
        .await?;

    for row in table.rows() {
        println!("{}", row.join("\t"));
    }

    Ok(())
}
