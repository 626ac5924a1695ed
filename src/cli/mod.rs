mod auth;
mod lookup;
mod show;
mod submit;

use crate::error::Result;
use clap::{Parser, Subcommand};

pub use lookup::LookupArgs;
pub use show::ShowResource;
pub use submit::SubmitArgs;

#[derive(Parser, Debug)]
#[command(name = "infaq-tracker")]
#[command(about = "Look up and record infaq contributions stored in Zoho Sheets", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub async fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Lookup(args) => lookup::execute(args).await,
            Commands::Submit(args) => submit::execute(args).await,
            Commands::Auth => auth::execute().await,
            Commands::Show { resource } => resource.execute().await,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up a person's infaq status for a given month and week
    Lookup(LookupArgs),
    /// Submit a new infaq payment row to the entry worksheet
    Submit(SubmitArgs),
    /// Verify the Zoho credentials by fetching an access token
    Auth,
    Show {
        #[command(subcommand)]
        resource: ShowResource,
    },
}
