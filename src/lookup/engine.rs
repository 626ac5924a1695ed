use crate::config::Config;
use crate::error::{AppError, Result};
use crate::lookup::filter;
use crate::models::{EntryRow, LookupResult, Selector, SheetTable};
use crate::zoho::ZohoOperations;
use tracing::{info, instrument, warn};

/// Result of one lookup run. Vendor failures never abort the run; they show
/// up here as diagnostics alongside the (degraded) result.
#[derive(Debug, PartialEq)]
pub struct LookupOutcome {
    pub result: LookupResult,
    pub diagnostics: Vec<String>,
}

pub struct LookupEngine<ZC> {
    config: Config,
    zoho: ZC,
}

impl<ZC> LookupEngine<ZC>
where
    ZC: ZohoOperations + Sync,
{
    pub fn new(config: Config, zoho: ZC) -> Self {
        Self { config, zoho }
    }

    #[instrument(name = "Lookup", skip_all, fields(name = %selector.name))]
    pub async fn lookup(&self, selector: &Selector) -> LookupOutcome {
        let mut diagnostics = Vec::new();
        let table = self.fetch_lookup_table(&mut diagnostics).await;

        if !table.is_empty() && !table.has_lookup_columns() {
            let message = format!(
                "Worksheet '{}' is missing the expected lookup columns",
                self.config.zoho.lookup_worksheet
            );
            warn!("{}", message);
            diagnostics.push(message);
        }

        let result = filter::lookup(&table, selector);
        LookupOutcome {
            result,
            diagnostics,
        }
    }

    /// Fetch the lookup worksheet, degrading to an empty table plus a
    /// user-visible diagnostic when the token exchange or data call fails.
    async fn fetch_lookup_table(&self, diagnostics: &mut Vec<String>) -> SheetTable {
        match self
            .zoho
            .fetch_table(
                &self.config.zoho.workbook_id,
                &self.config.zoho.lookup_worksheet,
            )
            .await
        {
            Ok(table) => table,
            Err(e) => {
                let message = format!("Failed to load worksheet data: {}", e);
                warn!("{}", message);
                diagnostics.push(message);
                SheetTable::default()
            }
        }
    }

    /// Submit a new payment row to the entry worksheet. Refuses without any
    /// network call while the entry feature flag is off.
    #[instrument(name = "Submitting entry", skip_all, fields(name = %entry.name))]
    pub async fn submit(&self, entry: &EntryRow) -> Result<()> {
        if !self.config.entry.enabled {
            return Err(AppError::EntryDisabled);
        }

        let worksheet = &self.config.zoho.entry_worksheet;
        if worksheet.is_empty() {
            return Err(AppError::Config(
                "zoho.entry_worksheet must be set to submit entries".to_string(),
            ));
        }

        self.zoho
            .append_row(&self.config.zoho.workbook_id, worksheet, entry.to_row())
            .await?;

        info!("Entry submitted");
        Ok(())
    }
}
