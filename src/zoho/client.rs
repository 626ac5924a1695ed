use super::ZohoOperations;
use crate::cache::TtlCache;
use crate::config::ZohoConfig;
use crate::error::{AppError, Result};
use crate::models::SheetTable;
use crate::zoho::auth::ZohoAuth;
use async_trait::async_trait;
use chrono::Duration;
use serde_json::json;
use tracing::{debug, instrument};
use url::Url;

/// Fetched tables are reused briefly so repeated lookups against the same
/// worksheet do not re-download it.
const TABLE_TTL_SECS: i64 = 600;

pub struct ZohoClient {
    client: reqwest::Client,
    auth: ZohoAuth,
    api_base: String,
    tables: TtlCache<(String, String), SheetTable>,
}

impl ZohoClient {
    pub fn new(config: &ZohoConfig) -> Self {
        let auth = ZohoAuth::new(config);
        Self {
            client: auth.http_client(),
            auth,
            api_base: config.api_base(),
            tables: TtlCache::new(Duration::seconds(TABLE_TTL_SECS)),
        }
    }

    /// Fetch an access token without touching any worksheet, to check that
    /// the configured credentials work.
    pub async fn verify_credentials(&self) -> Result<()> {
        self.auth.get_access_token().await?;
        Ok(())
    }

    // The vendor exposes two addressing shapes: reads use
    // /{workbook}/data/{worksheet}, row inserts use
    // /workbooks/{workbook}/worksheets/{worksheet}/rows.

    fn read_url(&self, workbook_id: &str, worksheet_name: &str) -> Result<Url> {
        let mut url = self.base_url()?;
        url.path_segments_mut()
            .map_err(|_| AppError::Zoho("API base URL cannot carry path segments".to_string()))?
            .pop_if_empty()
            .extend([workbook_id, "data", worksheet_name]);
        Ok(url)
    }

    fn insert_url(&self, workbook_id: &str, worksheet_name: &str) -> Result<Url> {
        let mut url = self.base_url()?;
        url.path_segments_mut()
            .map_err(|_| AppError::Zoho("API base URL cannot carry path segments".to_string()))?
            .pop_if_empty()
            .extend([
                "workbooks",
                workbook_id,
                "worksheets",
                worksheet_name,
                "rows",
            ]);
        Ok(url)
    }

    fn base_url(&self) -> Result<Url> {
        Url::parse(&self.api_base)
            .map_err(|e| AppError::Zoho(format!("Invalid API base URL: {}", e)))
    }
}

#[async_trait]
impl ZohoOperations for ZohoClient {
    #[instrument(name = "Fetching worksheet", skip(self))]
    async fn fetch_table(&self, workbook_id: &str, worksheet_name: &str) -> Result<SheetTable> {
        let key = (workbook_id.to_string(), worksheet_name.to_string());
        if let Some(table) = self.tables.get(&key) {
            debug!("Using cached worksheet data");
            return Ok(table);
        }

        let token = self.auth.get_access_token().await?;
        let url = self.read_url(workbook_id, worksheet_name)?;

        let response = self
            .client
            .get(url)
            .header("Authorization", format!("Zoho-oauthtoken {}", token))
            .header("Accept", "text/csv")
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Zoho(format!(
                "Failed to fetch worksheet '{}': {} - {}",
                worksheet_name, status, body
            )));
        }

        let body = response.text().await?;
        let table = SheetTable::from_csv(&body)?;
        debug!(rows = table.rows().len(), "Worksheet fetched");

        self.tables.put(key, table.clone());
        Ok(table)
    }

    #[instrument(name = "Appending worksheet row", skip(self, row))]
    async fn append_row(
        &self,
        workbook_id: &str,
        worksheet_name: &str,
        row: Vec<String>,
    ) -> Result<()> {
        let token = self.auth.get_access_token().await?;
        let url = self.insert_url(workbook_id, worksheet_name)?;

        let payload = json!({
            "data": [row],
            "skip_row_header": true,
        });

        let response = self
            .client
            .post(url)
            .header("Authorization", format!("Zoho-oauthtoken {}", token))
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Zoho(format!(
                "Failed to insert row into '{}': {} - {}",
                worksheet_name, status, body
            )));
        }

        debug!("Row inserted");
        Ok(())
    }
}
