mod auth;
mod client;
mod types;

pub use client::ZohoClient;

use crate::error::Result;
use crate::models::SheetTable;

use async_trait::async_trait;

#[async_trait]
pub trait ZohoOperations {
    async fn fetch_table(&self, workbook_id: &str, worksheet_name: &str) -> Result<SheetTable>;

    async fn append_row(
        &self,
        workbook_id: &str,
        worksheet_name: &str,
        row: Vec<String>,
    ) -> Result<()>;
}
