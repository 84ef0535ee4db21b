use crate::{
    constants::SHEETS_URL,
    errors::AppError,
    logging::logger::log_info,
    providers::{
        authenticator::AccessToken,
        google::{error_for_response, transport},
        spreadsheet_service::SpreadsheetService,
    },
};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreatedSpreadsheet {
    spreadsheet_url: String,
}

pub struct GoogleSheetsService {
    client: Client,
}

impl GoogleSheetsService {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

/// `spreadsheets.create` request body: one sheet, every cell entered as a
/// string.
pub fn spreadsheet_body(title: &str, sheet_name: &str, rows: &[Vec<String>]) -> Value {
    let row_data: Vec<Value> = rows
        .iter()
        .map(|row| {
            let values: Vec<Value> = row
                .iter()
                .map(|cell| json!({ "userEnteredValue": { "stringValue": cell } }))
                .collect();
            json!({ "values": values })
        })
        .collect();
    json!({
        "properties": { "title": title },
        "sheets": [{
            "properties": { "title": sheet_name },
            "data": [{ "rowData": row_data }]
        }]
    })
}

#[async_trait]
impl SpreadsheetService for GoogleSheetsService {
    async fn create(
        &self,
        token: &AccessToken,
        title: &str,
        sheet_name: &str,
        rows: &[Vec<String>],
    ) -> Result<String, AppError> {
        let response = self
            .client
            .post(SHEETS_URL)
            .bearer_auth(&token.value)
            .json(&spreadsheet_body(title, sheet_name, rows))
            .send()
            .await
            .map_err(transport)?;
        let created: CreatedSpreadsheet = error_for_response(response)
            .await?
            .json()
            .await
            .map_err(transport)?;
        log_info(&format!("created spreadsheet '{}'", created.spreadsheet_url));
        Ok(created.spreadsheet_url)
    }
}
