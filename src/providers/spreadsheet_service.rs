use crate::{errors::AppError, providers::authenticator::AccessToken};
use async_trait::async_trait;

#[async_trait]
pub trait SpreadsheetService {
    /// Creates a new spreadsheet with a single sheet filled with `rows`, and
    /// returns its URL.
    async fn create(
        &self,
        token: &AccessToken,
        title: &str,
        sheet_name: &str,
        rows: &[Vec<String>],
    ) -> Result<String, AppError>;
}
