use crate::{errors::AppError, providers::authenticator::AccessToken};
use async_trait::async_trait;
use serde_json::Value;

/// Remote storage for the roster document.
#[async_trait]
pub trait DocumentStorage {
    /// Looks up a document owned by the user by file name.
    async fn find(&self, token: &AccessToken, name: &str) -> Result<Option<String>, AppError>;
    /// Creates the document when `file_id` is `None`, overwrites it otherwise.
    /// Returns the id of the stored document, or `DocumentNotFound` when
    /// `file_id` no longer exists.
    async fn upload(
        &self,
        token: &AccessToken,
        file_id: Option<&str>,
        name: &str,
        content: Vec<u8>,
    ) -> Result<String, AppError>;
    async fn download(&self, token: &AccessToken, file_id: &str) -> Result<Value, AppError>;
}
