use crate::errors::AppError;
use async_trait::async_trait;

/// Small key/value state remembered between sessions.
#[async_trait]
pub trait LocalState {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
    async fn remove(&self, key: &str) -> Result<(), AppError>;
}
