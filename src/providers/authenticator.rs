use crate::errors::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Local};
use tokio::net::TcpListener;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    pub value: String,
    pub expires_at: Option<DateTime<Local>>,
}

impl AccessToken {
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|at| at <= Local::now())
    }
}

/// A consent flow that has been started but not completed yet.
///
/// `url` is the page the user has to visit; `listener` (when present)
/// receives the redirect carrying the authorization code.
#[derive(Debug)]
pub struct PendingAuthorization {
    pub url: String,
    pub redirect_uri: String,
    pub state: String,
    pub listener: Option<TcpListener>,
}

#[async_trait]
pub trait Authenticator {
    async fn start(&self) -> Result<PendingAuthorization, AppError>;
    async fn finish(&self, pending: PendingAuthorization) -> Result<AccessToken, AppError>;
    async fn user_email(&self, token: &AccessToken) -> Result<Option<String>, AppError>;
    async fn revoke(&self, token: &AccessToken) -> Result<(), AppError>;
}
