use crate::{
    errors::{AppError, SyncError},
    providers::authenticator::AccessToken,
};

/// Sign-in state of the sync gateway.
///
/// `SignedOut → SignedIn` on a successful authentication, back to
/// `SignedOut` on sign-out. Save, load and export require `SignedIn`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SyncSession {
    #[default]
    SignedOut,
    SignedIn {
        token: AccessToken,
        email: Option<String>,
    },
}

impl SyncSession {
    pub fn is_signed_in(&self) -> bool {
        matches!(self, SyncSession::SignedIn { .. })
    }

    pub fn email(&self) -> Option<&str> {
        match self {
            SyncSession::SignedIn { email, .. } => email.as_deref(),
            SyncSession::SignedOut => None,
        }
    }

    pub fn token(&self) -> Result<&AccessToken, AppError> {
        match self {
            SyncSession::SignedIn { token, .. } => Ok(token),
            SyncSession::SignedOut => Err(AppError::Sync(SyncError::NotSignedIn)),
        }
    }

    pub fn sign_in(&mut self, token: AccessToken, email: Option<String>) {
        *self = SyncSession::SignedIn { token, email };
    }

    /// Moves to `SignedOut`, handing back the token that was in use.
    pub fn sign_out(&mut self) -> Option<AccessToken> {
        match std::mem::take(self) {
            SyncSession::SignedIn { token, .. } => Some(token),
            SyncSession::SignedOut => None,
        }
    }
}
