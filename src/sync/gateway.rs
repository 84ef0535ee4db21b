use crate::{
    constants::{DRIVE_FILE_ID_KEY, DRIVE_FILE_NAME},
    errors::{AppError, SyncError},
    localization::Labels,
    logging::logger::{log_error, log_info, log_warn},
    providers::{
        authenticator::{AccessToken, Authenticator, PendingAuthorization},
        document_storage::DocumentStorage,
        local_state::LocalState,
        spreadsheet_service::SpreadsheetService,
    },
    shapes::roster::{Roster, RosterAction},
    store::RosterStore,
    sync::{
        document::{deserialize_snapshot, encode_snapshot},
        session::SyncSession,
        sheet::to_tabular_export,
    },
};
use chrono::Local;
use std::sync::Arc;

/// Moves whole roster snapshots between the local store and the cloud.
///
/// Every remote call goes through the injected providers. Nothing here
/// touches the store except [`SyncGateway::load`], and only once the
/// downloaded document has been fully validated.
pub struct SyncGateway<
    A: Authenticator + Send + Sync + 'static,
    D: DocumentStorage + Send + Sync + 'static,
    S: SpreadsheetService + Send + Sync + 'static,
    L: LocalState + Send + Sync + 'static,
> {
    authenticator: Arc<A>,
    storage: Arc<D>,
    sheets: Arc<S>,
    local_state: Arc<L>,
    session: SyncSession,
}

impl<
        A: Authenticator + Send + Sync + 'static,
        D: DocumentStorage + Send + Sync + 'static,
        S: SpreadsheetService + Send + Sync + 'static,
        L: LocalState + Send + Sync + 'static,
    > SyncGateway<A, D, S, L>
{
    pub fn new(
        authenticator: Arc<A>,
        storage: Arc<D>,
        sheets: Arc<S>,
        local_state: Arc<L>,
    ) -> Self {
        Self {
            authenticator,
            storage,
            sheets,
            local_state,
            session: SyncSession::SignedOut,
        }
    }

    pub fn session(&self) -> &SyncSession {
        &self.session
    }

    pub async fn start_sign_in(&self) -> Result<PendingAuthorization, AppError> {
        self.authenticator.start().await
    }

    /// Completes a consent flow and enters `SignedIn`. On failure the
    /// session is left as it was.
    pub async fn finish_sign_in(
        &mut self,
        pending: PendingAuthorization,
    ) -> Result<Option<String>, AppError> {
        let token = self.authenticator.finish(pending).await.inspect_err(|e| {
            log_error(&format!("authentication failed: {}", e));
        })?;
        let email = match self.authenticator.user_email(&token).await {
            Ok(email) => email,
            Err(e) => {
                log_warn(&format!("could not fetch user profile: {}", e));
                None
            }
        };
        log_info(&format!(
            "signed in as '{}'",
            email.as_deref().unwrap_or("unknown")
        ));
        self.session.sign_in(token, email.clone());
        Ok(email)
    }

    pub async fn authenticate(&mut self) -> Result<Option<String>, AppError> {
        let pending = self.start_sign_in().await?;
        self.finish_sign_in(pending).await
    }

    /// Revokes the token and returns to `SignedOut`. A failed revocation is
    /// logged; the local session ends either way.
    pub async fn sign_out(&mut self) {
        if let Some(token) = self.session.sign_out() {
            match self.authenticator.revoke(&token).await {
                Ok(_) => log_info("signed out"),
                Err(e) => log_warn(&format!("could not revoke token: {}", e)),
            }
        }
    }

    fn token(&self) -> Result<&AccessToken, AppError> {
        let token = self.session.token()?;
        if token.is_expired() {
            log_warn("access token expired");
        }
        Ok(token)
    }

    /// The remembered document id, or the result of a search by file name.
    async fn resolve_document_id(&self, token: &AccessToken) -> Result<Option<String>, AppError> {
        match self.local_state.get(DRIVE_FILE_ID_KEY).await {
            Ok(Some(id)) => return Ok(Some(id)),
            Ok(None) => {}
            Err(e) => log_warn(&format!("could not read remembered document id: {}", e)),
        }
        log_info(&format!("searching for '{}'", DRIVE_FILE_NAME));
        let found = self.storage.find(token, DRIVE_FILE_NAME).await?;
        if let Some(id) = &found {
            self.remember_document_id(id).await;
        }
        Ok(found)
    }

    async fn remember_document_id(&self, id: &str) {
        if let Err(e) = self.local_state.set(DRIVE_FILE_ID_KEY, id).await {
            log_warn(&format!("could not remember document id: {}", e));
        }
    }

    async fn forget_document_id(&self) {
        if let Err(e) = self.local_state.remove(DRIVE_FILE_ID_KEY).await {
            log_warn(&format!("could not forget document id: {}", e));
        }
    }

    /// Uploads the roster, creating the remote document on first save.
    /// Returns the remote document id.
    ///
    /// A remembered document that no longer exists is forgotten, and the
    /// save falls back to a search by name and then to creating a new file.
    pub async fn save(&self, roster: &Roster) -> Result<String, AppError> {
        let token = self.token()?;
        let content = encode_snapshot(roster)?;
        let file_id = self.resolve_document_id(token).await?;
        let result = self
            .storage
            .upload(token, file_id.as_deref(), DRIVE_FILE_NAME, content.clone())
            .await;
        let id = match (result, file_id) {
            (Err(AppError::Sync(SyncError::DocumentNotFound)), Some(stale)) => {
                log_warn(&format!("remembered document '{}' is gone", stale));
                self.forget_document_id().await;
                let found = self
                    .resolve_document_id(token)
                    .await?
                    .filter(|id| *id != stale);
                self.storage
                    .upload(token, found.as_deref(), DRIVE_FILE_NAME, content)
                    .await
            }
            (result, _) => result,
        }
        .inspect_err(|e| log_error(&format!("save failed: {}", e)))?;
        self.remember_document_id(&id).await;
        Ok(id)
    }

    /// Downloads the remote document and replaces the whole roster with it.
    pub async fn load(&self, store: &RosterStore) -> Result<Arc<Roster>, AppError> {
        let token = self.token()?;
        let file_id = self
            .resolve_document_id(token)
            .await?
            .ok_or(AppError::Sync(SyncError::DocumentNotFound))?;
        let document = match self.storage.download(token, &file_id).await {
            Ok(document) => document,
            Err(AppError::Sync(SyncError::DocumentNotFound)) => {
                log_warn(&format!("remembered document '{}' is gone", file_id));
                self.forget_document_id().await;
                return Err(AppError::Sync(SyncError::DocumentNotFound));
            }
            Err(e) => {
                log_error(&format!("load failed: {}", e));
                return Err(e);
            }
        };
        let document = deserialize_snapshot(document)?;
        let roster = store.dispatch(RosterAction::ReplaceAll(
            document.players,
            document.training_dates,
        ))?;
        log_info(&format!(
            "loaded {} players and {} training dates",
            roster.players().len(),
            roster.training_dates().len()
        ));
        Ok(roster)
    }

    /// Creates a spreadsheet with the attendance grid and returns its URL.
    pub async fn export(&self, roster: &Roster, labels: &Labels) -> Result<String, AppError> {
        let token = self.token()?;
        let rows = to_tabular_export(roster, labels);
        let title = format!(
            "{} - {}",
            labels.spreadsheet_title,
            Local::now().format("%d/%m/%Y %H:%M:%S")
        );
        self.sheets
            .create(token, &title, labels.sheet_name, &rows)
            .await
            .inspect_err(|e| log_error(&format!("export failed: {}", e)))
    }
}
