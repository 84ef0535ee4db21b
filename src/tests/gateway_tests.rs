#[cfg(test)]
mod tests {
    use crate::{
        constants::{DRIVE_FILE_ID_KEY, DRIVE_FILE_NAME},
        errors::{AppError, SyncError},
        localization::labels_for,
        providers::{
            authenticator::{AccessToken, Authenticator, PendingAuthorization},
            document_storage::DocumentStorage,
            local_state::LocalState,
            spreadsheet_service::SpreadsheetService,
        },
        shapes::{enums::LanguageEnum, roster::Roster, roster::RosterAction},
        store::RosterStore,
        sync::{gateway::SyncGateway, session::SyncSession},
    };
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::{
        collections::HashMap,
        sync::{
            atomic::{AtomicUsize, Ordering},
            Arc, Mutex,
        },
    };

    fn token() -> AccessToken {
        AccessToken {
            value: "token-1".to_string(),
            expires_at: None,
        }
    }

    #[derive(Default)]
    struct FakeAuthenticator {
        deny: bool,
        revoked: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl Authenticator for FakeAuthenticator {
        async fn start(&self) -> Result<PendingAuthorization, AppError> {
            Ok(PendingAuthorization {
                url: "https://accounts.example/consent".to_string(),
                redirect_uri: "http://127.0.0.1:1".to_string(),
                state: "state".to_string(),
                listener: None,
            })
        }

        async fn finish(&self, _pending: PendingAuthorization) -> Result<AccessToken, AppError> {
            if self.deny {
                Err(AppError::Sync(SyncError::AuthorizationDenied(
                    "access_denied".to_string(),
                )))
            } else {
                Ok(token())
            }
        }

        async fn user_email(&self, _token: &AccessToken) -> Result<Option<String>, AppError> {
            Ok(Some("coach@example.com".to_string()))
        }

        async fn revoke(&self, token: &AccessToken) -> Result<(), AppError> {
            self.revoked
                .lock()
                .expect("expected the lock")
                .push(token.value.clone());
            Ok(())
        }
    }

    #[derive(Default)]
    struct FakeStorage {
        files: Mutex<HashMap<String, Value>>,
        finds: AtomicUsize,
        uploads: Mutex<Vec<Option<String>>>,
        fail_downloads: bool,
    }

    impl FakeStorage {
        fn with_file(id: &str, content: Value) -> Self {
            let storage = Self::default();
            storage
                .files
                .lock()
                .expect("expected the lock")
                .insert(id.to_string(), content);
            storage
        }
    }

    #[async_trait]
    impl DocumentStorage for FakeStorage {
        async fn find(&self, _token: &AccessToken, name: &str) -> Result<Option<String>, AppError> {
            assert_eq!(name, DRIVE_FILE_NAME);
            self.finds.fetch_add(1, Ordering::SeqCst);
            Ok(self
                .files
                .lock()
                .expect("expected the lock")
                .keys()
                .next()
                .cloned())
        }

        async fn upload(
            &self,
            _token: &AccessToken,
            file_id: Option<&str>,
            _name: &str,
            content: Vec<u8>,
        ) -> Result<String, AppError> {
            let value: Value = serde_json::from_slice(&content).expect("expected JSON content");
            self.uploads
                .lock()
                .expect("expected the lock")
                .push(file_id.map(str::to_string));
            let mut files = self.files.lock().expect("expected the lock");
            let id = match file_id {
                Some(id) if !files.contains_key(id) => {
                    return Err(AppError::Sync(SyncError::DocumentNotFound));
                }
                Some(id) => id.to_string(),
                None => format!("file-{}", files.len() + 1),
            };
            files.insert(id.clone(), value);
            Ok(id)
        }

        async fn download(&self, _token: &AccessToken, file_id: &str) -> Result<Value, AppError> {
            if self.fail_downloads {
                return Err(AppError::Sync(SyncError::Transport(
                    "connection reset".to_string(),
                )));
            }
            self.files
                .lock()
                .expect("expected the lock")
                .get(file_id)
                .cloned()
                .ok_or(AppError::Sync(SyncError::DocumentNotFound))
        }
    }

    #[derive(Default)]
    struct FakeSheets {
        created: Mutex<Vec<(String, String, Vec<Vec<String>>)>>,
    }

    #[async_trait]
    impl SpreadsheetService for FakeSheets {
        async fn create(
            &self,
            _token: &AccessToken,
            title: &str,
            sheet_name: &str,
            rows: &[Vec<String>],
        ) -> Result<String, AppError> {
            self.created.lock().expect("expected the lock").push((
                title.to_string(),
                sheet_name.to_string(),
                rows.to_vec(),
            ));
            Ok("https://docs.example/spreadsheets/d/sheet-1".to_string())
        }
    }

    #[derive(Default)]
    struct MemoryLocalState(Mutex<HashMap<String, String>>);

    #[async_trait]
    impl LocalState for MemoryLocalState {
        async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
            Ok(self.0.lock().expect("expected the lock").get(key).cloned())
        }

        async fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
            self.0
                .lock()
                .expect("expected the lock")
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        async fn remove(&self, key: &str) -> Result<(), AppError> {
            self.0.lock().expect("expected the lock").remove(key);
            Ok(())
        }
    }

    type TestGateway = SyncGateway<FakeAuthenticator, FakeStorage, FakeSheets, MemoryLocalState>;

    struct Fixture {
        gateway: TestGateway,
        authenticator: Arc<FakeAuthenticator>,
        storage: Arc<FakeStorage>,
        sheets: Arc<FakeSheets>,
        local_state: Arc<MemoryLocalState>,
    }

    fn fixture_with(authenticator: FakeAuthenticator, storage: FakeStorage) -> Fixture {
        let authenticator = Arc::new(authenticator);
        let storage = Arc::new(storage);
        let sheets = Arc::new(FakeSheets::default());
        let local_state = Arc::new(MemoryLocalState::default());
        Fixture {
            gateway: SyncGateway::new(
                authenticator.clone(),
                storage.clone(),
                sheets.clone(),
                local_state.clone(),
            ),
            authenticator,
            storage,
            sheets,
            local_state,
        }
    }

    async fn signed_in(storage: FakeStorage) -> Fixture {
        let mut fixture = fixture_with(FakeAuthenticator::default(), storage);
        fixture
            .gateway
            .authenticate()
            .await
            .expect("expected sign-in to succeed");
        fixture
    }

    fn assert_not_signed_in<T: std::fmt::Debug>(result: Result<T, AppError>) {
        assert!(matches!(
            result,
            Err(AppError::Sync(SyncError::NotSignedIn))
        ));
    }

    #[tokio::test]
    async fn sign_in_and_sign_out_walk_the_session_states() {
        let mut fixture = fixture_with(FakeAuthenticator::default(), FakeStorage::default());
        assert_eq!(fixture.gateway.session(), &SyncSession::SignedOut);
        let email = fixture
            .gateway
            .authenticate()
            .await
            .expect("expected sign-in to succeed");
        assert_eq!(email.as_deref(), Some("coach@example.com"));
        assert!(fixture.gateway.session().is_signed_in());
        assert_eq!(fixture.gateway.session().email(), Some("coach@example.com"));

        fixture.gateway.sign_out().await;
        assert_eq!(fixture.gateway.session(), &SyncSession::SignedOut);
        assert_eq!(
            *fixture.authenticator.revoked.lock().expect("expected the lock"),
            vec!["token-1".to_string()]
        );
        // signing out twice revokes nothing more
        fixture.gateway.sign_out().await;
        assert_eq!(
            fixture
                .authenticator
                .revoked
                .lock()
                .expect("expected the lock")
                .len(),
            1
        );
    }

    #[tokio::test]
    async fn denied_consent_keeps_the_session_signed_out() {
        let mut fixture = fixture_with(
            FakeAuthenticator {
                deny: true,
                ..Default::default()
            },
            FakeStorage::default(),
        );
        let pending = fixture
            .gateway
            .start_sign_in()
            .await
            .expect("expected the flow to start");
        assert_eq!(pending.url, "https://accounts.example/consent");
        let result = fixture.gateway.finish_sign_in(pending).await;
        assert!(matches!(
            result,
            Err(AppError::Sync(SyncError::AuthorizationDenied(_)))
        ));
        assert_eq!(fixture.gateway.session(), &SyncSession::SignedOut);
    }

    #[tokio::test]
    async fn remote_operations_require_sign_in() {
        let fixture = fixture_with(FakeAuthenticator::default(), FakeStorage::default());
        let store = RosterStore::default();
        assert_not_signed_in(fixture.gateway.save(&store.snapshot()).await);
        assert_not_signed_in(fixture.gateway.load(&store).await);
        assert_not_signed_in(
            fixture
                .gateway
                .export(&store.snapshot(), labels_for(LanguageEnum::En))
                .await,
        );
        assert_eq!(fixture.storage.finds.load(Ordering::SeqCst), 0);
        assert_eq!(*store.snapshot(), Roster::seeded());
    }

    #[tokio::test]
    async fn first_save_creates_and_remembers_the_document() {
        let fixture = signed_in(FakeStorage::default()).await;
        let roster = Roster::seeded();
        let id = fixture
            .gateway
            .save(&roster)
            .await
            .expect("expected the save to succeed");
        assert_eq!(id, "file-1");
        assert_eq!(
            fixture
                .local_state
                .get(DRIVE_FILE_ID_KEY)
                .await
                .expect("expected a read")
                .as_deref(),
            Some("file-1")
        );

        fixture
            .gateway
            .save(&roster.add_player())
            .await
            .expect("expected the save to succeed");
        // the second save patches the remembered document without searching again
        assert_eq!(fixture.storage.finds.load(Ordering::SeqCst), 1);
        assert_eq!(
            *fixture.storage.uploads.lock().expect("expected the lock"),
            vec![None, Some("file-1".to_string())]
        );
    }

    #[tokio::test]
    async fn save_reuses_a_document_found_by_name() {
        let fixture = signed_in(FakeStorage::with_file(
            "existing",
            json!({ "players": [], "trainingDates": [] }),
        ))
        .await;
        let id = fixture
            .gateway
            .save(&Roster::seeded())
            .await
            .expect("expected the save to succeed");
        assert_eq!(id, "existing");
    }

    #[tokio::test]
    async fn load_replaces_the_whole_roster() {
        let fixture = signed_in(FakeStorage::default()).await;
        let saved = Roster::seeded()
            .remove_player(2)
            .expect("expected player 2 to be removed")
            .add_player();
        fixture
            .gateway
            .save(&saved)
            .await
            .expect("expected the save to succeed");

        let store = RosterStore::default();
        let mut rx = store.subscribe();
        let loaded = fixture
            .gateway
            .load(&store)
            .await
            .expect("expected the load to succeed");
        assert_eq!(*loaded, saved);
        assert_eq!(*store.snapshot(), saved);
        assert!(rx.has_changed().expect("expected the store to be alive"));
    }

    #[tokio::test]
    async fn load_without_a_document_is_reported() {
        let fixture = signed_in(FakeStorage::default()).await;
        let store = RosterStore::default();
        assert!(matches!(
            fixture.gateway.load(&store).await,
            Err(AppError::Sync(SyncError::DocumentNotFound))
        ));
        assert_eq!(*store.snapshot(), Roster::seeded());
    }

    #[tokio::test]
    async fn stale_document_id_is_forgotten() {
        let fixture = signed_in(FakeStorage::default()).await;
        fixture
            .local_state
            .set(DRIVE_FILE_ID_KEY, "deleted-file")
            .await
            .expect("expected a write");
        let store = RosterStore::default();
        assert!(matches!(
            fixture.gateway.load(&store).await,
            Err(AppError::Sync(SyncError::DocumentNotFound))
        ));
        assert_eq!(
            fixture
                .local_state
                .get(DRIVE_FILE_ID_KEY)
                .await
                .expect("expected a read"),
            None
        );
    }

    #[tokio::test]
    async fn save_recreates_a_deleted_remembered_document() {
        let fixture = signed_in(FakeStorage::default()).await;
        fixture
            .local_state
            .set(DRIVE_FILE_ID_KEY, "deleted-file")
            .await
            .expect("expected a write");
        let id = fixture
            .gateway
            .save(&Roster::seeded())
            .await
            .expect("expected the save to recover");
        assert_eq!(id, "file-1");
        assert_eq!(
            *fixture.storage.uploads.lock().expect("expected the lock"),
            vec![Some("deleted-file".to_string()), None]
        );
        assert_eq!(
            fixture
                .local_state
                .get(DRIVE_FILE_ID_KEY)
                .await
                .expect("expected a read")
                .as_deref(),
            Some("file-1")
        );

        // later saves patch the new document directly
        fixture
            .gateway
            .save(&Roster::seeded().add_player())
            .await
            .expect("expected the save to succeed");
        assert_eq!(
            fixture
                .storage
                .uploads
                .lock()
                .expect("expected the lock")
                .last()
                .cloned(),
            Some(Some("file-1".to_string()))
        );
    }

    #[tokio::test]
    async fn save_with_a_deleted_remembered_document_reuses_one_found_by_name() {
        let fixture = signed_in(FakeStorage::with_file(
            "existing",
            json!({ "players": [], "trainingDates": [] }),
        ))
        .await;
        fixture
            .local_state
            .set(DRIVE_FILE_ID_KEY, "deleted-file")
            .await
            .expect("expected a write");
        let id = fixture
            .gateway
            .save(&Roster::seeded())
            .await
            .expect("expected the save to recover");
        assert_eq!(id, "existing");
        assert_eq!(fixture.storage.finds.load(Ordering::SeqCst), 1);
        assert_eq!(
            fixture
                .local_state
                .get(DRIVE_FILE_ID_KEY)
                .await
                .expect("expected a read")
                .as_deref(),
            Some("existing")
        );
    }

    #[tokio::test]
    async fn malformed_documents_leave_the_store_untouched() {
        let documents = [
            json!({ "players": "nope", "trainingDates": [] }),
            json!({
                "players": [{ "id": 1, "name": "A", "attendance": [0] }],
                "trainingDates": ["2025-08-01", "2025-08-02"]
            }),
            json!({
                "players": [
                    { "id": 1, "name": "A", "attendance": [] },
                    { "id": 1, "name": "B", "attendance": [] }
                ],
                "trainingDates": []
            }),
        ];
        for document in documents {
            let fixture = signed_in(FakeStorage::with_file("file-1", document)).await;
            let store = RosterStore::default();
            store
                .dispatch(RosterAction::AddPlayer)
                .expect("expected the action to be accepted");
            let before = store.snapshot();
            assert!(matches!(
                fixture.gateway.load(&store).await,
                Err(AppError::Sync(SyncError::MalformedPayload(_)))
            ));
            assert!(Arc::ptr_eq(&before, &store.snapshot()));
        }
    }

    #[tokio::test]
    async fn transport_failures_leave_the_store_untouched() {
        let fixture = signed_in(FakeStorage {
            fail_downloads: true,
            ..FakeStorage::with_file("file-1", json!({ "players": [], "trainingDates": [] }))
        })
        .await;
        let store = RosterStore::default();
        assert!(matches!(
            fixture.gateway.load(&store).await,
            Err(AppError::Sync(SyncError::Transport(_)))
        ));
        assert_eq!(*store.snapshot(), Roster::seeded());
    }

    #[tokio::test]
    async fn export_sends_the_attendance_grid() {
        let fixture = signed_in(FakeStorage::default()).await;
        let labels = labels_for(LanguageEnum::En);
        let url = fixture
            .gateway
            .export(&Roster::seeded(), labels)
            .await
            .expect("expected the export to succeed");
        assert_eq!(url, "https://docs.example/spreadsheets/d/sheet-1");
        let created = fixture.sheets.created.lock().expect("expected the lock");
        let (title, sheet_name, rows) = &created[0];
        assert!(title.starts_with("Attendance Sheet - "));
        assert_eq!(sheet_name, "Attendance");
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0][0], "Player Name");
    }
}
