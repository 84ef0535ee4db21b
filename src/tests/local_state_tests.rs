#[cfg(test)]
mod tests {
    use crate::providers::{fs::local_state::FileSystemLocalState, local_state::LocalState};
    use std::fs::{create_dir_all, remove_dir_all};

    #[tokio::test]
    async fn values_survive_a_new_instance() {
        let dir = std::env::temp_dir().join(format!("attend4all-state-{}", std::process::id()));
        create_dir_all(&dir).expect("expected a temp dir");
        let state = FileSystemLocalState::new(&dir);
        assert_eq!(state.get("missing").await.expect("expected a read"), None);
        state
            .set("google_drive_file_id", "abc")
            .await
            .expect("expected a write");
        state.set("other", "1").await.expect("expected a write");

        let reopened = FileSystemLocalState::new(&dir);
        assert_eq!(
            reopened
                .get("google_drive_file_id")
                .await
                .expect("expected a read")
                .as_deref(),
            Some("abc")
        );
        reopened
            .remove("google_drive_file_id")
            .await
            .expect("expected a removal");
        assert_eq!(
            state
                .get("google_drive_file_id")
                .await
                .expect("expected a read"),
            None
        );
        assert_eq!(
            state.get("other").await.expect("expected a read").as_deref(),
            Some("1")
        );
        let _ = remove_dir_all(&dir);
    }
}
