use crate::{
    constants::{DRIVE_FILES_URL, DRIVE_FILE_MIME_TYPE, DRIVE_UPLOAD_URL},
    errors::{AppError, SyncError},
    logging::logger::log_info,
    providers::{
        authenticator::AccessToken,
        document_storage::DocumentStorage,
        google::{error_for_response, transport},
    },
};
use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client, StatusCode};
use serde::Deserialize;
use serde_json::{json, Value};

const BOUNDARY: &str = "-------attend4all-314159265358979323846";

#[derive(Debug, Deserialize)]
struct DriveFile {
    id: String,
}

#[derive(Debug, Deserialize)]
struct FileList {
    #[serde(default)]
    files: Vec<DriveFile>,
}

pub struct GoogleDriveStorage {
    client: Client,
}

impl GoogleDriveStorage {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

/// Search query matching a non-trashed file owned by the user.
pub fn find_query(name: &str) -> String {
    format!(
        "name='{}' and trashed=false and 'me' in owners",
        name.replace('\\', "\\\\").replace('\'', "\\'")
    )
}

/// `multipart/related` body carrying the file metadata and its content.
pub fn multipart_body(name: &str, content: &[u8]) -> Vec<u8> {
    let metadata = json!({ "name": name, "mimeType": DRIVE_FILE_MIME_TYPE });
    let mut body = format!(
        "--{b}\r\nContent-Type: application/json; charset=UTF-8\r\n\r\n{m}\r\n--{b}\r\nContent-Type: {t}\r\n\r\n",
        b = BOUNDARY,
        m = metadata,
        t = DRIVE_FILE_MIME_TYPE
    )
    .into_bytes();
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{}--", BOUNDARY).as_bytes());
    body
}

#[async_trait]
impl DocumentStorage for GoogleDriveStorage {
    async fn find(&self, token: &AccessToken, name: &str) -> Result<Option<String>, AppError> {
        let query = find_query(name);
        let response = self
            .client
            .get(DRIVE_FILES_URL)
            .bearer_auth(&token.value)
            .query(&[
                ("q", query.as_str()),
                ("spaces", "drive"),
                ("fields", "files(id, name)"),
            ])
            .send()
            .await
            .map_err(transport)?;
        let list: FileList = error_for_response(response)
            .await?
            .json()
            .await
            .map_err(transport)?;
        Ok(list.files.into_iter().next().map(|f| f.id))
    }

    async fn upload(
        &self,
        token: &AccessToken,
        file_id: Option<&str>,
        name: &str,
        content: Vec<u8>,
    ) -> Result<String, AppError> {
        let request = match file_id {
            Some(id) => self.client.patch(format!("{}/{}", DRIVE_UPLOAD_URL, id)),
            None => self.client.post(DRIVE_UPLOAD_URL),
        };
        let response = request
            .bearer_auth(&token.value)
            .query(&[("uploadType", "multipart"), ("fields", "id")])
            .header(
                CONTENT_TYPE,
                format!("multipart/related; boundary=\"{}\"", BOUNDARY),
            )
            .body(multipart_body(name, &content))
            .send()
            .await
            .map_err(transport)?;
        if file_id.is_some() && response.status() == StatusCode::NOT_FOUND {
            return Err(AppError::Sync(SyncError::DocumentNotFound));
        }
        let file: DriveFile = error_for_response(response)
            .await?
            .json()
            .await
            .map_err(transport)?;
        log_info(&format!("stored document '{}' as '{}'", name, file.id));
        Ok(file.id)
    }

    async fn download(&self, token: &AccessToken, file_id: &str) -> Result<Value, AppError> {
        let response = self
            .client
            .get(format!("{}/{}", DRIVE_FILES_URL, file_id))
            .bearer_auth(&token.value)
            .query(&[("alt", "media")])
            .send()
            .await
            .map_err(transport)?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(AppError::Sync(SyncError::DocumentNotFound));
        }
        let bytes = error_for_response(response)
            .await?
            .bytes()
            .await
            .map_err(transport)?;
        serde_json::from_slice(&bytes)
            .map_err(|e| AppError::Sync(SyncError::MalformedPayload(e.to_string())))
    }
}
