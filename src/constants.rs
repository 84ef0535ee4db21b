pub const APP_DIRECTORY_NAME: &str = ".attend4all";
pub const LOG_FILE_NAME: &str = "attend4all.log";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOCAL_STATE_FILE_NAME: &str = "local_state.json";
pub const DEFAULT_LANGUAGE: &str = "en";

// remote document
pub const DRIVE_FILE_NAME: &str = "attend4all-data.json";
pub const DRIVE_FILE_ID_KEY: &str = "google_drive_file_id";
pub const DRIVE_FILE_MIME_TYPE: &str = "application/json";

// google endpoints
pub const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
pub const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
pub const GOOGLE_REVOKE_URL: &str = "https://oauth2.googleapis.com/revoke";
pub const GOOGLE_USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v3/userinfo";
pub const DRIVE_FILES_URL: &str = "https://www.googleapis.com/drive/v3/files";
pub const DRIVE_UPLOAD_URL: &str = "https://www.googleapis.com/upload/drive/v3/files";
pub const SHEETS_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";
pub const GOOGLE_SCOPES: &str = "openid email https://www.googleapis.com/auth/drive.file https://www.googleapis.com/auth/spreadsheets";

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_AUTH_TIMEOUT_SECS: u64 = 180;
