use crate::{
    constants::{DEFAULT_AUTH_TIMEOUT_SECS, DEFAULT_LANGUAGE, DEFAULT_REQUEST_TIMEOUT_SECS},
    shapes::{enums::LanguageEnum, keybinding::KeyBindings},
};
use dirs::home_dir;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::{path::PathBuf, str::FromStr, sync::RwLock, time::Duration};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    pub language: LanguageEnum,
    #[serde(default)]
    pub keybindings: KeyBindings,
    /// Overrides the `GOOGLE_CLIENT_ID` environment variable when set.
    #[serde(default)]
    pub google_client_id: Option<String>,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_auth_timeout_secs")]
    pub auth_timeout_secs: u64,
    #[serde(default = "default_last_used_dir")]
    pub last_used_dir: Option<PathBuf>,
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_auth_timeout_secs() -> u64 {
    DEFAULT_AUTH_TIMEOUT_SECS
}

fn default_last_used_dir() -> Option<PathBuf> {
    None
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: LanguageEnum::from_str(DEFAULT_LANGUAGE).unwrap_or(LanguageEnum::En),
            keybindings: KeyBindings::default(),
            google_client_id: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            auth_timeout_secs: DEFAULT_AUTH_TIMEOUT_SECS,
            last_used_dir: None,
        }
    }
}

impl Settings {
    pub fn get_default_path(&self) -> Option<PathBuf> {
        self.last_used_dir.clone().or_else(home_dir)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn auth_timeout(&self) -> Duration {
        Duration::from_secs(self.auth_timeout_secs)
    }
}

static CURRENT_SETTING: OnceCell<RwLock<Settings>> = OnceCell::new();

/// Default settings initialization (should be called once at startup).
pub fn init_settings(default: Settings) {
    if CURRENT_SETTING.set(RwLock::new(default.clone())).is_err() {
        set_settings(default);
    }
}

/// Replaces the current settings.
pub fn set_settings(settings: Settings) {
    if let Some(lock) = CURRENT_SETTING.get() {
        if let Ok(mut current) = lock.write() {
            *current = settings;
        }
    }
}

/// Returns the current settings.
pub fn current_settings() -> Settings {
    CURRENT_SETTING
        .get()
        .and_then(|lock| lock.read().ok().map(|s| s.clone()))
        .unwrap_or_default()
}
