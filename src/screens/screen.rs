use crate::{
    errors::{AppError, SyncError, ValidationError},
    localization::Labels,
    shapes::{enums::ScreenActionEnum, keybinding::KeyBindings},
};
use async_trait::async_trait;
use crokey::crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

pub enum AppAction {
    None,
    SwitchScreen(Box<dyn ScreenAsync>),
    Back(bool, Option<u8>), // the boolean value indicates if the previous screen needs to be refreshed
    Quit(std::io::Result<()>),
}

pub trait Renderable {
    fn render(&mut self, f: &mut Frame, body: Rect, footer_left: Rect, footer_right: Rect);
}

#[async_trait]
pub trait ScreenAsync: Renderable + Send {
    async fn handle_key(&mut self, key: KeyEvent) -> AppAction;
    async fn refresh_data(&mut self);
    /// Called once per frame, after rendering. Screens run deferred work
    /// here so that a progress banner is on screen while it runs.
    async fn tick(&mut self) {}
}

/// Footer entries (`key`, `description`) for the given actions.
pub fn get_keybinding_actions(
    kb: &KeyBindings,
    actions: &[ScreenActionEnum],
) -> Vec<(String, String)> {
    actions
        .iter()
        .filter_map(|action| {
            kb.shortest_key_for(action)
                .map(|ck| (ck.to_string(), action.description().to_string()))
        })
        .collect()
}

/// Turns an error into the message shown in the notify banner.
pub fn error_message(labels: &Labels, prefix: &str, e: &AppError) -> String {
    let detail = match e {
        AppError::Sync(SyncError::NotSignedIn) => labels.not_signed_in.to_string(),
        AppError::Sync(SyncError::DocumentNotFound) => labels.no_document_found.to_string(),
        AppError::Sync(SyncError::MalformedPayload(m)) => {
            format!("{} ({})", labels.malformed_document, m)
        }
        AppError::Validation(ValidationError::DuplicateDate(_)) => {
            labels.date_already_exists.to_string()
        }
        AppError::Validation(ValidationError::EmptyName) => {
            labels.name_cannot_be_empty.to_string()
        }
        AppError::Validation(ValidationError::InvalidDate(_)) => labels.invalid_date.to_string(),
        AppError::Validation(ValidationError::PlayerNotFound(_)) => {
            labels.player_not_found.to_string()
        }
        other => other.to_string(),
    };
    if prefix.is_empty() {
        detail
    } else {
        format!("{}: {}", prefix, detail)
    }
}
