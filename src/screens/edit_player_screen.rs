use std::sync::Arc;

use crate::{
    errors::{AppError, ValidationError},
    localization::current_labels,
    screens::{
        components::{
            navigation_footer::NavigationFooter, notify_banner::NotifyBanner, text_box::TextBox,
        },
        screen::{error_message, get_keybinding_actions, AppAction, Renderable, ScreenAsync},
    },
    shapes::{
        enums::ScreenActionEnum, keybinding::KeyBindings, player::PlayerEntry,
        roster::RosterAction, settings::current_settings,
    },
    store::RosterStore,
};
use async_trait::async_trait;
use crokey::{
    crossterm::event::{KeyCode, KeyEvent},
    Combiner,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders},
    Frame,
};

const MAX_NAME_LENGTH: usize = 40;

fn validate_player_name(current: &str, c: char) -> bool {
    !c.is_control() && current.chars().count() < MAX_NAME_LENGTH
}

/// Renames the selected player.
#[derive(Debug)]
pub struct EditPlayerScreen {
    store: Arc<RosterStore>,
    player: PlayerEntry,
    name: TextBox,
    notify_message: NotifyBanner,
    back: bool,
    footer: NavigationFooter,
    footer_entries: Vec<(String, String)>,
    combiner: Combiner,
    screen_key_bindings: KeyBindings,
}

impl Renderable for EditPlayerScreen {
    fn render(&mut self, f: &mut Frame, body: Rect, footer_left: Rect, footer_right: Rect) {
        let block = Block::default().borders(Borders::ALL).title(format!(
            "{}: {}",
            current_labels().rename_player,
            self.player
        ));
        let inner = block.inner(body);
        f.render_widget(block, body);
        let area = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Length(3), Constraint::Min(1)])
            .split(inner);
        self.name.render(f, area[0]);
        self.notify_message.render(f, footer_right);
        self.footer.render(f, footer_left, &self.footer_entries);
    }
}

#[async_trait]
impl ScreenAsync for EditPlayerScreen {
    async fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        let Some(key_combination) = self.combiner.transform(key) else {
            return AppAction::None;
        };
        match (
            self.notify_message.has_value(),
            self.screen_key_bindings.get(key_combination),
            key.code,
        ) {
            (true, _, _) => {
                self.notify_message.reset();
                if self.back {
                    AppAction::Back(true, Some(1))
                } else {
                    AppAction::None
                }
            }
            (_, Some(ScreenActionEnum::Back), _) => AppAction::Back(false, Some(1)),
            (_, Some(ScreenActionEnum::Confirm), _) => self.handle_enter(),
            (_, _, KeyCode::Char(c)) => {
                self.name.handle_char(c);
                AppAction::None
            }
            (_, _, KeyCode::Backspace) => {
                self.name.handle_backspace();
                AppAction::None
            }
            _ => AppAction::None,
        }
    }

    async fn refresh_data(&mut self) {}
}

impl EditPlayerScreen {
    pub fn new(store: Arc<RosterStore>, player: PlayerEntry) -> Self {
        let name = TextBox::with_validator(
            current_labels().name.to_owned(),
            true,
            Some(&player.name),
            validate_player_name,
        );
        let actions = [ScreenActionEnum::Confirm, ScreenActionEnum::Back];
        let kb = current_settings().keybindings;
        EditPlayerScreen {
            store,
            player,
            name,
            notify_message: NotifyBanner::new(),
            back: false,
            footer: NavigationFooter::new(),
            footer_entries: get_keybinding_actions(&kb, &actions),
            combiner: Combiner::default(),
            screen_key_bindings: kb.slice(&actions),
        }
    }

    fn handle_enter(&mut self) -> AppAction {
        let labels = current_labels();
        let result = match self.name.get_selected_value() {
            Some(name) => self
                .store
                .dispatch(RosterAction::RenamePlayer(self.player.id, name)),
            None => Err(AppError::Validation(ValidationError::EmptyName)),
        };
        match result {
            Ok(_) => AppAction::Back(true, Some(1)),
            Err(e @ AppError::Validation(ValidationError::PlayerNotFound(_))) => {
                // removed in the meantime, nothing left to rename
                self.back = true;
                self.notify_message
                    .set_error(error_message(labels, "", &e));
                AppAction::None
            }
            Err(e) => {
                self.notify_message
                    .set_error(error_message(labels, "", &e));
                AppAction::None
            }
        }
    }
}
